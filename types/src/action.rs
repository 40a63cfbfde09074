use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The kind of in-game action a play record describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "Land Drop")]
    LandDrop,
    Casts,
    Draws,
    #[serde(rename = "Activated Ability")]
    ActivatedAbility,
    Discards,
    Attacks,
    Triggers,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            ActionKind::LandDrop => "Land Drop",
            ActionKind::Casts => "Casts",
            ActionKind::Draws => "Draws",
            ActionKind::ActivatedAbility => "Activated Ability",
            ActionKind::Discards => "Discards",
            ActionKind::Attacks => "Attacks",
            ActionKind::Triggers => "Triggers",
        };
        write!(f, "{}", string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_name() {
        for kind in [
            ActionKind::LandDrop,
            ActionKind::Casts,
            ActionKind::Draws,
            ActionKind::ActivatedAbility,
            ActionKind::Discards,
            ActionKind::Attacks,
            ActionKind::Triggers,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
