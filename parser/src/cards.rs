use std::collections::BTreeSet;

use itertools::Itertools;
use types::{ActionKind, PlayRecord, NA};

use crate::ParserConfig;

/// Distinct cards a player cast or played as a land, with split and
/// adventure halves mapped to the full card name.
pub fn cards_played(plays: &[PlayRecord], player: &str, config: &ParserConfig) -> BTreeSet<String> {
    plays
        .iter()
        .filter(|play| play.casting_player == player)
        .filter(|play| matches!(play.action, ActionKind::Casts | ActionKind::LandDrop))
        .filter(|play| play.primary_card != NA)
        .map(|play| config.canonical_card(&play.primary_card).to_string())
        .collect()
}

/// Colour letters of the basic lands among `cards`, in WUBRG order.
pub fn limited_subarch(cards: &BTreeSet<String>, config: &ParserConfig) -> String {
    let colours = config
        .basic_lands
        .iter()
        .filter(|(land, _)| cards.contains(land))
        .map(|(_, colour)| colour)
        .join("");
    if colours.is_empty() {
        NA.to_string()
    } else {
        colours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(player: &str, action: ActionKind, card: &str) -> PlayRecord {
        let mut play = PlayRecord::new("m".to_string(), action);
        play.casting_player = player.to_string();
        play.primary_card = card.to_string();
        play
    }

    #[test]
    fn test_cards_played_maps_aliases() {
        let config = ParserConfig::default();
        let plays = vec![
            play("Alice", ActionKind::Casts, "Stomp"),
            play("Alice", ActionKind::LandDrop, "Mountain"),
            play("Alice", ActionKind::Casts, "Bonecrusher Giant"),
            play("Alice", ActionKind::Discards, "Opt"),
            play("Alice", ActionKind::Casts, NA),
            play("Bob", ActionKind::Casts, "Opt"),
        ];
        let cards = cards_played(&plays, "Alice", &config);
        assert_eq!(
            cards.into_iter().collect::<Vec<_>>(),
            vec!["Bonecrusher Giant".to_string(), "Mountain".to_string()]
        );
    }

    #[test]
    fn test_limited_subarch_in_colour_order() {
        let config = ParserConfig::default();
        let cards: BTreeSet<String> = ["Swamp", "Plains", "Opt"].iter().map(|s| s.to_string()).collect();
        assert_eq!(limited_subarch(&cards, &config), "WB");
        assert_eq!(limited_subarch(&BTreeSet::new(), &config), "NA");
    }
}
