use serde::{Deserialize, Serialize};

use crate::{ActionKind, NA};

pub const PLAY_HEADER: [&str; 16] = [
    "Match_ID",
    "Game_Num",
    "Play_Num",
    "Turn_Num",
    "Casting_Player",
    "Action",
    "Primary_Card",
    "Target1",
    "Target2",
    "Target3",
    "Opp_Target",
    "Self_Target",
    "Cards_Drawn",
    "Attackers",
    "Active_Player",
    "Nonactive_Player",
];

/// One row per classified in-game action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub match_id: String,
    pub game_num: u32,
    pub play_num: u32,
    pub turn_num: u32,
    pub casting_player: String,
    pub action: ActionKind,
    pub primary_card: String,
    pub target1: String,
    pub target2: String,
    pub target3: String,
    pub opp_target: bool,
    pub self_target: bool,
    pub cards_drawn: u32,
    pub attackers: u32,
    pub active_player: String,
    pub nonactive_player: String,
}

impl PlayRecord {
    pub fn new(match_id: String, action: ActionKind) -> Self {
        Self {
            match_id,
            game_num: 0,
            play_num: 0,
            turn_num: 0,
            casting_player: String::new(),
            action,
            primary_card: NA.to_string(),
            target1: NA.to_string(),
            target2: NA.to_string(),
            target3: NA.to_string(),
            opp_target: false,
            self_target: false,
            cards_drawn: 0,
            attackers: 0,
            active_player: String::new(),
            nonactive_player: String::new(),
        }
    }

    pub fn targets(&self) -> [&str; 3] {
        [&self.target1, &self.target2, &self.target3]
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.match_id.clone(),
            self.game_num.to_string(),
            self.play_num.to_string(),
            self.turn_num.to_string(),
            self.casting_player.clone(),
            self.action.to_string(),
            self.primary_card.clone(),
            self.target1.clone(),
            self.target2.clone(),
            self.target3.clone(),
            u8::from(self.opp_target).to_string(),
            u8::from(self.self_target).to_string(),
            self.cards_drawn.to_string(),
            self.attackers.to_string(),
            self.active_player.clone(),
            self.nonactive_player.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_render_as_digits() {
        let mut play = PlayRecord::new("m".to_string(), ActionKind::Casts);
        play.opp_target = true;
        let row = play.to_row();
        assert_eq!(row.len(), PLAY_HEADER.len());
        assert_eq!(row[5], "Casts");
        assert_eq!(row[6], "NA");
        assert_eq!((row[10].as_str(), row[11].as_str()), ("1", "0"));
    }
}
