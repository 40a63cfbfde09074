use serde::{Deserialize, Serialize};

use crate::{PlayDraw, Seat};

pub const GAME_HEADER: [&str; 12] = [
    "Match_ID",
    "P1",
    "P2",
    "Game_Num",
    "PD_Selector",
    "PD_Choice",
    "On_Play",
    "On_Draw",
    "P1_Mulls",
    "P2_Mulls",
    "Turns",
    "Game_Winner",
];

/// One row per game within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub match_id: String,
    pub p1: String,
    pub p2: String,
    pub game_num: u32,
    pub pd_selector: Seat,
    pub pd_choice: PlayDraw,
    pub on_play: Seat,
    pub on_draw: Seat,
    pub p1_mulls: u8,
    pub p2_mulls: u8,
    pub turns: u32,
    pub game_winner: Seat,
}

impl GameRecord {
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.p1, &mut self.p2);
        std::mem::swap(&mut self.p1_mulls, &mut self.p2_mulls);
        std::mem::swap(&mut self.on_play, &mut self.on_draw);
        self.pd_selector = self.pd_selector.other();
        self.game_winner = self.game_winner.other();
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.match_id.clone(),
            self.p1.clone(),
            self.p2.clone(),
            self.game_num.to_string(),
            self.pd_selector.to_string(),
            self.pd_choice.to_string(),
            self.on_play.to_string(),
            self.on_draw.to_string(),
            self.p1_mulls.to_string(),
            self.p2_mulls.to_string(),
            self.turns.to_string(),
            self.game_winner.to_string(),
        ]
    }
}
