use serde::{Deserialize, Serialize};

use crate::{Seat, NA};

pub const MATCH_HEADER: [&str; 18] = [
    "Match_ID",
    "Draft_ID",
    "P1",
    "P1_Arch",
    "P1_Subarch",
    "P2",
    "P2_Arch",
    "P2_Subarch",
    "P1_Roll",
    "P2_Roll",
    "Roll_Winner",
    "P1_Wins",
    "P2_Wins",
    "Match_Winner",
    "Format",
    "Limited_Format",
    "Match_Type",
    "Date",
];

/// One row per match. Archetype and format fields are placeholders that
/// downstream classifiers fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: String,
    pub draft_id: String,
    pub p1: String,
    pub p1_arch: String,
    pub p1_subarch: String,
    pub p2: String,
    pub p2_arch: String,
    pub p2_subarch: String,
    pub p1_roll: u8,
    pub p2_roll: u8,
    pub roll_winner: Seat,
    pub p1_wins: u32,
    pub p2_wins: u32,
    pub match_winner: Seat,
    pub format: String,
    pub limited_format: String,
    pub match_type: String,
    pub date: String,
}

impl MatchRecord {
    pub fn new(match_id: String, p1: String, p2: String) -> Self {
        Self {
            match_id,
            draft_id: NA.to_string(),
            p1,
            p1_arch: NA.to_string(),
            p1_subarch: NA.to_string(),
            p2,
            p2_arch: NA.to_string(),
            p2_subarch: NA.to_string(),
            p1_roll: 0,
            p2_roll: 0,
            roll_winner: Seat::NA,
            p1_wins: 0,
            p2_wins: 0,
            match_winner: Seat::NA,
            format: NA.to_string(),
            limited_format: NA.to_string(),
            match_type: NA.to_string(),
            date: NA.to_string(),
        }
    }

    /// Swaps the point of view so that P2 becomes P1.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.p1, &mut self.p2);
        std::mem::swap(&mut self.p1_arch, &mut self.p2_arch);
        std::mem::swap(&mut self.p1_subarch, &mut self.p2_subarch);
        std::mem::swap(&mut self.p1_roll, &mut self.p2_roll);
        std::mem::swap(&mut self.p1_wins, &mut self.p2_wins);
        self.match_winner = self.match_winner.other();
        self.roll_winner = self.roll_winner.other();
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.match_id.clone(),
            self.draft_id.clone(),
            self.p1.clone(),
            self.p1_arch.clone(),
            self.p1_subarch.clone(),
            self.p2.clone(),
            self.p2_arch.clone(),
            self.p2_subarch.clone(),
            self.p1_roll.to_string(),
            self.p2_roll.to_string(),
            self.roll_winner.to_string(),
            self.p1_wins.to_string(),
            self.p2_wins.to_string(),
            self.match_winner.to_string(),
            self.format.clone(),
            self.limited_format.clone(),
            self.match_type.clone(),
            self.date.clone(),
        ]
    }
}
