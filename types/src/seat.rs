use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Which side of a match a value refers to. `NA` is the "intentionally
/// unknown" sentinel used throughout the records.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    P1,
    P2,
    #[default]
    NA,
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::P1 => write!(f, "P1"),
            Seat::P2 => write!(f, "P2"),
            Seat::NA => write!(f, "NA"),
        }
    }
}

impl Seat {
    /// The opposing seat. `NA` has no opponent and stays `NA`.
    pub fn other(self) -> Self {
        match self {
            Seat::P1 => Seat::P2,
            Seat::P2 => Seat::P1,
            Seat::NA => Seat::NA,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayDraw {
    Play,
    Draw,
    #[default]
    NA,
}

impl Display for PlayDraw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayDraw::Play => write!(f, "Play"),
            PlayDraw::Draw => write!(f, "Draw"),
            PlayDraw::NA => write!(f, "NA"),
        }
    }
}
