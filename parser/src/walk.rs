//! Running match state shared by the game segmenter and the play
//! classifier. Both passes recognise the same boundary tokens and advance
//! the same [`WalkState`], so turn and game numbering cannot drift apart.

use itertools::Itertools;
use regex::Regex;
use types::{PlayDraw, Seat};

use crate::{names, ParseError};

/// Matches `Turn <n>: <player>` anywhere in a fragment. Alternatives are
/// tried in the given order, so pass names longest first.
pub fn turn_header_regex(players: &[String]) -> Result<Regex, ParseError> {
    Ok(Regex::new(&format!(r"Turn (\d+): ({})", name_alternation(players)))?)
}

fn name_alternation(players: &[String]) -> String {
    players
        .iter()
        .map(|player| regex::escape(&names::to_parse_safe(player)))
        .join("|")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary<'a> {
    Join,
    PlayDrawChoice { selector: Seat, choice: PlayDraw },
    OpeningHand { player: &'a str, hand_word: Option<&'a str> },
    TurnHeader { turn: u32, active: &'a str },
    Other,
}

#[derive(Debug, Clone)]
pub struct BoundaryRules {
    p1: String,
    p2: String,
    turn_header: Regex,
}

impl BoundaryRules {
    /// `p1` and `p2` are parse-safe names.
    pub fn new(p1: &str, p2: &str) -> Result<Self, ParseError> {
        let players = [p1.to_string(), p2.to_string()];
        let turn_header = Regex::new(&format!(
            r"^Turn (\d+): ({})$",
            name_alternation(&players)
        ))?;
        Ok(Self {
            p1: p1.to_string(),
            p2: p2.to_string(),
            turn_header,
        })
    }

    pub fn p1(&self) -> &str {
        &self.p1
    }

    pub fn p2(&self) -> &str {
        &self.p2
    }

    pub fn seat_of(&self, player: &str) -> Seat {
        if player == self.p1 {
            Seat::P1
        } else if player == self.p2 {
            Seat::P2
        } else {
            Seat::NA
        }
    }

    pub fn opponent_of(&self, player: &str) -> &str {
        if player == self.p1 {
            &self.p2
        } else {
            &self.p1
        }
    }

    pub fn classify<'a>(&self, action: &'a str) -> Boundary<'a> {
        let mut words = action.split_whitespace();
        if action.contains("joined the game") {
            return Boundary::Join;
        }
        if action.contains("chooses to") && action.contains("play first") {
            let selector = if words.next() == Some(self.p1.as_str()) {
                Seat::P1
            } else {
                Seat::P2
            };
            let choice = if words.nth(2) == Some("play") {
                PlayDraw::Play
            } else {
                PlayDraw::Draw
            };
            return Boundary::PlayDrawChoice { selector, choice };
        }
        if action.contains("begins the game with") && action.contains("cards in hand") {
            let player = words.next().unwrap_or_default();
            let hand_word = action
                .split(" begins the game with ")
                .nth(1)
                .and_then(|rest| rest.split_whitespace().next());
            return Boundary::OpeningHand { player, hand_word };
        }
        if let Some(caps) = self.turn_header.captures(action) {
            if let Ok(turn) = caps[1].parse() {
                let active = caps.get(2).map_or("", |m| m.as_str());
                return Boundary::TurnHeader { turn, active };
            }
        }
        Boundary::Other
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkState {
    pub game_num: u32,
    pub turn_num: u32,
    pub active_player: String,
    pub nonactive_player: String,
}

impl WalkState {
    /// Advances past a boundary token. Only play/draw choices and turn
    /// headers move the walk.
    pub fn observe(&mut self, boundary: &Boundary, rules: &BoundaryRules) {
        match boundary {
            Boundary::PlayDrawChoice { .. } => {
                self.game_num += 1;
            }
            Boundary::TurnHeader { turn, active } => {
                self.turn_num = *turn;
                self.active_player = active.to_string();
                self.nonactive_player = rules.opponent_of(active).to_string();
            }
            Boundary::Join | Boundary::OpeningHand { .. } | Boundary::Other => {}
        }
    }
}
