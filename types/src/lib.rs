pub mod action;
pub mod game_record;
pub mod match_record;
pub mod play_record;
pub mod seat;
pub mod tally;

pub use action::ActionKind;
pub use game_record::{GameRecord, GAME_HEADER};
pub use match_record::{MatchRecord, MATCH_HEADER};
pub use play_record::{PlayRecord, PLAY_HEADER};
pub use seat::{PlayDraw, Seat};
pub use tally::{decide_match_winner, invert_join, update_game_wins};

/// Sentinel for a string field whose value is intentionally unknown.
pub const NA: &str = "NA";
