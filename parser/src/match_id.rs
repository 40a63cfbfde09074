use lazy_static::lazy_static;
use regex::Regex;

use crate::{players, ParseError};

lazy_static! {
    static ref ID_CANDIDATE: Regex =
        Regex::new(r"\$([0-9a-zA-Z-]{36})").expect("Valid match id regex");
    static ref FULL_MATCH_ID: Regex =
        Regex::new(r"^[0-9a-zA-Z-]{36}_.+?_.+$").expect("Valid full match id regex");
}

/// Finds the opaque id the client writes as `$<id>`, one or two filler
/// characters, then `$<id>` again.
pub fn pure_match_id(game_log: &str) -> Option<&str> {
    ID_CANDIDATE
        .captures_iter(game_log)
        .filter_map(|caps| caps.get(1))
        .find(|id| repeats_after_filler(&game_log[id.end()..], id.as_str()))
        .map(|id| id.as_str())
}

fn repeats_after_filler(rest: &str, id: &str) -> bool {
    let mut offset = 0;
    for filler in rest.chars().take(2) {
        if filler == '\n' {
            return false;
        }
        offset += filler.len_utf8();
        if rest[offset..]
            .strip_prefix('$')
            .is_some_and(|tail| tail.starts_with(id))
        {
            return true;
        }
    }
    false
}

/// `{opaque_id}_{player1}_{player2}` with players in longest-first order.
pub fn get_match_id(game_log: &str) -> Result<String, ParseError> {
    let pure_id = pure_match_id(game_log).ok_or(ParseError::MatchIdNotFound)?;
    let (p1, p2) = players::two_players(&players::from_raw_log(game_log))?;
    Ok(format!("{pure_id}_{p1}_{p2}"))
}

pub fn validate_match_id(match_id: &str) -> Result<(), ParseError> {
    if FULL_MATCH_ID.is_match(match_id) {
        Ok(())
    } else {
        Err(ParseError::InvalidMatchId(match_id.to_string()))
    }
}
