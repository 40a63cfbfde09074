use std::collections::HashMap;

use itertools::Itertools;

use crate::{GameRecord, MatchRecord, Seat};

/// Recomputes game wins and the match winner for every match from the games
/// that share its match id. `timeouts` maps a match id to the literal name of
/// the player who timed out; it only decides matches whose wins are tied.
pub fn update_game_wins(
    matches: &mut [MatchRecord],
    games: &[GameRecord],
    timeouts: &HashMap<String, String>,
) {
    for record in matches.iter_mut() {
        let counts = games
            .iter()
            .filter(|game| game.match_id == record.match_id)
            .map(|game| game.game_winner)
            .counts();
        record.p1_wins = counts.get(&Seat::P1).copied().unwrap_or(0) as u32;
        record.p2_wins = counts.get(&Seat::P2).copied().unwrap_or(0) as u32;
        record.match_winner = decide_match_winner(
            record.p1_wins,
            record.p2_wins,
            timeouts.get(&record.match_id).map(String::as_str),
            &record.p1,
            &record.p2,
        );
        log::debug!(
            "Re-tallied {}: {}-{} winner {}",
            record.match_id,
            record.p1_wins,
            record.p2_wins,
            record.match_winner
        );
    }
}

/// More game wins takes the match. On a tie the player who timed out loses,
/// and without a timeout the winner is unknown.
pub fn decide_match_winner(
    p1_wins: u32,
    p2_wins: u32,
    timed_out: Option<&str>,
    p1: &str,
    p2: &str,
) -> Seat {
    if p1_wins > p2_wins {
        return Seat::P1;
    }
    if p2_wins > p1_wins {
        return Seat::P2;
    }
    match timed_out {
        Some(player) if player == p1 => Seat::P2,
        Some(player) if player == p2 => Seat::P1,
        _ => Seat::NA,
    }
}

/// Returns inverted copies of every match and game, followed by the
/// originals, so each match appears once from each player's point of view.
pub fn invert_join(
    matches: &[MatchRecord],
    games: &[GameRecord],
) -> (Vec<MatchRecord>, Vec<GameRecord>) {
    let mut all_matches: Vec<MatchRecord> = matches
        .iter()
        .cloned()
        .update(|record| record.invert())
        .collect();
    all_matches.extend(matches.iter().cloned());

    let mut all_games: Vec<GameRecord> = games
        .iter()
        .cloned()
        .update(|game| game.invert())
        .collect();
    all_games.extend(games.iter().cloned());

    (all_matches, all_games)
}
