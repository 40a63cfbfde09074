use std::collections::HashMap;

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use types::{decide_match_winner, GameRecord, MatchRecord, Seat};

use crate::{names, players::two_players, ActionLog, ParseError, ParserConfig};

lazy_static! {
    static ref DIE_ROLL: Regex = Regex::new(r"(\S+) rolled a ([1-6])").expect("Valid roll regex");
}

pub const DATE_FORMAT: &str = "%Y-%m-%d-%H:%M";

/// First roll each player made, keyed by parse-safe name.
pub fn die_rolls(actions: &[String]) -> HashMap<String, u8> {
    let mut rolls = HashMap::new();
    for caps in actions.iter().flat_map(|action| DIE_ROLL.captures_iter(action)) {
        if let Ok(roll) = caps[2].parse::<u8>() {
            rolls.entry(caps[1].to_string()).or_insert(roll);
        }
    }
    rolls
}

/// The player named by the first disconnection or match timeout, in
/// parse-safe form.
pub fn check_timeout(actions: &[String], config: &ParserConfig) -> Option<String> {
    let action = actions.iter().find(|action| {
        config
            .timeout_sentences
            .iter()
            .any(|sentence| action.contains(sentence.as_str()))
    })?;
    let player = action.split_whitespace().next()?.to_string();
    log::info!("Timeout detected for {player}");
    Some(player)
}

/// Builds the match record from the action log and the games already
/// segmented from it.
pub fn get_match_data(
    match_actions: &ActionLog,
    games: &[GameRecord],
    modified: NaiveDateTime,
    config: &ParserConfig,
) -> Result<MatchRecord, ParseError> {
    let (p1, p2) = two_players(&match_actions.players())?;
    let rolls = die_rolls(match_actions.actions());
    let (p1_roll, p2_roll) = match (rolls.get(&p1), rolls.get(&p2)) {
        (Some(p1_roll), Some(p2_roll)) => (*p1_roll, *p2_roll),
        _ => {
            return Err(ParseError::MissingRolls {
                p1: names::to_literal(&p1),
                p2: names::to_literal(&p2),
            })
        }
    };

    let match_id = match_actions.match_id();
    let (p1_wins, p2_wins) = games
        .iter()
        .filter(|game| game.match_id == match_id)
        .fold((0, 0), |(p1_wins, p2_wins), game| match game.game_winner {
            Seat::P1 => (p1_wins + 1, p2_wins),
            Seat::P2 => (p1_wins, p2_wins + 1),
            Seat::NA => (p1_wins, p2_wins),
        });
    let timed_out = check_timeout(match_actions.actions(), config);

    let mut record = MatchRecord::new(
        match_id.to_string(),
        names::to_literal(&p1),
        names::to_literal(&p2),
    );
    record.p1_roll = p1_roll;
    record.p2_roll = p2_roll;
    record.roll_winner = if p1_roll > p2_roll { Seat::P1 } else { Seat::P2 };
    record.p1_wins = p1_wins;
    record.p2_wins = p2_wins;
    record.match_winner = decide_match_winner(p1_wins, p2_wins, timed_out.as_deref(), &p1, &p2);
    record.date = modified.format(DATE_FORMAT).to_string();
    Ok(record)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use types::{PlayDraw, NA};

    use super::*;

    const MATCH_ID: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee_Alice_Bo+B";

    fn modified() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 5)
            .and_then(|date| date.and_hms_opt(18, 7, 0))
            .unwrap()
    }

    fn log(extra: &[&str]) -> ActionLog {
        let mut actions = vec![
            MATCH_ID.to_string(),
            "Alice joined the game.".to_string(),
            "Bo+B joined the game.".to_string(),
        ];
        actions.extend(extra.iter().map(|s| s.to_string()));
        ActionLog::from_actions(actions)
    }

    fn game(game_num: u32, game_winner: Seat) -> GameRecord {
        GameRecord {
            match_id: MATCH_ID.to_string(),
            p1: "Alice".to_string(),
            p2: "Bo B".to_string(),
            game_num,
            pd_selector: Seat::P1,
            pd_choice: PlayDraw::Play,
            on_play: Seat::P1,
            on_draw: Seat::P2,
            p1_mulls: 0,
            p2_mulls: 0,
            turns: 5,
            game_winner,
        }
    }

    #[test]
    fn test_higher_roll_wins() {
        let actions = log(&["Alice rolled a 6.", "Bo+B rolled a 4."]);
        let record = get_match_data(&actions, &[], modified(), &ParserConfig::default()).unwrap();
        assert_eq!((record.p1_roll, record.p2_roll), (6, 4));
        assert_eq!(record.roll_winner, Seat::P1);
        assert_eq!(record.p2, "Bo B");
        assert_eq!(record.date, "2023-04-05-18:07");
        assert_eq!(record.format, NA);
    }

    #[test]
    fn test_equal_rolls_go_to_second_player() {
        let actions = log(&["Alice rolled a 5.", "Bo+B rolled a 5.", "Alice rolled a 2."]);
        let record = get_match_data(&actions, &[], modified(), &ParserConfig::default()).unwrap();
        assert_eq!((record.p1_roll, record.p2_roll), (5, 5));
        assert_eq!(record.roll_winner, Seat::P2);
    }

    #[test]
    fn test_missing_roll() {
        let actions = log(&["Alice rolled a 3."]);
        let err = get_match_data(&actions, &[], modified(), &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::MissingRolls { ref p2, .. } if p2 == "Bo B"));
    }

    #[test]
    fn test_wins_counted_per_game() {
        let actions = log(&["Alice rolled a 1.", "Bo+B rolled a 2."]);
        let games = [game(1, Seat::P2), game(2, Seat::P1), game(3, Seat::P2)];
        let record =
            get_match_data(&actions, &games, modified(), &ParserConfig::default()).unwrap();
        assert_eq!((record.p1_wins, record.p2_wins), (1, 2));
        assert_eq!(record.match_winner, Seat::P2);
    }

    #[test]
    fn test_timeout_breaks_tie() {
        let actions = log(&[
            "Alice rolled a 1.",
            "Bo+B rolled a 2.",
            "Bo+B has lost the game due to disconnection.",
        ]);
        let games = [game(1, Seat::P1), game(2, Seat::NA)];
        let record =
            get_match_data(&actions, &games, modified(), &ParserConfig::default()).unwrap();
        assert_eq!((record.p1_wins, record.p2_wins), (1, 0));
        assert_eq!(record.match_winner, Seat::P1);

        let record = get_match_data(&actions, &[], modified(), &ParserConfig::default()).unwrap();
        assert_eq!(record.match_winner, Seat::P1);
    }

    #[test]
    fn test_tie_without_timeout_is_unknown() {
        let actions = log(&["Alice rolled a 1.", "Bo+B rolled a 2."]);
        let games = [game(1, Seat::P1), game(2, Seat::P2)];
        let record =
            get_match_data(&actions, &games, modified(), &ParserConfig::default()).unwrap();
        assert_eq!(record.match_winner, Seat::NA);
    }

    #[test]
    fn test_check_timeout_names_first_player() {
        let actions = vec![
            "Alice casts @[Opt@].".to_string(),
            "Alice has run out of time and has lost the match.".to_string(),
            "Bo+B has lost the game due to disconnection.".to_string(),
        ];
        let config = ParserConfig::default();
        assert_eq!(check_timeout(&actions, &config).as_deref(), Some("Alice"));
        assert_eq!(check_timeout(&actions[..1], &config), None);
    }
}
