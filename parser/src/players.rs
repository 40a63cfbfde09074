use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::ParseError;

lazy_static! {
    static ref RAW_JOIN: Regex =
        Regex::new(r"@P@P(.+?) joined the game\.").expect("Valid raw join regex");
    static ref ACTION_JOIN: Regex =
        Regex::new(r"(?m)^(.*?) joined the game").expect("Valid action join regex");
}

/// Player names from the raw log text, in literal form.
pub fn from_raw_log(game_log: &str) -> Vec<String> {
    longest_first(RAW_JOIN.captures_iter(game_log).map(|caps| caps[1].to_string()))
}

/// Player names from tokenized actions, in parse-safe form.
pub fn from_actions(actions: &[String]) -> Vec<String> {
    let joined = actions.join("\n");
    longest_first(ACTION_JOIN.captures_iter(&joined).map(|caps| caps[1].to_string()))
}

/// Names are replaced inside log text longest first, so a name that is a
/// prefix of another never clobbers part of the longer one.
fn longest_first(names: impl Iterator<Item = String>) -> Vec<String> {
    names
        .unique()
        .sorted_by(|a, b| b.chars().count().cmp(&a.chars().count()))
        .collect()
}

pub fn two_players(players: &[String]) -> Result<(String, String), ParseError> {
    match players {
        [p1, p2, ..] => Ok((p1.clone(), p2.clone())),
        _ => Err(ParseError::PlayersNotFound {
            found: players.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_players_longest_first() {
        let log = "@P@PBob joined the game.xxxx@P@PBobby Tables joined the game.yyyy\
                   @P@PBob joined the game.zzzz";
        assert_eq!(from_raw_log(log), vec!["Bobby Tables", "Bob"]);
    }

    #[test]
    fn test_action_players() {
        let actions = vec![
            "id".to_string(),
            "Al joined the game.".to_string(),
            "Carol+Ann joined the game.".to_string(),
            "Al casts @[Shock@].".to_string(),
        ];
        assert_eq!(from_actions(&actions), vec!["Carol+Ann", "Al"]);
    }

    #[test]
    fn test_two_players_requires_two() {
        let one = vec!["Alice".to_string()];
        let err = two_players(&one).unwrap_err();
        assert!(matches!(err, ParseError::PlayersNotFound { found: 1 }));
    }
}
