use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{match_id, names, players, walk, ActionLog, ParseError, ParserConfig};

/// Separates entries in the raw log.
pub const ENTRY_DELIMITER: &str = "@P";

const NOISE: [&str; 2] = [
    // looking at extra cards
    " draws their next card.",
    // sideboarding
    " has left the game.",
];

lazy_static! {
    static ref CARD_ANNOTATION: Regex =
        Regex::new(r"(@\[.+?)(@:\d+?,\d+?:)(@\])").expect("Valid card annotation regex");
}

/// Strips the junk the client appends after an entry. The junk is at least
/// `artifact_len` characters; when it runs a little longer the cut falls
/// back to the last period, which occasionally leaves a stray period behind.
pub fn remove_text_artifacts(
    game_action: &str,
    config: &ParserConfig,
) -> Result<String, ParseError> {
    let chars: Vec<char> = game_action.chars().collect();
    let tail_start = chars.len().saturating_sub(config.artifact_len);
    let tail: String = chars[tail_start..].iter().collect();
    if config
        .common_words
        .iter()
        .any(|word| !word.is_empty() && tail.contains(word.as_str()))
    {
        return Err(ParseError::Artifact(game_action.to_string()));
    }

    let kept = &chars[..tail_start];
    let window = &kept[kept.len().saturating_sub(4)..kept.len().saturating_sub(1)];
    let kept: String = kept.iter().collect();
    if window.contains(&'.') {
        if let Some((before, _)) = kept.rsplit_once('.') {
            return Ok(before.to_string());
        }
    }
    Ok(kept)
}

/// Splits a raw log into its ordered action tokens, with the match id as
/// token zero.
pub fn all_actions(game_log: &str, config: &ParserConfig) -> Result<ActionLog, ParseError> {
    let match_id = match_id::get_match_id(game_log)?;
    let players = players::from_raw_log(game_log);
    log::info!("Tokenizing match {match_id} with players {players:?}");
    let turn_header = walk::turn_header_regex(&players)?;

    let mut safe_log = game_log.to_string();
    for player in &players {
        safe_log = safe_log.replace(player.as_str(), &names::to_parse_safe(player));
    }

    // the first fragment is the header, and only the last has no artifacts
    let fragments: Vec<&str> = safe_log.split(ENTRY_DELIMITER).collect();
    let mut entries = Vec::with_capacity(fragments.len());
    if let Some((last, middle)) = fragments.split_last() {
        for fragment in middle.iter().skip(1) {
            entries.push(remove_text_artifacts(fragment, config)?);
        }
        if fragments.len() > 1 {
            entries.push(last.to_string());
        }
    }

    let mut match_actions = ActionLog::new(match_id);
    let mut lost_connection: HashMap<String, bool> = HashMap::new();
    for action in entries {
        let Some(first_word) = action.split_whitespace().next() else {
            continue;
        };
        if let Some(header) = turn_header.find(&action) {
            match_actions.push(header.as_str());
        } else if action.contains(" has lost connection to the game") {
            lost_connection.insert(first_word.to_string(), true);
        } else if action.contains(" joined the game.") {
            let reconnecting = lost_connection.insert(first_word.to_string(), false);
            if reconnecting == Some(true) {
                log::debug!("Dropping reconnect of {first_word}");
            } else {
                match_actions.push(action.as_str());
            }
        } else if NOISE.iter().any(|noise| action.contains(noise)) {
            continue;
        } else if !action.contains('.') && !action.contains("is being attacked") {
            // game state changes
            continue;
        } else {
            let action = CARD_ANNOTATION.replace_all(&action, "${1}${3}");
            match_actions.push(action.into_owned());
        }
    }
    log::debug!(
        "Tokenized {} actions for {}",
        match_actions.len(),
        match_actions.match_id()
    );
    Ok(match_actions)
}
