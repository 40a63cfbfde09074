use std::{fs, path::PathBuf};

use parser::{LogParser, ParserConfig};
use tracker::{load_log, parse_batch, parse_file, resolve_config, TrackerError, CONFIG_ENV};
use types::Seat;

const ARTIFACT: &str = "\u{1}\u{0}#$%^&*!~";

fn raw_log(pure_id: &str, entries: &[&str]) -> String {
    let mut log = format!("\u{2}${pure_id}\u{1}${pure_id}\u{3}");
    let last = entries.len().saturating_sub(1);
    for (i, text) in entries.iter().enumerate() {
        let delimiter = if text.ends_with(" joined the game.") { "@P@P" } else { "@P" };
        log.push_str(delimiter);
        log.push_str(text);
        if i < last {
            log.push_str(ARTIFACT);
        }
    }
    log
}

fn write_temp(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tracker-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn single_game(pure_id: &str, loser: &str) -> String {
    raw_log(
        pure_id,
        &[
            "Alice joined the game.",
            "Bob joined the game.",
            "Alice rolled a 3.",
            "Bob rolled a 6.",
            "Bob chooses to play first.",
            "Turn 1: Bob",
            "Bob plays @[Swamp@].",
            &format!("{loser} has conceded the game."),
        ],
    )
}

#[test]
fn test_load_log_tolerates_invalid_utf8() {
    let mut bytes = single_game("11111111-2222-3333-4444-555555555555", "Alice").into_bytes();
    bytes.insert(0, 0xff);
    let path = write_temp("invalid_utf8.log", &bytes);
    let (game_log, _) = load_log(&path).unwrap();
    assert!(game_log.starts_with('\u{fffd}'));

    let parsed = parse_file(&path, &LogParser::default()).unwrap();
    assert_eq!(parsed.match_record.roll_winner, Seat::P2);
    assert_eq!(parsed.games[0].game_winner, Seat::P2);
}

#[test]
fn test_batch_skips_failures_and_retallies() {
    let good = write_temp(
        "good.log",
        single_game("aaaaaaaa-2222-3333-4444-555555555555", "Bob").as_bytes(),
    );
    let bad = write_temp("bad.log", b"no match here");
    let missing = std::env::temp_dir().join("tracker-tests-missing.log");

    let batch = parse_batch(&[good, bad.clone(), missing.clone()], &LogParser::default());
    assert_eq!(batch.matches.len(), 1);
    assert_eq!(batch.failed, vec![bad, missing]);
    assert_eq!(batch.matches[0].p1_wins, 1);
    assert_eq!(batch.matches[0].match_winner, Seat::P1);
    assert_eq!(batch.plays.len(), 1);

    let inverted = batch.with_inverted();
    assert_eq!(inverted.matches.len(), 2);
    assert_eq!(inverted.matches[0].p1, "Bob");
    assert_eq!(inverted.matches[0].match_winner, Seat::P2);
    assert_eq!(inverted.games.len(), 2);
}

#[test]
fn test_batch_collects_timeouts() {
    let log = raw_log(
        "bbbbbbbb-2222-3333-4444-555555555555",
        &[
            "Alice joined the game.",
            "Bob joined the game.",
            "Alice rolled a 3.",
            "Bob rolled a 6.",
            "Bob chooses to play first.",
            "Turn 1: Bob",
            "Bob has run out of time and has lost the match.",
        ],
    );
    let path = write_temp("timeout.log", log.as_bytes());
    let batch = parse_batch(&[path], &LogParser::default());
    let match_id = &batch.matches[0].match_id;
    assert_eq!(batch.timeouts.get(match_id).map(String::as_str), Some("Bob"));
    assert_eq!(batch.matches[0].match_winner, Seat::P1);
}

#[test]
fn test_config_resolution() {
    let path = write_temp("config.yaml", b"default_cards_drawn: 2\n");
    let config = resolve_config(Some(path.clone())).unwrap();
    assert_eq!(config.default_cards_drawn, 2);

    std::env::set_var(CONFIG_ENV, &path);
    assert_eq!(resolve_config(None).unwrap().default_cards_drawn, 2);
    std::env::remove_var(CONFIG_ENV);
    assert_eq!(
        resolve_config(None).unwrap().default_cards_drawn,
        ParserConfig::default().default_cards_drawn
    );

    let broken = write_temp("broken.yaml", b"default_cards_drawn: [\n");
    assert!(matches!(
        resolve_config(Some(broken)),
        Err(TrackerError::Parse(_))
    ));
}

#[test]
fn test_tables_use_positional_schema() {
    let log = raw_log(
        "cccccccc-2222-3333-4444-555555555555",
        &[
            "Alice joined the game.",
            "Bob joined the game.",
            "Alice rolled a 3.",
            "Bob rolled a 6.",
            "Bob chooses to play first.",
            "Turn 1: Bob",
            "Bob casts @[Lightning Bolt@] targeting Alice.",
            "Alice has conceded the game.",
        ],
    );
    let path = write_temp("tables.log", log.as_bytes());
    let batch = parse_batch(&[path], &LogParser::default());
    let tables = batch.tables();

    assert_eq!(tables.matches.header[0], "Match_ID");
    assert_eq!(tables.matches.rows.len(), 1);
    assert_eq!(tables.games.header.len(), 12);
    assert_eq!(tables.plays.header[10..12], ["Opp_Target", "Self_Target"]);
    assert_eq!(tables.plays.rows[0][5], "Casts");
    assert_eq!(tables.plays.rows[0][10..12], ["1", "0"]);

    let json = serde_json::to_value(&tables).unwrap();
    assert_eq!(json["plays"]["rows"][0][10], "1");
    assert_eq!(json["matches"]["header"][13], "Match_Winner");
}
