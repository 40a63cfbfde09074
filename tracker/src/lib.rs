pub mod error;

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, NaiveDateTime};
use parser::{LogParser, ParsedMatch, ParserConfig};
use serde::Serialize;
use types::{
    invert_join, update_game_wins, GameRecord, MatchRecord, PlayRecord, GAME_HEADER, MATCH_HEADER,
    PLAY_HEADER,
};

pub use error::TrackerError;

pub const CONFIG_ENV: &str = "MODO_PARSER_CONFIG";

/// Reads a saved game log and its modification time. Logs carry binary
/// junk between entries, so invalid UTF-8 is replaced rather than rejected.
pub fn load_log(path: &Path) -> Result<(String, NaiveDateTime), TrackerError> {
    let bytes = fs::read(path)?;
    let modified: DateTime<Local> = fs::metadata(path)?.modified()?.into();
    Ok((
        String::from_utf8_lossy(&bytes).into_owned(),
        modified.naive_local(),
    ))
}

/// Parser configuration from the command line path, else the path in
/// `MODO_PARSER_CONFIG`, else the built-in tables.
pub fn resolve_config(cli_path: Option<PathBuf>) -> Result<ParserConfig, TrackerError> {
    let path = cli_path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            log::info!("Loading parser config from {}", path.display());
            Ok(ParserConfig::from_yaml_str(&fs::read_to_string(path)?)?)
        }
        None => Ok(ParserConfig::default()),
    }
}

pub fn parse_file(path: &Path, log_parser: &LogParser) -> Result<ParsedMatch, TrackerError> {
    let (game_log, modified) = load_log(path)?;
    Ok(log_parser.parse(&game_log, modified)?)
}

/// Records from many logs, with wins re-tallied across the whole batch.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub matches: Vec<MatchRecord>,
    pub games: Vec<GameRecord>,
    pub plays: Vec<PlayRecord>,
    pub undetermined: BTreeMap<String, Vec<String>>,
    /// Match id to the literal name of the player who timed out.
    pub timeouts: HashMap<String, String>,
    pub failed: Vec<PathBuf>,
}

impl Batch {
    fn add(&mut self, parsed: ParsedMatch) {
        if let Some(player) = parsed.timed_out_player {
            self.timeouts
                .insert(parsed.match_record.match_id.clone(), player);
        }
        self.matches.push(parsed.match_record);
        self.games.extend(parsed.games);
        self.plays.extend(parsed.plays);
        self.undetermined.extend(parsed.undetermined);
    }

    /// Adds every match and game as seen from the other seat.
    pub fn with_inverted(mut self) -> Self {
        let (matches, games) = invert_join(&self.matches, &self.games);
        self.matches = matches;
        self.games = games;
        self
    }

    /// The batch in its positional schema, ready for spreadsheet-style
    /// consumers.
    pub fn tables(&self) -> BatchTables<'_> {
        BatchTables {
            matches: Table::new(&MATCH_HEADER, self.matches.iter().map(MatchRecord::to_row)),
            games: Table::new(&GAME_HEADER, self.games.iter().map(GameRecord::to_row)),
            plays: Table::new(&PLAY_HEADER, self.plays.iter().map(PlayRecord::to_row)),
            undetermined: &self.undetermined,
            timeouts: &self.timeouts,
            failed: &self.failed,
        }
    }
}

/// Header row plus one row of cells per record, booleans as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> Self {
        Self {
            header: header.iter().map(|cell| cell.to_string()).collect(),
            rows: rows.collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchTables<'a> {
    pub matches: Table,
    pub games: Table,
    pub plays: Table,
    pub undetermined: &'a BTreeMap<String, Vec<String>>,
    pub timeouts: &'a HashMap<String, String>,
    pub failed: &'a [PathBuf],
}

/// Parses each log in turn. Logs that fail are logged and listed in
/// `failed`; the rest of the batch still goes through.
pub fn parse_batch<P: AsRef<Path>>(paths: &[P], log_parser: &LogParser) -> Batch {
    let mut batch = Batch::default();
    for path in paths {
        let path = path.as_ref();
        match parse_file(path, log_parser) {
            Ok(parsed) => batch.add(parsed),
            Err(err) => {
                log::warn!("Skipping {}: {err}", path.display());
                batch.failed.push(path.to_path_buf());
            }
        }
    }
    update_game_wins(&mut batch.matches, &batch.games, &batch.timeouts);
    log::info!(
        "Parsed {} matches, {} failed",
        batch.matches.len(),
        batch.failed.len()
    );
    batch
}
