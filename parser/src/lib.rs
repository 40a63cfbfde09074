pub mod actions;
pub mod cards;
pub mod config;
pub mod error;
pub mod games;
pub mod match_id;
pub mod matches;
pub mod names;
pub mod outcome;
pub mod players;
pub mod plays;
pub mod tokenizer;
pub mod walk;

pub use actions::ActionLog;
pub use config::ParserConfig;
pub use error::ParseError;
pub use games::{GameSegments, UndeterminedGames};

use chrono::NaiveDateTime;
use serde::Serialize;
use types::{GameRecord, MatchRecord, PlayRecord};

/// Everything read from one log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMatch {
    pub match_record: MatchRecord,
    pub games: Vec<GameRecord>,
    pub plays: Vec<PlayRecord>,
    pub undetermined: UndeterminedGames,
    /// Literal name of the player who disconnected or ran out of time.
    pub timed_out_player: Option<String>,
}

impl ParsedMatch {
    pub fn timeout(&self) -> (bool, Option<&str>) {
        let player = self.timed_out_player.as_deref();
        (player.is_some(), player)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one raw log. `modified` is the log file's modification time
    /// and becomes the match date.
    pub fn parse(&self, game_log: &str, modified: NaiveDateTime) -> Result<ParsedMatch, ParseError> {
        let match_actions = tokenizer::all_actions(game_log, &self.config)?;
        let GameSegments { games, undetermined } = games::game_data(&match_actions, &self.config)?;
        let plays = plays::play_data(&match_actions, &self.config)?;
        let match_record = matches::get_match_data(&match_actions, &games, modified, &self.config)?;
        let timed_out_player = matches::check_timeout(match_actions.actions(), &self.config)
            .map(|player| names::to_literal(&player));
        log::info!(
            "Parsed {}: {} games, {} plays, {} undetermined",
            match_record.match_id,
            games.len(),
            plays.len(),
            undetermined.len()
        );
        Ok(ParsedMatch {
            match_record,
            games,
            plays,
            undetermined,
            timed_out_player,
        })
    }
}

/// Parses one raw log with the built-in configuration.
pub fn get_all_data(game_log: &str, modified: NaiveDateTime) -> Result<ParsedMatch, ParseError> {
    LogParser::default().parse(game_log, modified)
}
