use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Format error: no match id in game log")]
    MatchIdNotFound,

    #[error("Format error: expected two players, found {found}")]
    PlayersNotFound { found: usize },

    #[error("Missing data: no die rolls in game with players {p1} and {p2}")]
    MissingRolls { p1: String, p2: String },

    #[error("Expected string with text artifacts, got {0:?}")]
    Artifact(String),

    #[error("Match id needs 36 characters followed by _P1name_P2name, got {0:?}")]
    InvalidMatchId(String),

    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}
