use parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
