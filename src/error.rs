
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalebookError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed table for scale '{scale}': {detail}")]
    MalformedTable { scale: String, detail: String },

    #[error("Unknown scale: '{0}'")]
    UnknownScale(String),

    #[error("Score {score} is outside the valid domain {floor}..={ceiling} of scale '{scale}'")]
    InvalidScore {
        scale: String,
        score: i32,
        floor: i32,
        ceiling: i32,
    },
}

pub type SbResult<T> = Result<T, ScalebookError>;
