use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading tweets or building the feature table
#[derive(Debug, Error)]
pub enum TweetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A required key was absent from a record
    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: String },

    /// An extraction pass produced a column of the wrong length
    #[error("column `{column}` has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TweetError>;
