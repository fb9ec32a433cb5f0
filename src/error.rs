use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for nodestat
#[derive(Error, Debug)]
pub enum NodestatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Scheduler query failed: {0}")]
    Scheduler(String),

    #[error("Invalid state pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid value for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Failed to write export {path:?}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write CSV export {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for nodestat
pub type Result<T> = std::result::Result<T, NodestatError>;

impl NodestatError {
    /// Create a scheduler (external status command) error
    pub fn scheduler<S: Into<String>>(msg: S) -> Self {
        NodestatError::Scheduler(msg.into())
    }

    pub fn invalid_number<S: Into<String>>(field: &'static str, value: S) -> Self {
        NodestatError::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    pub fn export<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        NodestatError::Export {
            path: path.into(),
            source,
        }
    }

    pub fn csv<P: Into<PathBuf>>(path: P, source: csv::Error) -> Self {
        NodestatError::Csv {
            path: path.into(),
            source,
        }
    }
}
