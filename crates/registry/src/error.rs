use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the vaccination dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file is missing or could not be read.
    #[error("Dataset unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset content is not a JSON array of well-formed records.
    #[error("Dataset malformed at {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DatasetError::Unavailable { .. } => "unavailable",
            DatasetError::Malformed { .. } => "malformed",
        }
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
