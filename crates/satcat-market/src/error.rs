use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a satcat snapshot: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}
