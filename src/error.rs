use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

/// One variant per pipeline stage that can fail. Nothing is recovered locally;
/// every error propagates to the caller and aborts the run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("schema error: {detail}")]
    Schema { detail: String },

    #[error("index error: product {index} requested but page has {available} entities")]
    Index { index: usize, available: usize },

    #[error("io error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Schema {
            detail: err.to_string(),
        }
    }
}
