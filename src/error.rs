//! Error types for the recommender library.
//!
//! The CLI wraps these with `anyhow` context.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    /// The catalog has no careers to index.
    #[error("career catalog is empty")]
    EmptyCatalog,

    #[error("top_n must be between 1 and {catalog_size}, got {requested}")]
    InvalidTopN {
        requested: usize,
        catalog_size: usize,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RecommendError>;

impl RecommendError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
