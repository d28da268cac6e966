//! Error types for the resource index.

use thiserror::Error;

/// Errors raised while ingesting snapshots, loading configuration or
/// fetching snapshot payloads.
///
/// Queries themselves are total over a well-formed forest and never return
/// an error; an empty query, an absent profile or a missing id all have
/// defined non-error results.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("snapshot fetch failed: {0}")]
    Fetch(String),

    #[error("no snapshot source configured (pass --snapshot or set snapshot.path / snapshot.url)")]
    NoSnapshot,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for IndexError {
    fn from(err: config::ConfigError) -> Self {
        IndexError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for IndexError {
    fn from(err: reqwest::Error) -> Self {
        IndexError::Fetch(err.to_string())
    }
}
