//! Configuration
//!
//! Layered configuration for the index: built-in defaults, the user's global
//! config file, an explicit config file, then `COURSETREE_*` environment
//! variables (`__` separates nested keys, e.g. `COURSETREE_SNAPSHOT__URL`).

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::curriculum::filter::FilterOptions;
use crate::error::IndexError;
use crate::logging::LoggingConfig;
use crate::store::source::{FileSnapshotSource, HttpSnapshotSource, SnapshotSource};
use crate::tree::snapshot::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_timeout_secs() -> u64 {
    30
}

/// Where snapshots come from and how they are ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// HTTP(S) endpoint serving the serialized tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Local snapshot file, used when no url is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Deepest folder nesting accepted at ingestion, at most
    /// [`MAX_SUPPORTED_DEPTH`].
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// HTTP request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            max_depth: default_max_depth(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SnapshotConfig {
    /// Build the configured source. A url wins over a path.
    pub fn source(&self) -> Result<Box<dyn SnapshotSource>, IndexError> {
        if let Some(url) = &self.url {
            let source = HttpSnapshotSource::new(url.clone(), Duration::from_secs(self.timeout_secs))?;
            return Ok(Box::new(source));
        }
        if let Some(path) = &self.path {
            return Ok(Box::new(FileSnapshotSource::new(path.clone())));
        }
        Err(IndexError::NoSnapshot)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    #[serde(default)]
    pub filter: FilterOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl IndexConfig {
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.snapshot.max_depth == 0 {
            return Err(IndexError::Config(
                "snapshot.max_depth must be at least 1".to_string(),
            ));
        }
        if self.snapshot.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(IndexError::Config(format!(
                "snapshot.max_depth must be at most {} (got {})",
                MAX_SUPPORTED_DEPTH, self.snapshot.max_depth
            )));
        }
        if self.snapshot.timeout_secs == 0 {
            return Err(IndexError::Config(
                "snapshot.timeout_secs must be at least 1".to_string(),
            ));
        }
        if let Some(url) = &self.snapshot.url {
            if url.trim().is_empty() {
                return Err(IndexError::Config("snapshot.url is empty".to_string()));
            }
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, IndexError> {
        toml::to_string_pretty(self).map_err(|e| IndexError::Config(e.to_string()))
    }
}
