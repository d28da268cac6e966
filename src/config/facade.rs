//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::IndexConfig;
use crate::error::IndexError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<IndexConfig, IndexError> {
        let config = MergeService::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file layered over the global file.
    pub fn load_from_file(path: &Path) -> Result<IndexConfig, IndexError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from explicit layer locations instead of the XDG global path.
    pub fn load_layers(global: Option<&Path>, explicit: Option<&Path>) -> Result<IndexConfig, IndexError> {
        let config = MergeService::load_layers(global, explicit)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the standard sources.
    pub fn resolve(path: Option<&Path>) -> Result<IndexConfig, IndexError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}
