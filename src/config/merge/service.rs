//! MergeService: orchestrates sources, applies merge policy, deserializes to IndexConfig.

use crate::config::paths::global_config_path;
use crate::config::sources::{environment, global_file};
use crate::config::IndexConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<IndexConfig, ConfigError> {
        let global = global_config_path().ok();
        Self::load_layers(global.as_deref(), None)
    }

    /// Like [`MergeService::load`], with `path` layered over the global file.
    pub fn load_from_file(path: &Path) -> Result<IndexConfig, ConfigError> {
        let global = global_config_path().ok();
        Self::load_layers(global.as_deref(), Some(path))
    }

    /// Precedence: defaults -> `global` (optional file) -> `explicit`
    /// (required file) -> environment.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<IndexConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = match explicit {
            Some(path) => builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }
}
