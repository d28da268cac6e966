//! Built-in defaults, the lowest-precedence layer.

use crate::tree::snapshot::DEFAULT_MAX_DEPTH;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("snapshot.max_depth", DEFAULT_MAX_DEPTH as i64)?
        .set_default("snapshot.timeout_secs", 30i64)?
        .set_default("filter.electives", "ignore")?
        .set_default("logging.level", "info")
}
