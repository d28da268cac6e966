//! Logging System
//!
//! Structured logging through `tracing`. Level, format and destination come
//! from [`LoggingConfig`], with `COURSETREE_LOG*` environment variables taking
//! precedence over the config file.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Resolve the log file path with precedence: COURSETREE_LOG_FILE env,
/// config file, platform state directory. The CLI's `--log-file` reaches
/// here through the config.
pub fn resolve_log_file_path(config_file: Option<PathBuf>) -> Result<PathBuf, IndexError> {
    select_log_file_path(std::env::var("COURSETREE_LOG_FILE").ok(), config_file)
}

fn select_log_file_path(
    env_file: Option<String>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, IndexError> {
    if let Some(env_path) = env_file.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(env_path));
    }
    if let Some(p) = config_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, IndexError> {
    let project_dirs = directories::ProjectDirs::from("", "coursetree", "coursetree")
        .ok_or_else(|| {
            IndexError::Config("Could not determine platform state directory for log file".to_string())
        })?;
    let dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.cache_dir())
        .to_path_buf();
    Ok(dir.join("coursetree.log"))
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr, both
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Colored output (text format, terminal destinations only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Per-module levels, e.g. `coursetree::search = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed or the config is invalid.
pub fn init_logging(config: &LoggingConfig) -> Result<(), IndexError> {
    if !config.enabled {
        return Registry::default()
            .with(EnvFilter::new("off"))
            .try_init()
            .map_err(|e| IndexError::Config(format!("Failed to install subscriber: {}", e)));
    }

    let filter = build_env_filter(config)?;
    let json = determine_format(config)? == LogFormat::Json;
    let output = determine_output(config)?;
    let writer = build_writer(config, &output)?;
    let ansi = !json && config.color && !output.file;

    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(ansi)
        .with_writer(writer);

    let installed = if json {
        Registry::default().with(filter).with(layer.json()).try_init()
    } else {
        Registry::default().with(filter).with(layer).try_init()
    };
    installed.map_err(|e| IndexError::Config(format!("Failed to install subscriber: {}", e)))
}

fn build_writer(config: &LoggingConfig, output: &OutputDestinations) -> Result<BoxMakeWriter, IndexError> {
    let file = if output.file {
        let path = resolve_log_file_path(config.file.clone())?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                IndexError::Config(format!("Failed to create log directory: {}", e))
            })?;
        }
        let handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| IndexError::Config(format!("Failed to open log file {:?}: {}", path, e)))?;
        Some(handle)
    } else {
        None
    };

    let writer = match (file, output.stdout, output.stderr) {
        (Some(file), _, true) => BoxMakeWriter::new(std::sync::Mutex::new(file).and(std::io::stderr)),
        (Some(file), _, false) => BoxMakeWriter::new(std::sync::Mutex::new(file)),
        (None, true, true) => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
        (None, true, false) => BoxMakeWriter::new(std::io::stdout),
        (None, false, _) => BoxMakeWriter::new(std::io::stderr),
    };
    Ok(writer)
}

/// Build the filter from COURSETREE_LOG, else from config plus module overrides.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, IndexError> {
    if let Ok(filter) = EnvFilter::try_from_env("COURSETREE_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, module_level) in &config.modules {
        filter = filter.add_directive(parse_directive(module, module_level)?);
    }

    if let Ok(modules_str) = std::env::var("COURSETREE_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            if let Some((module, level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module.trim(), level.trim())?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, IndexError> {
    format!("{}={}", module, level)
        .parse()
        .map_err(|e| IndexError::Config(format!("Invalid log directive {}={}: {}", module, level, e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, IndexError> {
    let from_env = std::env::var("COURSETREE_LOG_FORMAT").ok();
    select_format(from_env.as_deref(), config)
}

fn select_format(from_env: Option<&str>, config: &LoggingConfig) -> Result<LogFormat, IndexError> {
    match from_env.unwrap_or(config.format.as_str()) {
        "json" => Ok(LogFormat::Json),
        "text" => Ok(LogFormat::Text),
        other => Err(IndexError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Output destinations
#[derive(Debug)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

fn determine_output(config: &LoggingConfig) -> Result<OutputDestinations, IndexError> {
    if let Ok(output) = std::env::var("COURSETREE_LOG_OUTPUT") {
        return parse_output_destinations(&output);
    }
    parse_output_destinations(&config.output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, IndexError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        "both" => (true, true, false),
        _ => {
            return Err(IndexError::Config(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}
