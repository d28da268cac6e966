//! CLI Tooling
//!
//! Command-line access to every query over a loaded snapshot. Each command
//! renders either text or JSON.

use crate::config::{ConfigLoader, IndexConfig};
use crate::curriculum::{
    build_filtered_forest_with, resolve_topics, validate_topics, Cycle, ElectivePolicy,
    FilterOptions, Profile,
};
use crate::error::IndexError;
use crate::search::{find_by_folder_name, find_by_name};
use crate::store::source::{FileSnapshotSource, SnapshotSource};
use crate::store::SnapshotStore;
use crate::tooling::format::{
    format_file_matches_text, format_forest_text, format_node_text, format_stats_text,
    format_topic_validation_text,
};
use crate::tree::{collect_all_ids, find_by_id, render_hierarchy};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Coursetree CLI - search and filter the college resource index
#[derive(Parser)]
#[command(name = "coursetree")]
#[command(about = "Search and filter a hierarchical resource index snapshot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot JSON file (overrides snapshot.url / snapshot.path)
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Find document and text files whose name contains QUERY
    Search {
        query: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Find folders whose name contains QUERY and show their subtrees
    Folders {
        query: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the subtrees selected by a curriculum profile
    Filter {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Look up a node by id
    Find {
        id: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List every node id in pre-order
    Ids,
    /// Print the snapshot as an indented outline
    Tree,
    /// Show snapshot counts and digest
    Stats {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check that each fixed topic of a cycle has a folder in the snapshot
    ValidateTopics {
        /// Cycle to check (C or P)
        #[arg(long)]
        cycle: Cycle,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Commands {
    pub fn needs_snapshot(&self) -> bool {
        !matches!(self, Commands::Config)
    }
}

/// Curriculum profile given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Profile JSON file as stored by the portal
    #[arg(long, conflicts_with = "cycle")]
    pub profile: Option<PathBuf>,

    /// Cycle (C or P); builds a profile from flags
    #[arg(long)]
    pub cycle: Option<Cycle>,

    /// Year of study
    #[arg(long, default_value = "1")]
    pub year: String,

    /// Elective selection as KEY=VALUE, e.g. selectedESC="Course 1"
    #[arg(long = "select", value_name = "KEY=VALUE")]
    pub selections: Vec<String>,

    /// Also search each elective selection as a folder name
    #[arg(long, conflicts_with = "ignore_electives")]
    pub search_electives: bool,

    /// Search fixed topics only, even if the config appends electives
    #[arg(long)]
    pub ignore_electives: bool,
}

impl ProfileArgs {
    /// The profile described by these flags, if any.
    pub fn resolve(&self) -> Result<Option<Profile>, IndexError> {
        if let Some(path) = &self.profile {
            return Profile::load(path).map(Some);
        }
        let Some(cycle) = self.cycle else {
            return Ok(None);
        };
        let mut profile = Profile::new(self.year.clone(), cycle);
        for selection in &self.selections {
            let (key, value) = selection.split_once('=').ok_or_else(|| {
                IndexError::Config(format!("selection must be KEY=VALUE: {}", selection))
            })?;
            profile = profile.with_selection(key.trim(), value.trim());
        }
        Ok(Some(profile))
    }

    /// Apply the elective flags on top of the configured options.
    pub fn filter_options(&self, configured: FilterOptions) -> FilterOptions {
        let mut options = configured;
        if self.search_electives {
            options.electives = ElectivePolicy::Append;
        }
        if self.ignore_electives {
            options.electives = ElectivePolicy::Ignore;
        }
        options
    }
}

/// CLI context: configuration plus the snapshot store commands run against.
pub struct CliContext {
    config: IndexConfig,
    store: SnapshotStore,
    snapshot_override: Option<PathBuf>,
}

impl CliContext {
    pub fn new(config_path: Option<&Path>, snapshot: Option<PathBuf>) -> Result<Self, IndexError> {
        let config = ConfigLoader::resolve(config_path)?;
        Ok(Self::with_config(config, snapshot))
    }

    pub fn with_config(config: IndexConfig, snapshot: Option<PathBuf>) -> Self {
        let store = SnapshotStore::new(config.snapshot.max_depth);
        Self {
            config,
            store,
            snapshot_override: snapshot,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Fetch the snapshot from the override file or the configured source.
    pub async fn load(&self) -> Result<(), IndexError> {
        let source: Box<dyn SnapshotSource> = match &self.snapshot_override {
            Some(path) => Box::new(FileSnapshotSource::new(path.clone())),
            None => self.config.snapshot.source()?,
        };
        let outcome = self.store.refresh(source.as_ref()).await?;
        info!(origin = %outcome.origin, digest = %outcome.digest, "Snapshot loaded");
        Ok(())
    }

    /// Run `command` against the current snapshot and render its output.
    pub fn execute(&self, command: &Commands) -> Result<String, IndexError> {
        let snapshot = self.store.current();
        let forest = snapshot.forest();

        match command {
            Commands::Search { query, format } => {
                let matches = find_by_name(query, forest);
                if is_json(format)? {
                    Ok(serde_json::to_string_pretty(&matches)?)
                } else {
                    Ok(format_file_matches_text(query, &matches))
                }
            }
            Commands::Folders { query, format } => {
                let subtrees = find_by_folder_name(query, forest);
                if is_json(format)? {
                    Ok(serde_json::to_string_pretty(&subtrees)?)
                } else {
                    Ok(format_forest_text(
                        &format!("Folders matching {:?}", query),
                        &subtrees,
                    ))
                }
            }
            Commands::Filter { profile, format } => {
                let resolved = profile.resolve()?;
                let options = profile.filter_options(self.config.filter);
                let topics = resolved
                    .as_ref()
                    .map(|p| resolve_topics(p, options.electives))
                    .unwrap_or_default();
                let filtered = build_filtered_forest_with(resolved.as_ref(), forest, &options);
                if is_json(format)? {
                    let output = json!({
                        "profile": resolved,
                        "topics": topics,
                        "forest": filtered.as_ref(),
                    });
                    Ok(serde_json::to_string_pretty(&output)?)
                } else {
                    let title = match &resolved {
                        Some(p) => format!("Cycle {} topics: {}", p.cycle, topics.join(", ")),
                        None => "No profile: full snapshot".to_string(),
                    };
                    Ok(format_forest_text(&title, &filtered))
                }
            }
            Commands::Find { id, format } => {
                let node = find_by_id(forest, id);
                if is_json(format)? {
                    Ok(serde_json::to_string_pretty(&node)?)
                } else {
                    Ok(match node {
                        Some(node) => format_node_text(node),
                        None => format!("No node with id {:?}\n", id),
                    })
                }
            }
            Commands::Ids => Ok(collect_all_ids(forest).join("\n")),
            Commands::Tree => Ok(render_hierarchy(forest)),
            Commands::Stats { format } => {
                let stats = snapshot.stats();
                if is_json(format)? {
                    Ok(serde_json::to_string_pretty(&stats)?)
                } else {
                    Ok(format_stats_text(&stats))
                }
            }
            Commands::ValidateTopics { cycle, format } => {
                let result = validate_topics(*cycle, forest);
                if is_json(format)? {
                    Ok(serde_json::to_string_pretty(&result)?)
                } else {
                    Ok(format_topic_validation_text(&result))
                }
            }
            Commands::Config => self.config.to_toml(),
        }
    }
}

fn is_json(format: &str) -> Result<bool, IndexError> {
    match format {
        "json" => Ok(true),
        "text" => Ok(false),
        other => Err(IndexError::Config(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
