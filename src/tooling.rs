//! Tooling Layer
//!
//! Command-line front end over the index queries and its text formatting.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, ProfileArgs};
