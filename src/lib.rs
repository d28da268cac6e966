//! Coursetree: Hierarchical Resource Index
//!
//! An in-memory index over a snapshot of a college file store. Supports
//! file search by name, subtree search by folder name and curriculum-based
//! filtering of the folder forest.

pub mod config;
pub mod curriculum;
pub mod error;
pub mod logging;
pub mod search;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;

pub use curriculum::{build_filtered_forest, Cycle, Profile};
pub use error::IndexError;
pub use search::{find_by_folder_name, find_by_name, FileMatch};
pub use tree::{collect_all_ids, find_by_id, render_hierarchy, Node, NodeKind, Snapshot};
