//! Resource tree: node model, snapshot ingestion, traversal and utilities.

pub mod node;
pub mod query;
pub mod snapshot;
pub mod walker;

pub use node::{MimeClass, Node, NodeKind};
pub use query::{collect_all_ids, find_by_id, render_hierarchy};
pub use snapshot::{parse_forest, Snapshot, SnapshotStats};
