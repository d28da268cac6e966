//! Name and subtree search over a snapshot forest.
//!
//! Both searches match by case-insensitive substring containment and return
//! results in pre-order traversal order. There is no relevance ranking.

pub mod folder;
pub mod name;

pub use folder::find_by_folder_name;
pub use name::{find_by_name, FileMatch};
