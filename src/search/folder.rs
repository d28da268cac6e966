//! Subtree search by folder name

use crate::tree::node::Node;
use crate::tree::walker::{walk, Step};
use tracing::debug;

/// Return a deep copy of every folder whose name contains `query`, ignoring
/// case.
///
/// The walk does not descend into a matched folder, so nested folders that
/// also contain the query are returned only as part of their matched
/// ancestor. Files are never inspected. An empty query matches every
/// top-level folder of the forest.
pub fn find_by_folder_name(query: &str, forest: &[Node]) -> Vec<Node> {
    let needle = query.to_lowercase();
    let mut subtrees = Vec::new();

    walk(forest, |node, _| {
        if !node.is_folder() {
            return Step::SkipChildren;
        }
        if node.name_contains_lower(&needle) {
            subtrees.push(node.deep_clone());
            Step::SkipChildren
        } else {
            Step::Descend
        }
    });

    debug!(query, subtrees = subtrees.len(), "Folder search complete");
    subtrees
}
