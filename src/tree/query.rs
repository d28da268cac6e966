//! Tree utilities for lookup, validation and debugging output.

use crate::tree::node::Node;
use crate::tree::walker::{walk, Step};
use crate::types::NodeId;

/// Indent added per depth level by [`render_hierarchy`].
pub const INDENT: &str = "  ";

/// Find the first node (pre-order) whose id equals `id`.
pub fn find_by_id<'a>(forest: &'a [Node], id: &str) -> Option<&'a Node> {
    let mut found = None;
    walk(forest, |node, _| {
        if node.id() == id {
            found = Some(node);
            Step::Stop
        } else {
            Step::Descend
        }
    });
    found
}

/// Collect every node id in pre-order, folders and files alike.
pub fn collect_all_ids(forest: &[Node]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    walk(forest, |node, _| {
        ids.push(node.id().to_string());
        Step::Descend
    });
    ids
}

/// Render the forest as an indented outline, one node per line.
///
/// Folder names end with `/`.
pub fn render_hierarchy(forest: &[Node]) -> String {
    let mut out = String::new();
    walk(forest, |node, ancestors| {
        for _ in 0..ancestors.len() {
            out.push_str(INDENT);
        }
        out.push_str(&node.name);
        if node.is_folder() {
            out.push('/');
        }
        out.push('\n');
        Step::Descend
    });
    out
}
