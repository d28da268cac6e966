//! Pre-order forest traversal over an explicit work stack
//!
//! Every query in the crate walks the forest through [`walk`]. The walk never
//! recurses, so snapshot depth only costs heap, never call stack.

use crate::tree::node::Node;

/// What the walk should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Visit this node's children next.
    Descend,
    /// Do not visit this node's children; continue with its next sibling.
    SkipChildren,
    /// End the walk.
    Stop,
}

/// Walk `forest` depth-first in pre-order, children in store order.
///
/// `visit` receives the node and its ancestors (root first, excluding the
/// node itself). `ancestors.len()` is the node's depth.
pub fn walk<'a, F>(forest: &'a [Node], mut visit: F)
where
    F: FnMut(&'a Node, &[&'a Node]) -> Step,
{
    let mut stack: Vec<(&'a Node, usize)> = forest.iter().rev().map(|node| (node, 0)).collect();
    let mut ancestors: Vec<&'a Node> = Vec::new();

    while let Some((node, depth)) = stack.pop() {
        ancestors.truncate(depth);
        match visit(node, &ancestors) {
            Step::Stop => return,
            Step::SkipChildren => continue,
            Step::Descend => {
                if !node.children().is_empty() {
                    ancestors.push(node);
                    stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
                }
            }
        }
    }
}
