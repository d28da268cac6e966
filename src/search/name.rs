//! File search by name

use crate::tree::node::{MimeClass, Node};
use crate::tree::walker::{walk, Step};
use serde::Serialize;
use tracing::debug;

/// A file whose name matched a query, with the names of its ancestor
/// folders from the root down to its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatch<'a> {
    #[serde(flatten)]
    pub node: &'a Node,
    pub mime_class: MimeClass,
    pub path: Vec<String>,
}

impl FileMatch<'_> {
    /// Ancestor path joined with ` / ` for display.
    pub fn display_path(&self) -> String {
        self.path.join(" / ")
    }
}

/// Find every document or plain-text file whose name contains `query`,
/// ignoring case.
///
/// Folder names are never matched and neither are files of other MIME
/// types. An empty query returns no matches.
pub fn find_by_name<'a>(query: &str, forest: &'a [Node]) -> Vec<FileMatch<'a>> {
    let mut matches = Vec::new();
    if query.is_empty() {
        return matches;
    }
    let needle = query.to_lowercase();

    walk(forest, |node, ancestors| {
        if node.is_folder() {
            return Step::Descend;
        }
        let mime_class = node.mime_class();
        if mime_class.is_searchable_file() && node.name_contains_lower(&needle) {
            matches.push(FileMatch {
                node,
                mime_class,
                path: ancestors.iter().map(|a| a.name.clone()).collect(),
            });
        }
        Step::SkipChildren
    });

    debug!(query, matches = matches.len(), "Name search complete");
    matches
}
