//! Snapshot ingestion
//!
//! Parses the JSON document produced by the store synchronization job into an
//! owned forest, rejecting payloads that break the node invariants.

use crate::error::IndexError;
use crate::tree::node::Node;
use crate::tree::walker::{walk, Step};
use crate::types::{Digest, Forest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Default limit on folder nesting accepted at ingestion.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Largest `max_depth` ingestion honours. A node at depth `d` sits `2d + 2`
/// containers deep in the payload and serde_json refuses anything past 127,
/// so deeper limits could never be reached.
pub const MAX_SUPPORTED_DEPTH: usize = 60;

/// Wire shape of a snapshot node.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    name: String,
    mime_type: String,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
    #[serde(default)]
    view_link: Option<String>,
    #[serde(default)]
    download_link: Option<String>,
}

struct Frame {
    id: String,
    name: String,
    mime_type: String,
    view_link: Option<String>,
    download_link: Option<String>,
    pending: std::vec::IntoIter<RawNode>,
    built: Vec<Node>,
}

impl Frame {
    fn open(raw: RawNode) -> Self {
        let children = raw.children.unwrap_or_default();
        Frame {
            built: Vec::with_capacity(children.len()),
            pending: children.into_iter(),
            id: raw.id,
            name: raw.name,
            mime_type: raw.mime_type,
            view_link: raw.view_link,
            download_link: raw.download_link,
        }
    }

    fn close(self) -> Result<Node, IndexError> {
        let node = Node::from_parts(
            self.id,
            self.name,
            self.mime_type,
            self.built,
            self.view_link,
            self.download_link,
        );
        if !node.is_folder() && !node.children().is_empty() {
            return Err(IndexError::MalformedSnapshot(format!(
                "file node {:?} ({}) has children",
                node.id(),
                node.mime_type()
            )));
        }
        Ok(node)
    }
}

/// Parse a snapshot payload into a forest, enforcing `max_depth` (root
/// depth is 0, capped at [`MAX_SUPPORTED_DEPTH`]) and id uniqueness.
pub fn parse_forest(payload: &[u8], max_depth: usize) -> Result<Forest, IndexError> {
    let max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
    let raw: Vec<RawNode> = serde_json::from_slice(payload)
        .map_err(|e| IndexError::MalformedSnapshot(e.to_string()))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut forest = Vec::with_capacity(raw.len());

    for root in raw {
        check_identity(&root, &mut seen)?;
        let mut stack = vec![Frame::open(root)];
        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.pending.next() {
                if stack.len() > max_depth {
                    return Err(IndexError::MalformedSnapshot(format!(
                        "node {:?} exceeds the maximum depth of {}",
                        child.id, max_depth
                    )));
                }
                check_identity(&child, &mut seen)?;
                stack.push(Frame::open(child));
                continue;
            }
            let Some(frame) = stack.pop() else { break };
            let node = frame.close()?;
            match stack.last_mut() {
                Some(parent) => parent.built.push(node),
                None => forest.push(node),
            }
        }
    }

    Ok(forest)
}

fn check_identity(raw: &RawNode, seen: &mut HashSet<String>) -> Result<(), IndexError> {
    if raw.id.is_empty() {
        return Err(IndexError::MalformedSnapshot(format!(
            "node {:?} has an empty id",
            raw.name
        )));
    }
    if !seen.insert(raw.id.clone()) {
        return Err(IndexError::MalformedSnapshot(format!(
            "duplicate node id {:?}",
            raw.id
        )));
    }
    Ok(())
}

/// An immutable, fully parsed snapshot.
#[derive(Debug)]
pub struct Snapshot {
    forest: Forest,
    digest: Digest,
    loaded_at: DateTime<Utc>,
    origin: String,
}

/// Summary counts over a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    pub roots: usize,
    pub folders: usize,
    pub files: usize,
    pub max_depth: usize,
    pub digest: String,
    pub origin: String,
    pub loaded_at: String,
}

impl Snapshot {
    /// Parse `payload`, remembering where it came from.
    pub fn from_json(
        payload: &[u8],
        origin: impl Into<String>,
        max_depth: usize,
    ) -> Result<Self, IndexError> {
        let forest = parse_forest(payload, max_depth)?;
        let digest = *blake3::hash(payload).as_bytes();
        let snapshot = Snapshot {
            forest,
            digest,
            loaded_at: Utc::now(),
            origin: origin.into(),
        };
        debug!(
            origin = %snapshot.origin,
            roots = snapshot.forest.len(),
            digest = %snapshot.digest_hex(),
            "Parsed snapshot"
        );
        Ok(snapshot)
    }

    /// Wrap an already built forest. The digest covers its JSON encoding.
    pub fn from_forest(forest: Forest, origin: impl Into<String>) -> Result<Self, IndexError> {
        let encoded = serde_json::to_vec(&forest)?;
        Ok(Snapshot {
            digest: *blake3::hash(&encoded).as_bytes(),
            forest,
            loaded_at: Utc::now(),
            origin: origin.into(),
        })
    }

    /// Empty snapshot used before the first fetch. Its digest matches that of
    /// a fetched `[]` payload.
    pub fn empty() -> Self {
        Snapshot {
            forest: Vec::new(),
            digest: *blake3::hash(b"[]").as_bytes(),
            loaded_at: Utc::now(),
            origin: "empty".to_string(),
        }
    }

    pub fn forest(&self) -> &[Node] {
        &self.forest
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn stats(&self) -> SnapshotStats {
        let mut folders = 0;
        let mut files = 0;
        let mut max_depth = 0;
        walk(&self.forest, |node, ancestors| {
            if node.is_folder() {
                folders += 1;
            } else {
                files += 1;
            }
            max_depth = max_depth.max(ancestors.len());
            Step::Descend
        });
        SnapshotStats {
            roots: self.forest.len(),
            folders,
            files,
            max_depth,
            digest: self.digest_hex(),
            origin: self.origin.clone(),
            loaded_at: self.loaded_at.to_rfc3339(),
        }
    }
}
