//! Resource node types and MIME classification

use crate::types::NodeId;
use serde::Serialize;

/// MIME type the remote store uses for PDF documents.
pub const MIME_PDF: &str = "application/pdf";
/// MIME type the remote store uses for plain text files.
pub const MIME_PLAIN_TEXT: &str = "text/plain";

/// Structural kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// Classification of a node's MIME type for search purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MimeClass {
    Folder,
    Document,
    PlainText,
    Other,
}

impl MimeClass {
    /// Classify a raw MIME type string.
    ///
    /// `application/vnd.<vendor>.folder` is a folder, `application/pdf` a
    /// document and `text/plain` plain text. Anything else is `Other`.
    pub fn classify(mime_type: &str) -> Self {
        if is_folder_mime(mime_type) {
            MimeClass::Folder
        } else if mime_type == MIME_PDF {
            MimeClass::Document
        } else if mime_type == MIME_PLAIN_TEXT {
            MimeClass::PlainText
        } else {
            MimeClass::Other
        }
    }

    /// Whether file-name search may return nodes of this class.
    pub fn is_searchable_file(&self) -> bool {
        matches!(self, MimeClass::Document | MimeClass::PlainText)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            MimeClass::Folder => NodeKind::Folder,
            _ => NodeKind::File,
        }
    }
}

fn is_folder_mime(mime_type: &str) -> bool {
    mime_type
        .strip_prefix("application/vnd.")
        .map(|rest| rest.ends_with(".folder") && rest.len() > ".folder".len())
        .unwrap_or(false)
}

/// A folder or file in the remote store hierarchy.
///
/// `kind` is fixed when the node is built and a file never carries children.
/// Serializes back to the snapshot wire shape.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    id: NodeId,
    pub name: String,
    mime_type: String,
    #[serde(skip)]
    kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    download_link: Option<String>,
}

/// Default MIME type used when building folders in code.
pub const MIME_FOLDER: &str = "application/vnd.google-apps.folder";

impl Node {
    /// Build a folder node with the given children.
    pub fn folder(id: impl Into<NodeId>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            mime_type: MIME_FOLDER.to_string(),
            kind: NodeKind::Folder,
            children,
            view_link: None,
            download_link: None,
        }
    }

    /// Build a file node. The node stays a file even if given a folder MIME
    /// type; such a file classifies as `MimeClass::Other`.
    pub fn file(id: impl Into<NodeId>, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            mime_type: mime_type.into(),
            kind: NodeKind::File,
            children: Vec::new(),
            view_link: None,
            download_link: None,
        }
    }

    /// Attach opaque view/download handles. Ignored on folders.
    pub fn with_links(mut self, view_link: Option<String>, download_link: Option<String>) -> Self {
        if self.kind == NodeKind::File {
            self.view_link = view_link;
            self.download_link = download_link;
        }
        self
    }

    pub(crate) fn from_parts(
        id: NodeId,
        name: String,
        mime_type: String,
        children: Vec<Node>,
        view_link: Option<String>,
        download_link: Option<String>,
    ) -> Self {
        let kind = MimeClass::classify(&mime_type).kind();
        let (view_link, download_link) = match kind {
            NodeKind::File => (view_link, download_link),
            NodeKind::Folder => (None, None),
        };
        Node {
            id,
            name,
            mime_type,
            kind,
            children,
            view_link,
            download_link,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn mime_class(&self) -> MimeClass {
        match self.kind {
            NodeKind::Folder => MimeClass::Folder,
            NodeKind::File => match MimeClass::classify(&self.mime_type) {
                MimeClass::Folder => MimeClass::Other,
                class => class,
            },
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn view_link(&self) -> Option<&str> {
        self.view_link.as_deref()
    }

    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref()
    }

    /// Case-insensitive substring test of `name` against an already
    /// lowercased needle.
    pub(crate) fn name_contains_lower(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }

    /// Structural copy of this node and every descendant.
    ///
    /// Uses an explicit stack so arbitrarily deep subtrees copy without
    /// recursion. Link handles are copied verbatim.
    pub fn deep_clone(&self) -> Node {
        // (source, children copied so far)
        let mut stack: Vec<(&Node, Vec<Node>)> =
            vec![(self, Vec::with_capacity(self.children.len()))];
        loop {
            let Some((source, copied)) = stack.pop() else {
                unreachable!("root frame returns before the stack drains");
            };
            if copied.len() < source.children.len() {
                let next = &source.children[copied.len()];
                stack.push((source, copied));
                stack.push((next, Vec::with_capacity(next.children.len())));
                continue;
            }
            let copy = source.shallow_copy(copied);
            match stack.last_mut() {
                Some((_, parent_copied)) => parent_copied.push(copy),
                None => return copy,
            }
        }
    }

    fn shallow_copy(&self, children: Vec<Node>) -> Node {
        Node {
            id: self.id.clone(),
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            kind: self.kind,
            children,
            view_link: self.view_link.clone(),
            download_link: self.download_link.clone(),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

/// Tears subtrees down level by level; the derived drop glue would recurse
/// once per nesting level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
