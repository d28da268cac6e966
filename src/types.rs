//! Core types shared across the resource index.

/// NodeId: opaque identifier assigned by the remote file store.
pub type NodeId = String;

/// Forest: top-level sequence of root nodes of a snapshot.
pub type Forest = Vec<crate::tree::node::Node>;

/// Digest: blake3 hash of a raw snapshot payload.
pub type Digest = [u8; 32];
