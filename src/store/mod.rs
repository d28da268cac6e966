//! Snapshot Store
//!
//! Holds the current snapshot behind an atomically swapped `Arc`. Readers
//! take a handle with [`SnapshotStore::current`] and keep querying it even if
//! a refresh replaces the store's snapshot in the meantime.

pub mod source;

use crate::error::IndexError;
use crate::tree::snapshot::Snapshot;
use parking_lot::RwLock;
use source::SnapshotSource;
use std::sync::Arc;
use tracing::info;

/// Outcome of a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub origin: String,
    pub digest: String,
    /// False when the fetched payload hashes to the snapshot already held.
    pub changed: bool,
}

pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
    max_depth: usize,
}

impl SnapshotStore {
    /// Create a store holding an empty snapshot.
    pub fn new(max_depth: usize) -> Self {
        Self::with_snapshot(Snapshot::empty(), max_depth)
    }

    pub fn with_snapshot(snapshot: Snapshot, max_depth: usize) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
            max_depth,
        }
    }

    /// Handle to the snapshot held right now.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Swap in `snapshot`, returning the one it replaced.
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Fetch and parse a payload from `source`, then swap it in.
    ///
    /// On any fetch or parse error the held snapshot is left untouched.
    pub async fn refresh(&self, source: &dyn SnapshotSource) -> Result<RefreshOutcome, IndexError> {
        let payload = source.fetch().await?;
        let snapshot = Snapshot::from_json(&payload, source.describe(), self.max_depth)?;
        let changed = snapshot.digest() != self.current().digest();
        let outcome = RefreshOutcome {
            origin: snapshot.origin().to_string(),
            digest: snapshot.digest_hex(),
            changed,
        };
        self.replace(snapshot);
        info!(
            origin = %outcome.origin,
            digest = %outcome.digest,
            changed = outcome.changed,
            "Snapshot refreshed"
        );
        Ok(outcome)
    }
}
