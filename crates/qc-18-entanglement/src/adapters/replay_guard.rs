//! In-Memory Replay Guard Adapter
//!
//! Implements `ReplayGuard` over a process-local set of consumed references.

use crate::domain::{ClaimIndex, EntangleRecord, EntanglementError, ExternalChain};
use crate::ports::outbound::ReplayGuard;
use parking_lot::RwLock;
use std::collections::HashSet;
use tracing::{debug, info};

/// Consumed external reference: chain plus transaction hash.
///
/// Height is not part of the key; the same transaction claimed at a
/// different height is still a replay.
pub type ReplayKey = (ExternalChain, Vec<u8>);

fn replay_key(record: &EntangleRecord) -> ReplayKey {
    (record.chain(), record.ext_tx_hash().to_vec())
}

/// In-memory replay guard.
///
/// Reads take the shared lock, commits take the exclusive lock, so a commit
/// and a concurrent check never interleave.
#[derive(Default)]
pub struct InMemoryReplayGuard {
    consumed: RwLock<HashSet<ReplayKey>>,
}

impl InMemoryReplayGuard {
    /// Create an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a single reference consumed.
    pub fn mark_consumed(&self, record: &EntangleRecord) {
        self.consumed.write().insert(replay_key(record));
    }

    /// Atomically check-and-consume one reference. Returns false if it was
    /// already consumed.
    pub fn try_consume(&self, record: &EntangleRecord) -> bool {
        self.consumed.write().insert(replay_key(record))
    }

    /// Commit every claim of an accepted transaction, all or nothing.
    ///
    /// Returns the number of references committed.
    pub fn commit_claims(&self, claims: &ClaimIndex) -> Result<usize, EntanglementError> {
        let mut consumed = self.consumed.write();
        let mut batch = HashSet::with_capacity(claims.len());
        for record in claims.values() {
            let key = replay_key(record);
            if consumed.contains(&key) || !batch.insert(key) {
                return Err(EntanglementError::DuplicateEntangle {
                    height: record.height(),
                    tx_hash: record.ext_tx_hash_hex(),
                });
            }
        }
        let committed = batch.len();
        consumed.extend(batch);
        info!("[qc-18] Committed {} entangled references", committed);
        Ok(committed)
    }

    /// Number of consumed references.
    pub fn len(&self) -> usize {
        self.consumed.read().len()
    }

    /// Whether no reference has been consumed.
    pub fn is_empty(&self) -> bool {
        self.consumed.read().is_empty()
    }
}

impl ReplayGuard for InMemoryReplayGuard {
    fn exists(&self, record: &EntangleRecord) -> bool {
        let found = self.consumed.read().contains(&replay_key(record));
        debug!(
            "[qc-18] Replay check {} txid {}: {}",
            record.chain(),
            record.ext_tx_hash_hex(),
            if found { "consumed" } else { "fresh" }
        );
        found
    }
}
