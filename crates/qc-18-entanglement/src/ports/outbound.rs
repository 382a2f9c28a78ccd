//! # Outbound Ports
//!
//! Traits for the collaborators verification and signing depend on.

use crate::domain::{Address, EntangleRecord, EntanglementError, ExternalChain, Hash};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// Replay guard - outbound port.
///
/// Read side of the consumed-reference set. Committing a reference is done by
/// the host chain's acceptance path once the transaction is in state.
pub trait ReplayGuard: Send + Sync {
    /// True if the record's external reference was already entangled.
    fn exists(&self, record: &EntangleRecord) -> bool;
}

/// External chain validator - outbound port.
///
/// Typically backed by a node or light client of the external chain, so calls
/// may be slow. Timeouts are the caller's concern.
#[async_trait]
pub trait ExternalValidator: Send + Sync {
    /// Confirm the transaction exists on `chain` at `height`.
    async fn verify(
        &self,
        chain: ExternalChain,
        height: u64,
        ext_tx_hash: &[u8],
    ) -> Result<(), EntanglementError>;

    /// Public key associated with the external transaction's sender.
    async fn lookup_public_key(
        &self,
        chain: ExternalChain,
        ext_tx_hash: &[u8],
    ) -> Result<Vec<u8>, EntanglementError>;
}

/// Pool reserve - outbound port.
pub trait PoolReserve: Send + Sync {
    /// Current redeemable pool balance in host-chain base units.
    fn reserve_amount(&self) -> u64;
}

/// Signing key - outbound port to the signing primitive.
pub trait SpendKey: Send + Sync {
    /// Compressed public key.
    fn public_key(&self) -> [u8; 33];

    /// Host-chain address controlled by this key.
    fn address(&self) -> Address;

    /// Sign a 32-byte digest, returning a DER-encoded signature.
    fn sign_digest(&self, digest: &Hash) -> Result<Vec<u8>, EntanglementError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock external validator.
///
/// Accepts every claim except the hashes in `rejected`, and records every
/// `verify` call in order.
#[derive(Default)]
pub struct MockExternalValidator {
    /// Hashes the external chain does not know.
    pub rejected: HashSet<Vec<u8>>,
    /// Public keys returned by `lookup_public_key`.
    pub public_keys: HashMap<Vec<u8>, Vec<u8>>,
    /// Should every call fail?
    pub should_fail: bool,
    calls: Mutex<Vec<(ExternalChain, u64, Vec<u8>)>>,
}

impl MockExternalValidator {
    /// Validator accepting every claim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject claims for `ext_tx_hash`.
    pub fn reject(mut self, ext_tx_hash: &[u8]) -> Self {
        self.rejected.insert(ext_tx_hash.to_vec());
        self
    }

    /// `verify` calls seen so far.
    pub fn calls(&self) -> Vec<(ExternalChain, u64, Vec<u8>)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ExternalValidator for MockExternalValidator {
    async fn verify(
        &self,
        chain: ExternalChain,
        height: u64,
        ext_tx_hash: &[u8],
    ) -> Result<(), EntanglementError> {
        self.calls.lock().push((chain, height, ext_tx_hash.to_vec()));
        if self.should_fail {
            return Err(EntanglementError::ExternalChain("Mock failure".to_string()));
        }
        if self.rejected.contains(ext_tx_hash) {
            return Err(EntanglementError::ExternalChain(format!(
                "tx not found on {} at height {}",
                chain, height
            )));
        }
        Ok(())
    }

    async fn lookup_public_key(
        &self,
        chain: ExternalChain,
        ext_tx_hash: &[u8],
    ) -> Result<Vec<u8>, EntanglementError> {
        self.public_keys.get(ext_tx_hash).cloned().ok_or_else(|| {
            EntanglementError::ExternalChain(format!(
                "no public key for {} tx {}",
                chain,
                hex::encode(ext_tx_hash)
            ))
        })
    }
}
