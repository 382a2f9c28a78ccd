//! # Domain Entities
//!
//! Core entities for Cross-Chain Entanglement: the claim record and the
//! host-chain transaction it is embedded in.

use super::errors::EntanglementError;
use super::invariants::invariant_hash_length;
use super::value_objects::ExternalChain;
use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{OutPoint, ScriptBuf, Sequence, TxIn, Witness};
use serde::Serialize;
use std::collections::BTreeMap;

/// Claim about a transaction confirmed on an external chain.
///
/// Fields are private: a record can only be built through [`EntangleRecord::new`],
/// which enforces the per-chain hash length, and is never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EntangleRecord {
    chain: ExternalChain,
    height: u64,
    ext_tx_hash: Vec<u8>,
}

impl EntangleRecord {
    /// Create a record, rejecting hashes of the wrong length.
    pub fn new(
        chain: ExternalChain,
        height: u64,
        ext_tx_hash: Vec<u8>,
    ) -> Result<Self, EntanglementError> {
        invariant_hash_length(chain, ext_tx_hash.len())?;
        Ok(Self {
            chain,
            height,
            ext_tx_hash,
        })
    }

    /// Source chain.
    pub fn chain(&self) -> ExternalChain {
        self.chain
    }

    /// External block height of the claimed transaction.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// External transaction hash.
    pub fn ext_tx_hash(&self) -> &[u8] {
        &self.ext_tx_hash
    }

    /// Hex form of the external hash, for logs and error messages.
    pub fn ext_tx_hash_hex(&self) -> String {
        hex::encode(&self.ext_tx_hash)
    }
}

/// Output position -> record found there. Iterates in ascending output index.
pub type ClaimIndex = BTreeMap<u32, EntangleRecord>;

/// Host-chain transaction. The host chain uses Bitcoin's wire format.
pub type HostTransaction = bitcoin::Transaction;

/// Empty transaction with the given version and no lock time.
pub fn empty_transaction(version: i32) -> HostTransaction {
    HostTransaction {
        version: Version(version),
        lock_time: LockTime::ZERO,
        input: Vec::new(),
        output: Vec::new(),
    }
}

/// Unsigned input with a final sequence number.
pub fn unsigned_input(previous_output: OutPoint) -> TxIn {
    TxIn {
        previous_output,
        script_sig: ScriptBuf::new(),
        sequence: Sequence::MAX,
        witness: Witness::new(),
    }
}
