//! # QC-18 Cross-Chain Entanglement
//!
//! Claims about deposits on external chains, carried inside host transactions.
//!
//! **Subsystem ID:** 18  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Let a host transaction prove that value was deposited on an external chain:
//! - A compact binary record (chain tag, height, external tx hash) in a data-carrier output
//! - Replay prevention over consumed external references
//! - External-chain corroboration of every claim before admission
//! - A pool reserve bound on the total claimed value
//!
//! ## Security Properties
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Exact hash length | Wrong-length hashes rejected, never padded |
//! | Replay fail-fast | Duplicate references rejected before any external call |
//! | Atomic admission | One failed claim rejects the whole transaction |
//! | Reserve bound | Claimed total strictly below pool reserve |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-entanglement/
//! ├── domain/          # EntangleRecord, HostTransaction (bitcoin wire format), ExternalChain, config, errors
//! ├── algorithms/      # Codec, scripts, detector, builder, sighash, signer, verifier
//! ├── ports/           # EntanglementApi, ReplayGuard, ExternalValidator, PoolReserve, SpendKey
//! ├── adapters/        # In-memory replay guard, shared reserve, secp256k1 key
//! └── service.rs       # EntanglementService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryReplayGuard, Secp256k1SpendKey, SharedPoolReserve};
pub use algorithms::{
    build_entangle_tx, decode_record, detect_entanglement, encode_record, entangle_script,
    extract_entangle_payload, is_entangle_tx, pay_to_address_script, sign_entangle_tx,
    signature_hash, verify_entangle_tx, BuiltEntangleTx, EntangleTxParams, VerifiedEntanglement,
    MIN_RECORD_LEN, SIGHASH_ALL,
};
pub use domain::{
    empty_transaction, invariant_hash_length, invariant_reserve_covers, unsigned_input, Address,
    ChainSpec, ClaimIndex, EntangleRecord, EntanglementConfig, EntanglementError, ExternalChain,
    Hash, HostTransaction, CHAIN_TABLE,
};
pub use ports::{
    EntanglementApi, ExternalValidator, MockExternalValidator, PoolReserve, ReplayGuard, SpendKey,
};
pub use service::EntanglementService;

// Host-chain transaction primitives
pub use bitcoin;
pub use bitcoin::{Amount, OutPoint, ScriptBuf, TxIn, TxOut, Txid};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
