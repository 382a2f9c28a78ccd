//! # Domain Errors
//!
//! Error types for Cross-Chain Entanglement.
//!
//! Codec errors only disqualify a single output. Every verification error is
//! terminal for the whole transaction.

use thiserror::Error;

/// Hash type (32-byte digest).
pub type Hash = [u8; 32];

/// Host-chain address: HASH160 of the compressed public key.
pub type Address = bitcoin::PubkeyHash;

/// Cross-chain entanglement error types.
#[derive(Debug, Error)]
pub enum EntanglementError {
    /// Record bytes shorter than the fixed header.
    #[error("Malformed record: {len} bytes, header needs {min}")]
    MalformedRecord {
        /// Bytes received
        len: usize,
        /// Minimum header size
        min: usize,
    },

    /// First byte is not a registered chain tag.
    #[error("Unknown chain type: {0:#04x}")]
    UnknownChainType(u8),

    /// External hash length does not match the chain's mandated length.
    #[error("Length mismatch for {chain}: expected {expected} hash bytes, got {actual}")]
    LengthMismatch {
        /// Chain name
        chain: String,
        /// Mandated hash length
        expected: usize,
        /// Hash length found
        actual: usize,
    },

    /// Payload does not fit in a single data-carrier push.
    #[error("Script payload too large: {len} bytes, max {max}")]
    ScriptTooLarge {
        /// Payload length
        len: usize,
        /// Maximum payload length
        max: usize,
    },

    /// Transaction carries no valid entanglement record.
    #[error("Not an entangle transaction")]
    NotEntangleTx,

    /// External reference was already entangled.
    #[error("Txid has already been entangled: [height:{height}, txid:{tx_hash}]")]
    DuplicateEntangle {
        /// External block height
        height: u64,
        /// External tx hash (hex)
        tx_hash: String,
    },

    /// External chain did not corroborate the claim.
    #[error("Txid verify failed: [height:{height}, txid:{tx_hash}] err: {reason}")]
    ExternalVerifyFailed {
        /// External block height
        height: u64,
        /// External tx hash (hex)
        tx_hash: String,
        /// Validator error message
        reason: String,
    },

    /// Aggregate claim is not covered by the pool reserve.
    #[error("Amount not enough: [request:{requested}, reserve:{reserve}]")]
    InsufficientReserve {
        /// Claimed total
        requested: u64,
        /// Pool reserve
        reserve: u64,
    },

    /// Selected input value does not cover the fee.
    #[error("Insufficient input: available {available}, required {required}")]
    InsufficientInput {
        /// Selected input value
        available: u64,
        /// Required fee
        required: u64,
    },

    /// Signing primitive failure.
    #[error("Signing error: {0}")]
    SigningError(String),

    /// External chain backend failure (validator side).
    #[error("External chain error: {0}")]
    ExternalChain(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),
}
