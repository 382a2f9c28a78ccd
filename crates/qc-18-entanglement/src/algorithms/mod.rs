//! # Algorithms Module
//!
//! Core algorithms for Cross-Chain Entanglement.

pub mod builder;
pub mod codec;
pub mod detector;
pub mod script;
pub mod sighash;
pub mod signer;
pub mod verifier;

pub use builder::{build_entangle_tx, BuiltEntangleTx, EntangleTxParams};
pub use codec::{decode_record, encode_record, MIN_RECORD_LEN};
pub use detector::{detect_entanglement, is_entangle_tx};
pub use script::{entangle_script, extract_entangle_payload, pay_to_address_script, MAX_PAYLOAD_LEN};
pub use sighash::{signature_hash, SIGHASH_ALL};
pub use signer::sign_entangle_tx;
pub use verifier::{verify_entangle_tx, VerifiedEntanglement};
