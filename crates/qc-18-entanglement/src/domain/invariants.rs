//! # Domain Invariants
//!
//! Business rules for Cross-Chain Entanglement.

use super::errors::EntanglementError;
use super::value_objects::ExternalChain;

/// Invariant: external hash length.
///
/// The hash must be exactly the length registered for its chain. Short or
/// long hashes are rejected, never padded or truncated.
pub fn invariant_hash_length(chain: ExternalChain, actual: usize) -> Result<(), EntanglementError> {
    let expected = chain.hash_len();
    if actual != expected {
        return Err(EntanglementError::LengthMismatch {
            chain: chain.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Invariant: pool reserve covers the claim.
///
/// The claimed total must be strictly below the reserve.
pub fn invariant_reserve_covers(requested: u64, reserve: u64) -> Result<(), EntanglementError> {
    if requested >= reserve {
        return Err(EntanglementError::InsufficientReserve { requested, reserve });
    }
    Ok(())
}
