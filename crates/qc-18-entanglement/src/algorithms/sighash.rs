//! # Signature Hash
//!
//! Digest signed for each input. BIP143 (segwit v0) layout, so the preimage
//! commits to the spent amount and a signer cannot be tricked about the
//! value of the output it spends.

use crate::domain::{EntanglementError, Hash, HostTransaction};
use bitcoin::hashes::Hash as _;
use bitcoin::sighash::{EcdsaSighashType, SighashCache};
use bitcoin::{Amount, Script};

/// Sign every input and every output.
pub const SIGHASH_ALL: EcdsaSighashType = EcdsaSighashType::All;

/// Compute the digest for `input_index`.
///
/// # Errors
/// * `SigningError` - `input_index` is out of range
pub fn signature_hash(
    tx: &HostTransaction,
    input_index: usize,
    script_code: &Script,
    amount: u64,
    sighash_type: EcdsaSighashType,
) -> Result<Hash, EntanglementError> {
    let mut cache = SighashCache::new(tx);
    let sighash = cache
        .p2wsh_signature_hash(
            input_index,
            script_code,
            Amount::from_sat(amount),
            sighash_type,
        )
        .map_err(|e| EntanglementError::SigningError(e.to_string()))?;
    Ok(sighash.to_byte_array())
}
