//! # Entangle Transaction Signer
//!
//! Authorizes every input of a built transaction with one key.

use super::script::pay_to_address_script;
use super::sighash::{signature_hash, SIGHASH_ALL};
use crate::domain::{EntanglementError, HostTransaction};
use crate::ports::outbound::SpendKey;
use bitcoin::script::{Builder, PushBytesBuf};
use tracing::debug;

/// Sign every input of `tx`.
///
/// `input_amounts[i]` is the value of the output spent by input `i` and is
/// committed in that input's signature hash. Each input gets the script
/// `<DER signature || sighash byte> <compressed pubkey>`.
///
/// All signatures are produced before any is installed, so on error `tx` is
/// left exactly as it was.
///
/// # Errors
/// * `SigningError` - amount count mismatch or signing primitive failure
pub fn sign_entangle_tx<K: SpendKey + ?Sized>(
    tx: &mut HostTransaction,
    input_amounts: &[u64],
    key: &K,
) -> Result<(), EntanglementError> {
    if input_amounts.len() != tx.input.len() {
        return Err(EntanglementError::SigningError(format!(
            "{} input amounts for {} inputs",
            input_amounts.len(),
            tx.input.len()
        )));
    }

    let public_key = to_push(key.public_key().to_vec())?;
    let script_code = pay_to_address_script(&key.address());

    let mut scripts = Vec::with_capacity(tx.input.len());
    for (index, amount) in input_amounts.iter().enumerate() {
        let digest = signature_hash(tx, index, &script_code, *amount, SIGHASH_ALL)?;
        let mut signature = key.sign_digest(&digest)?;
        signature.push(SIGHASH_ALL.to_u32() as u8);

        let script = Builder::new()
            .push_slice(to_push(signature)?)
            .push_slice(&public_key)
            .into_script();
        scripts.push(script);
    }

    for (input, script) in tx.input.iter_mut().zip(scripts) {
        input.script_sig = script;
    }

    debug!("[qc-18] Signed {} inputs", tx.input.len());
    Ok(())
}

fn to_push(bytes: Vec<u8>) -> Result<PushBytesBuf, EntanglementError> {
    PushBytesBuf::try_from(bytes).map_err(|e| EntanglementError::SigningError(e.to_string()))
}
