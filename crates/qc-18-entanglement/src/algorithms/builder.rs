//! # Entangle Transaction Builder
//!
//! Assembles an unsigned host transaction carrying one record.
//!
//! Layout of the result:
//! - output 0: zero-value data carrier with the encoded record
//! - inputs: as supplied by the caller
//! - output 1 (optional): change to the caller's address

use super::codec::encode_record;
use super::script::{entangle_script, pay_to_address_script};
use crate::domain::{
    empty_transaction, Address, EntangleRecord, EntanglementConfig, EntanglementError,
    HostTransaction,
};
use bitcoin::{Amount, TxIn, TxOut};
use tracing::debug;

/// Parameters for building an entangle transaction.
#[derive(Clone, Debug)]
pub struct EntangleTxParams {
    /// Inputs funding the fee. Selection is the caller's job.
    pub inputs: Vec<TxIn>,
    /// Fee rate in base units per byte.
    pub fee_rate: u64,
    /// Total value of `inputs`.
    pub selected_value: u64,
    /// Where leftover value goes.
    pub change_address: Address,
    /// Record to embed.
    pub record: EntangleRecord,
}

/// Unsigned transaction plus the numbers it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltEntangleTx {
    /// Unsigned transaction.
    pub transaction: HostTransaction,
    /// Size estimate including the per-input signature budget.
    pub estimated_size: usize,
    /// Fee paid (`estimated_size * fee_rate`).
    pub fee: u64,
    /// Change output value, if one was added.
    pub change: Option<u64>,
}

/// Build an unsigned entangle transaction.
///
/// The fee is charged on a worst-case signature budget per input, so it may
/// overpay once real signatures are in but never underpays.
///
/// Underfunding only fails in strict mode. The one exception is a fee rate so
/// large that `estimated_size * fee_rate` overflows `u64`, which fails in
/// either mode with `required: u64::MAX`.
///
/// # Errors
/// * `ScriptTooLarge` - encoded record does not fit in one push
/// * `InsufficientInput` - fee overflows, or (strict mode) selected value is below the fee
pub fn build_entangle_tx(
    params: EntangleTxParams,
    config: &EntanglementConfig,
) -> Result<BuiltEntangleTx, EntanglementError> {
    let script = entangle_script(&encode_record(&params.record))?;

    let mut tx: HostTransaction = empty_transaction(config.tx_version);
    tx.output.push(TxOut {
        value: Amount::ZERO,
        script_pubkey: script,
    });
    let output_value: u64 = 0;

    tx.input = params.inputs;
    let estimated_size = tx.total_size() + config.spend_size * tx.input.len();

    let fee = (estimated_size as u64)
        .checked_mul(params.fee_rate)
        .ok_or(EntanglementError::InsufficientInput {
            available: params.selected_value,
            required: u64::MAX,
        })?;
    let required = output_value.saturating_add(fee);

    let change = match params.selected_value.checked_sub(required) {
        Some(change) if change > 0 => {
            tx.output.push(TxOut {
                value: Amount::from_sat(change),
                script_pubkey: pay_to_address_script(&params.change_address),
            });
            Some(change)
        }
        Some(_) => None,
        None if config.strict_input_value => {
            return Err(EntanglementError::InsufficientInput {
                available: params.selected_value,
                required,
            });
        }
        None => None,
    };

    debug!(
        "[qc-18] Built entangle tx for {} height {}: size={} fee={} change={:?}",
        params.record.chain(),
        params.record.height(),
        estimated_size,
        fee,
        change
    );

    Ok(BuiltEntangleTx {
        transaction: tx,
        estimated_size,
        fee,
        change,
    })
}
