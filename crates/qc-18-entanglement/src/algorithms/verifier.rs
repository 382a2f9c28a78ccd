//! # Entangle Transaction Verifier
//!
//! Admission decision for a transaction claiming external deposits.
//!
//! ## Pipeline
//!
//! 1. Detect records. None -> `NotEntangleTx`.
//! 2. Replay check per record, in output order. First duplicate -> `DuplicateEntangle`.
//!    A reference repeated inside the same transaction counts as a duplicate.
//!    Claimed output values are summed on the way.
//! 3. External validation per record. Any failure -> `ExternalVerifyFailed`.
//! 4. Claimed total must be strictly below the pool reserve -> `InsufficientReserve`.
//!
//! Replay checks finish before the first external call, so a known duplicate
//! never costs a round trip to the external chain.

use super::detector::detect_entanglement;
use crate::domain::{invariant_reserve_covers, ClaimIndex, EntanglementError, HostTransaction};
use crate::ports::outbound::{ExternalValidator, PoolReserve, ReplayGuard};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Claims of an accepted transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedEntanglement {
    /// Verified records by output index.
    pub claims: ClaimIndex,
    /// Sum of the claimed outputs' values.
    pub claimed_amount: u64,
    /// Reserve the claim was checked against.
    pub reserve: u64,
}

/// Run the full verification pipeline.
///
/// Nothing is written to the replay guard; the host chain commits the
/// references once the transaction is accepted into state.
pub async fn verify_entangle_tx<G, V, R>(
    tx: &HostTransaction,
    replay_guard: &G,
    validator: &V,
    pool: &R,
) -> Result<VerifiedEntanglement, EntanglementError>
where
    G: ReplayGuard + ?Sized,
    V: ExternalValidator + ?Sized,
    R: PoolReserve + ?Sized,
{
    let (has_any, claims) = detect_entanglement(tx);
    if !has_any {
        return Err(EntanglementError::NotEntangleTx);
    }

    let mut claimed_amount: u64 = 0;
    {
        let mut seen = HashSet::with_capacity(claims.len());
        for (index, record) in &claims {
            let repeated = !seen.insert((record.chain(), record.ext_tx_hash()));
            if repeated || replay_guard.exists(record) {
                warn!(
                    "[qc-18] Duplicate entangle at output {}: {} height {} txid {}",
                    index,
                    record.chain(),
                    record.height(),
                    record.ext_tx_hash_hex()
                );
                return Err(EntanglementError::DuplicateEntangle {
                    height: record.height(),
                    tx_hash: record.ext_tx_hash_hex(),
                });
            }
            let value = tx
                .output
                .get(*index as usize)
                .map(|output| output.value.to_sat())
                .unwrap_or(0);
            claimed_amount = claimed_amount.saturating_add(value);
        }
    }

    for record in claims.values() {
        if let Err(e) = validator
            .verify(record.chain(), record.height(), record.ext_tx_hash())
            .await
        {
            warn!(
                "[qc-18] External verification failed for {} txid {}: {}",
                record.chain(),
                record.ext_tx_hash_hex(),
                e
            );
            return Err(EntanglementError::ExternalVerifyFailed {
                height: record.height(),
                tx_hash: record.ext_tx_hash_hex(),
                reason: e.to_string(),
            });
        }
        debug!(
            "[qc-18] Verified {} txid {} at height {}",
            record.chain(),
            record.ext_tx_hash_hex(),
            record.height()
        );
    }

    let reserve = pool.reserve_amount();
    invariant_reserve_covers(claimed_amount, reserve)?;

    info!(
        "[qc-18] Accepted entangle tx with {} claims, amount {} (reserve {})",
        claims.len(),
        claimed_amount,
        reserve
    );

    Ok(VerifiedEntanglement {
        claims,
        claimed_amount,
        reserve,
    })
}
