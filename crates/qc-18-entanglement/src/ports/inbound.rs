//! # Inbound Ports
//!
//! API trait defining what the Entanglement subsystem can do.

use crate::algorithms::{BuiltEntangleTx, EntangleTxParams, VerifiedEntanglement};
use crate::domain::{ClaimIndex, EntanglementError, HostTransaction};
use crate::ports::outbound::SpendKey;
use async_trait::async_trait;

/// Entanglement API - inbound port.
#[async_trait]
pub trait EntanglementApi: Send + Sync {
    /// Build an unsigned transaction carrying one record.
    fn build_entangle_tx(
        &self,
        params: EntangleTxParams,
    ) -> Result<BuiltEntangleTx, EntanglementError>;

    /// Sign every input; `input_amounts[i]` is the value spent by input `i`.
    fn sign_entangle_tx(
        &self,
        tx: &mut HostTransaction,
        input_amounts: &[u64],
        key: &dyn SpendKey,
    ) -> Result<(), EntanglementError>;

    /// Find embedded records.
    fn detect(&self, tx: &HostTransaction) -> (bool, ClaimIndex);

    /// Admission decision for an incoming entangle transaction.
    async fn verify_entangle_tx(
        &self,
        tx: &HostTransaction,
    ) -> Result<VerifiedEntanglement, EntanglementError>;
}
