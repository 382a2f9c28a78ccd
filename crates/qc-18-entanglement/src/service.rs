//! # Entanglement Service
//!
//! Application service layer that implements the `EntanglementApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`EntanglementApi`)
//! - Holds the outbound ports (`ReplayGuard`, `ExternalValidator`, `PoolReserve`)
//! - Delegates building, signing and verification to the algorithms layer

use crate::algorithms::{self, BuiltEntangleTx, EntangleTxParams, VerifiedEntanglement};
use crate::domain::{ClaimIndex, EntanglementConfig, EntanglementError, HostTransaction};
use crate::ports::inbound::EntanglementApi;
use crate::ports::outbound::{ExternalValidator, PoolReserve, ReplayGuard, SpendKey};
use async_trait::async_trait;

/// Entanglement Service.
pub struct EntanglementService<G, V, R>
where
    G: ReplayGuard,
    V: ExternalValidator,
    R: PoolReserve,
{
    config: EntanglementConfig,
    replay_guard: G,
    validator: V,
    pool: R,
}

impl<G, V, R> EntanglementService<G, V, R>
where
    G: ReplayGuard,
    V: ExternalValidator,
    R: PoolReserve,
{
    /// Create a new entanglement service.
    ///
    /// # Arguments
    /// * `config` - Builder configuration
    /// * `replay_guard` - Consumed-reference lookup
    /// * `validator` - External chain validator
    /// * `pool` - Pool reserve accessor
    pub fn new(config: EntanglementConfig, replay_guard: G, validator: V, pool: R) -> Self {
        Self {
            config,
            replay_guard,
            validator,
            pool,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EntanglementConfig {
        &self.config
    }

    /// Replay guard, for the host chain's commit path.
    pub fn replay_guard(&self) -> &G {
        &self.replay_guard
    }

    /// External validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Pool reserve.
    pub fn pool(&self) -> &R {
        &self.pool
    }
}

#[async_trait]
impl<G, V, R> EntanglementApi for EntanglementService<G, V, R>
where
    G: ReplayGuard,
    V: ExternalValidator,
    R: PoolReserve,
{
    fn build_entangle_tx(
        &self,
        params: EntangleTxParams,
    ) -> Result<BuiltEntangleTx, EntanglementError> {
        algorithms::build_entangle_tx(params, &self.config)
    }

    fn sign_entangle_tx(
        &self,
        tx: &mut HostTransaction,
        input_amounts: &[u64],
        key: &dyn SpendKey,
    ) -> Result<(), EntanglementError> {
        algorithms::sign_entangle_tx(tx, input_amounts, key)
    }

    fn detect(&self, tx: &HostTransaction) -> (bool, ClaimIndex) {
        algorithms::detect_entanglement(tx)
    }

    async fn verify_entangle_tx(
        &self,
        tx: &HostTransaction,
    ) -> Result<VerifiedEntanglement, EntanglementError> {
        algorithms::verify_entangle_tx(tx, &self.replay_guard, &self.validator, &self.pool).await
    }
}
