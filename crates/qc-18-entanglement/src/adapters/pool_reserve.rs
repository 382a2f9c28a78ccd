//! Pool Reserve Adapter
//!
//! Implements `PoolReserve` over an atomic balance.

use crate::domain::EntanglementError;
use crate::ports::outbound::PoolReserve;
use std::sync::atomic::{AtomicU64, Ordering};

/// Pool balance shared between the verifier and whatever funds the pool.
#[derive(Debug, Default)]
pub struct SharedPoolReserve {
    amount: AtomicU64,
}

impl SharedPoolReserve {
    /// Create with an initial balance.
    pub fn new(amount: u64) -> Self {
        Self {
            amount: AtomicU64::new(amount),
        }
    }

    /// Overwrite the balance.
    pub fn set(&self, amount: u64) {
        self.amount.store(amount, Ordering::SeqCst);
    }

    /// Add funds. Saturates at `u64::MAX`.
    pub fn credit(&self, amount: u64) {
        let _ = self
            .amount
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(amount))
            });
    }

    /// Pay out a redeemed claim.
    ///
    /// # Errors
    /// * `InsufficientReserve` - balance is below `amount`
    pub fn debit(&self, amount: u64) -> Result<u64, EntanglementError> {
        self.amount
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_sub(amount)
            })
            .map(|previous| previous - amount)
            .map_err(|reserve| EntanglementError::InsufficientReserve {
                requested: amount,
                reserve,
            })
    }
}

impl PoolReserve for SharedPoolReserve {
    fn reserve_amount(&self) -> u64 {
        self.amount.load(Ordering::SeqCst)
    }
}
