//! # Entanglement Configuration
//!
//! Builder and signer knobs, loadable from defaults, environment or JSON.

use super::errors::EntanglementError;
use serde::{Deserialize, Serialize};
use std::env;

/// Largest sigScript spending a pay-to-address output:
/// OP_DATA_73 <sig> OP_DATA_33 <pubkey>.
pub const DEFAULT_SPEND_SIZE: usize = 1 + 73 + 1 + 33;

/// Default host transaction version.
pub const DEFAULT_TX_VERSION: i32 = 1;

/// Entanglement subsystem configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntanglementConfig {
    /// Per-input signature budget added to the size estimate.
    pub spend_size: usize,
    /// Version stamped on built transactions.
    pub tx_version: i32,
    /// Fail with `InsufficientInput` when selected value does not cover the fee.
    pub strict_input_value: bool,
}

impl Default for EntanglementConfig {
    fn default() -> Self {
        Self {
            spend_size: DEFAULT_SPEND_SIZE,
            tx_version: DEFAULT_TX_VERSION,
            strict_input_value: false,
        }
    }
}

impl EntanglementConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_ENTANGLE_SPEND_SIZE`: per-input signature budget (default: 108)
    /// - `QC_ENTANGLE_TX_VERSION`: transaction version (default: 1)
    /// - `QC_ENTANGLE_STRICT_INPUT`: reject underfunded builds (default: false)
    ///
    /// Unparseable values fall back to the default; the result is validated.
    pub fn from_env() -> Result<Self, EntanglementError> {
        let defaults = Self::default();
        let config = Self {
            spend_size: env::var("QC_ENTANGLE_SPEND_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.spend_size),

            tx_version: env::var("QC_ENTANGLE_TX_VERSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.tx_version),

            strict_input_value: env::var("QC_ENTANGLE_STRICT_INPUT")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.strict_input_value),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EntanglementError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EntanglementError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject budgets too small to hold any signature script.
    pub fn validate(&self) -> Result<(), EntanglementError> {
        if self.spend_size == 0 {
            return Err(EntanglementError::Config(
                "spend_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
