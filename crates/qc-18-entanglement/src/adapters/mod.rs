//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for cross-chain entanglement.

mod pool_reserve;
mod replay_guard;
mod secp256k1_key;

pub use pool_reserve::SharedPoolReserve;
pub use replay_guard::{InMemoryReplayGuard, ReplayKey};
pub use secp256k1_key::Secp256k1SpendKey;
