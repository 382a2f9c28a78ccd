//! # Exploit Simulations
//!
//! Attacks on claim admission. Each test states the attack and asserts the
//! transaction is rejected without side effects.

pub mod forgery;
pub mod replay;
