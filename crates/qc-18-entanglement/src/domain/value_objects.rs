//! # Domain Value Objects
//!
//! Immutable value types for Cross-Chain Entanglement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External chains whose transactions can be entangled.
///
/// Discriminants are the on-wire type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExternalChain {
    /// Dogecoin mainnet.
    Dogecoin = 0xF0,
    /// Litecoin mainnet.
    Litecoin = 0xF1,
}

/// Static properties of a supported external chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainSpec {
    /// Chain this entry describes.
    pub chain: ExternalChain,
    /// On-wire type tag.
    pub tag: u8,
    /// Mandated external transaction hash length.
    pub hash_len: usize,
    /// Display name.
    pub name: &'static str,
}

/// Registered external chains. Adding a chain means adding a variant and a row.
pub const CHAIN_TABLE: [ChainSpec; 2] = [
    ChainSpec {
        chain: ExternalChain::Dogecoin,
        tag: ExternalChain::Dogecoin as u8,
        hash_len: 32,
        name: "Dogecoin",
    },
    ChainSpec {
        chain: ExternalChain::Litecoin,
        tag: ExternalChain::Litecoin as u8,
        hash_len: 32,
        name: "Litecoin",
    },
];

impl ExternalChain {
    /// Table row for this chain.
    pub fn spec(self) -> &'static ChainSpec {
        match self {
            ExternalChain::Dogecoin => &CHAIN_TABLE[0],
            ExternalChain::Litecoin => &CHAIN_TABLE[1],
        }
    }

    /// On-wire type tag.
    pub fn tag(self) -> u8 {
        self.spec().tag
    }

    /// Look up a chain by its type tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        CHAIN_TABLE
            .iter()
            .find(|spec| spec.tag == tag)
            .map(|spec| spec.chain)
    }

    /// Mandated external transaction hash length in bytes.
    pub fn hash_len(self) -> usize {
        self.spec().hash_len
    }

    /// All registered chains, in table order.
    pub fn all() -> impl Iterator<Item = ExternalChain> {
        CHAIN_TABLE.iter().map(|spec| spec.chain)
    }
}

impl fmt::Display for ExternalChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}
