//! secp256k1 Spend Key Adapter
//!
//! Implements `SpendKey` with `k256`.
//!
//! - RFC 6979 deterministic nonces
//! - Low-S normalized signatures
//! - DER encoding on the wire

use crate::domain::{Address, EntanglementError, Hash};
use crate::ports::outbound::SpendKey;
use bitcoin::hashes::Hash as _;
use k256::ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey};
use zeroize::Zeroizing;

/// secp256k1 signing key. `SigningKey` wipes its scalar on drop.
pub struct Secp256k1SpendKey {
    signing_key: SigningKey,
}

impl Secp256k1SpendKey {
    /// Generate a random key.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes). The moved-in copy is wiped.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, EntanglementError> {
        let bytes = Zeroizing::new(bytes);
        let signing_key = SigningKey::from_bytes((&*bytes).into())
            .map_err(|_| EntanglementError::SigningError("invalid private key".to_string()))?;
        Ok(Self { signing_key })
    }
}

impl SpendKey for Secp256k1SpendKey {
    fn public_key(&self) -> [u8; 33] {
        let point = self.signing_key.verifying_key().to_encoded_point(true);
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    /// HASH160 of the compressed public key, as checked by P2PKH.
    fn address(&self) -> Address {
        Address::hash(&self.public_key())
    }

    fn sign_digest(&self, digest: &Hash) -> Result<Vec<u8>, EntanglementError> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| EntanglementError::SigningError(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(signature.to_der().as_bytes().to_vec())
    }
}
