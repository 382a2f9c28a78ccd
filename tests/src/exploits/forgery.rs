//! # Forged Claims
//!
//! Claims the external chain cannot back, and records crafted to confuse the
//! decoder:
//! - Unknown deposit hidden among real ones
//! - Truncated or padded hashes
//! - Unknown chain tags

#[cfg(test)]
mod tests {
    use crate::fixtures::{random_hash, record, service_with, tx_with_scripts};
    use qc_18_entanglement::{
        decode_record, encode_record, entangle_script, EntanglementApi, EntanglementError,
        ExternalChain, MockExternalValidator,
    };

    /// Attack: slip one fabricated deposit between two genuine ones.
    #[tokio::test]
    async fn test_one_forged_claim_rejects_whole_transaction() {
        let genuine_a = record(ExternalChain::Dogecoin, 1);
        let forged = record(ExternalChain::Litecoin, 2);
        let genuine_b = record(ExternalChain::Dogecoin, 3);
        let validator = MockExternalValidator::new().reject(forged.ext_tx_hash());
        let service = service_with(validator, 1_000_000);

        let tx = tx_with_scripts(
            [&genuine_a, &forged, &genuine_b]
                .iter()
                .map(|r| (10, entangle_script(&encode_record(r)).unwrap()))
                .collect(),
        );

        match service.verify_entangle_tx(&tx).await {
            Err(EntanglementError::ExternalVerifyFailed { height, .. }) => assert_eq!(height, 2),
            other => panic!("expected ExternalVerifyFailed, got {:?}", other),
        }
        // Validation stops at the first failure
        assert_eq!(service.validator().calls().len(), 2);
        assert!(service.replay_guard().is_empty());
    }

    /// Attack: a 31-byte hash left-padded by a lenient decoder would alias a
    /// different deposit.
    #[test]
    fn test_truncated_hash_never_padded() {
        let mut bytes = encode_record(&record(ExternalChain::Dogecoin, 9));
        bytes.pop();
        assert!(matches!(
            decode_record(&bytes),
            Err(EntanglementError::LengthMismatch {
                expected: 32,
                actual: 31,
                ..
            })
        ));
    }

    /// Attack: trailing bytes after the hash.
    #[test]
    fn test_padded_hash_rejected() {
        let mut bytes = encode_record(&record(ExternalChain::Litecoin, 9));
        bytes.push(0x00);
        assert!(matches!(
            decode_record(&bytes),
            Err(EntanglementError::LengthMismatch { actual: 33, .. })
        ));
    }

    /// Attack: data-carrier output with an unknown tag is not a claim, and
    /// cannot make an ordinary transaction look entangled.
    #[tokio::test]
    async fn test_unknown_tag_is_not_a_claim() {
        let service = service_with(MockExternalValidator::new(), 1_000_000);
        let mut payload = vec![0xF7];
        payload.extend_from_slice(&7u64.to_le_bytes());
        payload.extend_from_slice(&random_hash(ExternalChain::Dogecoin));

        assert!(matches!(
            decode_record(&payload),
            Err(EntanglementError::UnknownChainType(0xF7))
        ));

        let tx = tx_with_scripts(vec![(10, entangle_script(&payload).unwrap())]);
        assert!(matches!(
            service.verify_entangle_tx(&tx).await,
            Err(EntanglementError::NotEntangleTx)
        ));
    }
}
