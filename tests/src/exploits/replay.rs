//! # Replay Attacks
//!
//! One external deposit, many claims:
//! - Re-submitting an already committed deposit
//! - The same deposit twice inside one transaction
//! - The same deposit at a different claimed height

#[cfg(test)]
mod tests {
    use crate::fixtures::{record, service_with, tx_with_scripts};
    use qc_18_entanglement::{
        encode_record, entangle_script, EntangleRecord, EntanglementApi, EntanglementError,
        ExternalChain, MockExternalValidator, ScriptBuf,
    };

    fn claim_script(record: &EntangleRecord) -> ScriptBuf {
        entangle_script(&encode_record(record)).unwrap()
    }

    /// Attack: submit a fresh claim next to an already consumed one, hoping
    /// the fresh claim is externally verified and the batch slips through.
    #[tokio::test]
    async fn test_consumed_reference_rejected_before_external_calls() {
        let service = service_with(MockExternalValidator::new(), 1_000_000);
        let consumed = record(ExternalChain::Dogecoin, 100);
        service.replay_guard().mark_consumed(&consumed);

        let fresh = record(ExternalChain::Litecoin, 200);
        let tx = tx_with_scripts(vec![
            (10, claim_script(&fresh)),
            (10, claim_script(&consumed)),
        ]);

        let result = service.verify_entangle_tx(&tx).await;
        assert!(matches!(
            result,
            Err(EntanglementError::DuplicateEntangle { height: 100, .. })
        ));
        assert!(service.validator().calls().is_empty());
    }

    /// Attack: claim the same deposit twice within one transaction, before
    /// either is committed.
    #[tokio::test]
    async fn test_intra_transaction_repeat_rejected() {
        let service = service_with(MockExternalValidator::new(), 1_000_000);
        let deposit = record(ExternalChain::Litecoin, 300);
        let tx = tx_with_scripts(vec![
            (10, claim_script(&deposit)),
            (10, claim_script(&deposit)),
        ]);

        assert!(matches!(
            service.verify_entangle_tx(&tx).await,
            Err(EntanglementError::DuplicateEntangle { .. })
        ));
        assert!(service.validator().calls().is_empty());
    }

    /// Attack: replay a committed deposit under a different height.
    #[tokio::test]
    async fn test_height_change_does_not_evade_guard() {
        let service = service_with(MockExternalValidator::new(), 1_000_000);
        let original = record(ExternalChain::Dogecoin, 500);
        service.replay_guard().mark_consumed(&original);

        let shifted = EntangleRecord::new(
            original.chain(),
            original.height() + 1,
            original.ext_tx_hash().to_vec(),
        )
        .unwrap();
        let tx = tx_with_scripts(vec![(10, claim_script(&shifted))]);

        assert!(matches!(
            service.verify_entangle_tx(&tx).await,
            Err(EntanglementError::DuplicateEntangle { height: 501, .. })
        ));
    }

    /// Attack: race two transactions spending the same deposit; only the
    /// first commit wins.
    #[tokio::test]
    async fn test_second_commit_of_same_claims_fails() {
        let service = service_with(MockExternalValidator::new(), 1_000_000);
        let deposit = record(ExternalChain::Litecoin, 42);
        let tx_a = tx_with_scripts(vec![(10, claim_script(&deposit))]);
        let tx_b = tx_with_scripts(vec![(5, ScriptBuf::from_bytes(vec![0x51])), (10, claim_script(&deposit))]);

        let verified_a = service.verify_entangle_tx(&tx_a).await.unwrap();
        let verified_b = service.verify_entangle_tx(&tx_b).await.unwrap();

        assert!(service
            .replay_guard()
            .commit_claims(&verified_a.claims)
            .is_ok());
        assert!(matches!(
            service.replay_guard().commit_claims(&verified_b.claims),
            Err(EntanglementError::DuplicateEntangle { .. })
        ));
        assert_eq!(service.replay_guard().len(), 1);
    }
}
