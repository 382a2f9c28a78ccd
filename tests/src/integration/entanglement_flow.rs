//! # Entanglement Flow
//!
//! A depositor builds and signs a host transaction carrying a claim; a
//! validating node detects the claim, verifies it, and commits the reference.
//!
//! ## Flow Tested:
//!
//! 1. **Build**: record embedded, fee charged on the signature budget, change returned
//! 2. **Sign**: every input carries `<sig> <pubkey>` over the SIGHASH_ALL digest
//! 3. **Detect**: the node recovers the exact record
//! 4. **Verify + commit**: admitted once, rejected as a duplicate afterwards

#[cfg(test)]
mod tests {
    use crate::fixtures::{params, record, service_with, tx_with_scripts};
    use k256::ecdsa::{signature::hazmat::PrehashVerifier, Signature, VerifyingKey};
    use qc_18_entanglement::bitcoin::hashes::{hash160, Hash as _};
    use qc_18_entanglement::bitcoin::script::Instruction;
    use qc_18_entanglement::bitcoin::sighash::SighashCache;
    use qc_18_entanglement::{
        encode_record, entangle_script, pay_to_address_script, signature_hash, unsigned_input,
        Address, Amount, EntanglementApi, EntanglementError, ExternalChain,
        MockExternalValidator, OutPoint, Secp256k1SpendKey, SpendKey, Txid, SIGHASH_ALL,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Data pushes of a signature script, in order.
    fn pushes(script: &qc_18_entanglement::bitcoin::Script) -> Vec<Vec<u8>> {
        script
            .instructions()
            .map(|i| match i.unwrap() {
                Instruction::PushBytes(data) => data.as_bytes().to_vec(),
                Instruction::Op(op) => panic!("unexpected opcode {op}"),
            })
            .collect()
    }

    // =============================================================================
    // INTEGRATION TESTS: DEPOSITOR → NODE
    // =============================================================================

    #[tokio::test]
    async fn test_full_claim_lifecycle() {
        let service = service_with(MockExternalValidator::new(), 10_000);
        let key = Secp256k1SpendKey::generate();
        let claim = record(ExternalChain::Dogecoin, 4_200_000);

        // Build
        let built = service
            .build_entangle_tx(params(claim.clone(), 100_000))
            .unwrap();
        assert_eq!(built.fee, built.estimated_size as u64);
        assert_eq!(built.change, Some(100_000 - built.fee));

        // Sign
        let mut tx = built.transaction;
        service.sign_entangle_tx(&mut tx, &[100_000], &key).unwrap();

        // Detect
        let (has_any, claims) = service.detect(&tx);
        assert!(has_any);
        assert_eq!(claims.get(&0), Some(&claim));

        // Verify + commit
        let verified = service.verify_entangle_tx(&tx).await.unwrap();
        assert_eq!(verified.reserve, 10_000);
        let committed = service
            .replay_guard()
            .commit_claims(&verified.claims)
            .unwrap();
        assert_eq!(committed, 1);

        let calls = service.validator().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ExternalChain::Dogecoin);
        assert_eq!(calls[0].1, 4_200_000);
        assert_eq!(calls[0].2, claim.ext_tx_hash());

        // A second submission of the same deposit is a replay
        assert!(matches!(
            service.verify_entangle_tx(&tx).await,
            Err(EntanglementError::DuplicateEntangle {
                height: 4_200_000,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_signatures_verify_against_spent_amounts() {
        let service = service_with(MockExternalValidator::new(), 10_000);
        let key = Secp256k1SpendKey::generate();

        let mut p = params(record(ExternalChain::Litecoin, 1), 90_000);
        p.inputs.push(unsigned_input(OutPoint {
            txid: Txid::from_byte_array([0x43; 32]),
            vout: 7,
        }));
        let mut tx = service.build_entangle_tx(p).unwrap().transaction;
        let amounts = [60_000u64, 30_000];
        service.sign_entangle_tx(&mut tx, &amounts, &key).unwrap();

        let verifying_key = VerifyingKey::from_sec1_bytes(&key.public_key()).unwrap();
        let script_code = pay_to_address_script(&key.address());

        for (index, input) in tx.input.iter().enumerate() {
            let items = pushes(&input.script_sig);
            assert_eq!(items.len(), 2);
            assert_eq!(items[1], key.public_key());

            let (sighash_byte, der) = items[0].split_last().unwrap();
            assert_eq!(*sighash_byte as u32, SIGHASH_ALL.to_u32());

            // The digest is computed with signature scripts present; they are
            // not part of it.
            let digest =
                signature_hash(&tx, index, &script_code, amounts[index], SIGHASH_ALL).unwrap();
            let signature = Signature::from_der(der).unwrap();
            assert!(verifying_key.verify_prehash(&digest, &signature).is_ok());

            // Same digest as the segwit v0 algorithm over the spent amount
            let reference = SighashCache::new(&tx)
                .p2wsh_signature_hash(
                    index,
                    &script_code,
                    Amount::from_sat(amounts[index]),
                    SIGHASH_ALL,
                )
                .unwrap();
            assert_eq!(&digest, reference.as_byte_array());

            // Committing to the amount: a different value breaks the signature
            let wrong =
                signature_hash(&tx, index, &script_code, amounts[index] + 1, SIGHASH_ALL).unwrap();
            assert!(verifying_key.verify_prehash(&wrong, &signature).is_err());
        }
    }

    #[tokio::test]
    async fn test_change_is_spendable_by_signing_key() {
        let service = service_with(MockExternalValidator::new(), 10_000);
        let key = Secp256k1SpendKey::generate();

        let mut p = params(record(ExternalChain::Dogecoin, 9), 100_000);
        p.change_address = key.address();
        let built = service.build_entangle_tx(p).unwrap();
        let change = &built.transaction.output[1].script_pubkey;

        assert!(change.is_p2pkh());
        assert_eq!(
            &change.as_bytes()[3..23],
            hash160::Hash::hash(&key.public_key()).as_byte_array()
        );
    }

    #[tokio::test]
    async fn test_multi_claim_transaction_admitted_in_index_order() {
        let service = service_with(MockExternalValidator::new(), 10_000);
        let first = record(ExternalChain::Litecoin, 10);
        let second = record(ExternalChain::Dogecoin, 20);

        let tx = tx_with_scripts(vec![
            (700, entangle_script(&encode_record(&first)).unwrap()),
            (5, pay_to_address_script(&Address::from_byte_array([0x01; 20]))),
            (800, entangle_script(&encode_record(&second)).unwrap()),
        ]);

        let verified = service.verify_entangle_tx(&tx).await.unwrap();
        assert_eq!(verified.claims.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(verified.claimed_amount, 1_500);

        let heights: Vec<u64> = service
            .validator()
            .calls()
            .into_iter()
            .map(|(_, height, _)| height)
            .collect();
        assert_eq!(heights, vec![10, 20]);
    }

    #[tokio::test]
    async fn test_ordinary_transaction_is_not_entangle() {
        let service = service_with(MockExternalValidator::new(), 10_000);
        let tx = tx_with_scripts(vec![(
            1_000,
            pay_to_address_script(&Address::from_byte_array([0x09; 20])),
        )]);

        assert!(!service.detect(&tx).0);
        assert!(matches!(
            service.verify_entangle_tx(&tx).await,
            Err(EntanglementError::NotEntangleTx)
        ));
        assert!(service.validator().calls().is_empty());
    }

    #[test]
    fn test_logging_init_reports_existing_subscriber() {
        quantum_telemetry::init_test_logging();
        let config = quantum_telemetry::TelemetryConfig::for_subsystem("18", "entanglement");
        assert!(matches!(
            quantum_telemetry::init_logging(&config),
            Err(quantum_telemetry::TelemetryError::AlreadyInitialized(_))
        ));
    }
}
