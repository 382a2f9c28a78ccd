//! # Entanglement Detector
//!
//! Finds the records embedded in a host transaction's outputs.

use super::codec::decode_record;
use super::script::extract_entangle_payload;
use crate::domain::{ClaimIndex, HostTransaction};
use tracing::trace;

/// Scan every output for an embedded record.
///
/// Outputs that are not data carriers, or whose payload does not decode, are
/// ordinary outputs and are skipped. Returns whether any record was found and
/// the index of records by output position.
pub fn detect_entanglement(tx: &HostTransaction) -> (bool, ClaimIndex) {
    let mut claims = ClaimIndex::new();
    for (index, output) in tx.output.iter().enumerate() {
        let Some(payload) = extract_entangle_payload(&output.script_pubkey) else {
            continue;
        };
        match decode_record(payload) {
            Ok(record) => {
                claims.insert(index as u32, record);
            }
            Err(e) => trace!("[qc-18] Output {} is not an entangle record: {}", index, e),
        }
    }
    (!claims.is_empty(), claims)
}

/// Whether the transaction carries at least one record.
pub fn is_entangle_tx(tx: &HostTransaction) -> bool {
    detect_entanglement(tx).0
}
