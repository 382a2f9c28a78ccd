//! # Output Scripts
//!
//! The two script forms the entanglement builder emits:
//! - data carrier: `OP_RETURN <payload>`, holding an encoded record
//! - pay-to-address: P2PKH over the key's HASH160
//!
//! The codec never sees the wrapping; the detector unwraps before decoding.

use crate::domain::{Address, EntanglementError};
use bitcoin::opcodes::all::OP_RETURN;
use bitcoin::script::{Instruction, PushBytes};
use bitcoin::{Script, ScriptBuf};

/// Largest payload carried in one push (`OP_PUSHDATA1`).
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Wrap an encoded record in a data-carrier script.
pub fn entangle_script(payload: &[u8]) -> Result<ScriptBuf, EntanglementError> {
    let too_large = || EntanglementError::ScriptTooLarge {
        len: payload.len(),
        max: MAX_PAYLOAD_LEN,
    };
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(too_large());
    }
    let push: &PushBytes = payload.try_into().map_err(|_| too_large())?;
    Ok(ScriptBuf::new_op_return(push))
}

/// Payload of a data-carrier script holding exactly one minimal, non-empty push.
pub fn extract_entangle_payload(script: &Script) -> Option<&[u8]> {
    let mut instructions = script.instructions_minimal();
    match (instructions.next(), instructions.next(), instructions.next()) {
        (Some(Ok(Instruction::Op(op))), Some(Ok(Instruction::PushBytes(data))), None)
            if op == OP_RETURN && !data.is_empty() && data.len() <= MAX_PAYLOAD_LEN =>
        {
            Some(data.as_bytes())
        }
        _ => None,
    }
}

/// Pay-to-address locking script.
pub fn pay_to_address_script(address: &Address) -> ScriptBuf {
    ScriptBuf::new_p2pkh(address)
}
