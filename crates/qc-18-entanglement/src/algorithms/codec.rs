//! # Entangle Record Codec
//!
//! Binary encoding of [`EntangleRecord`].
//!
//! ```text
//! offset 0      1                     9
//!        +------+---------------------+------------------------+
//!        | tag  | height (u64 LE)     | external tx hash       |
//!        +------+---------------------+------------------------+
//!          1 B          8 B             chain-mandated length
//! ```
//!
//! Both directions walk [`RECORD_LAYOUT`] through [`field_spans`], so the
//! offsets used to write a record are the offsets used to read it.

use crate::domain::{EntangleRecord, EntanglementError, ExternalChain};
use std::ops::Range;

/// Fields of an encoded record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordField {
    /// Chain type tag.
    ChainTag,
    /// External block height.
    Height,
    /// External transaction hash.
    ExtTxHash,
}

/// On-wire width of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldWidth {
    /// Constant width in bytes.
    Fixed(usize),
    /// Hash length of the record's chain.
    ChainHash,
}

impl FieldWidth {
    fn resolve(self, hash_len: usize) -> usize {
        match self {
            FieldWidth::Fixed(width) => width,
            FieldWidth::ChainHash => hash_len,
        }
    }
}

/// Ordered record layout.
pub const RECORD_LAYOUT: [(RecordField, FieldWidth); 3] = [
    (RecordField::ChainTag, FieldWidth::Fixed(1)),
    (RecordField::Height, FieldWidth::Fixed(8)),
    (RecordField::ExtTxHash, FieldWidth::ChainHash),
];

/// Minimum encoded length (all fixed-width fields).
pub const MIN_RECORD_LEN: usize = fixed_len();

const fn fixed_len() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < RECORD_LAYOUT.len() {
        if let FieldWidth::Fixed(width) = RECORD_LAYOUT[i].1 {
            total += width;
        }
        i += 1;
    }
    total
}

/// Byte span of every field for a record whose hash is `hash_len` bytes.
pub fn field_spans(hash_len: usize) -> [(RecordField, Range<usize>); 3] {
    let mut offset = 0;
    RECORD_LAYOUT.map(|(field, width)| {
        let start = offset;
        offset += width.resolve(hash_len);
        (field, start..offset)
    })
}

/// Encode a record.
pub fn encode_record(record: &EntangleRecord) -> Vec<u8> {
    let hash = record.ext_tx_hash();
    let mut out = vec![0u8; MIN_RECORD_LEN + hash.len()];
    for (field, span) in field_spans(hash.len()) {
        let slot = &mut out[span];
        match field {
            RecordField::ChainTag => slot.copy_from_slice(&[record.chain().tag()]),
            RecordField::Height => slot.copy_from_slice(&record.height().to_le_bytes()),
            RecordField::ExtTxHash => slot.copy_from_slice(hash),
        }
    }
    out
}

/// Decode a record.
///
/// # Errors
/// * `MalformedRecord` - shorter than [`MIN_RECORD_LEN`]
/// * `UnknownChainType` - unregistered tag
/// * `LengthMismatch` - trailing hash is not the chain's mandated length
pub fn decode_record(data: &[u8]) -> Result<EntangleRecord, EntanglementError> {
    let malformed = || EntanglementError::MalformedRecord {
        len: data.len(),
        min: MIN_RECORD_LEN,
    };
    if data.len() < MIN_RECORD_LEN {
        return Err(malformed());
    }

    let mut chain = None;
    let mut height = None;
    let mut hash: &[u8] = &[];
    for (field, span) in field_spans(data.len() - MIN_RECORD_LEN) {
        let bytes = &data[span];
        match field {
            RecordField::ChainTag => {
                let tag = *bytes.first().ok_or_else(malformed)?;
                chain = Some(
                    ExternalChain::from_tag(tag).ok_or(EntanglementError::UnknownChainType(tag))?,
                );
            }
            RecordField::Height => {
                let raw: [u8; 8] = bytes.try_into().map_err(|_| malformed())?;
                height = Some(u64::from_le_bytes(raw));
            }
            RecordField::ExtTxHash => hash = bytes,
        }
    }

    let chain = chain.ok_or_else(malformed)?;
    let height = height.ok_or_else(malformed)?;
    EntangleRecord::new(chain, height, hash.to_vec())
}
