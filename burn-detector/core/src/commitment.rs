// Copyright (c) 2024 The Fuego Developers

//! The HEAT commitment record carried under `tx_extra` tag `0x08`.
//!
//! Wire layout, relative to the byte after the tag:
//!
//! | offset | field           | encoding              |
//! |--------|-----------------|-----------------------|
//! | 0      | commitment hash | 32 raw bytes          |
//! | 32     | amount          | u64, little-endian    |
//! | 40     | metadata length | 1 byte                |
//! | 41     | metadata        | `length` raw bytes    |

use serde::{Deserialize, Serialize};

use crate::{
    error::{DecodeError, EncodeError, RecordField},
    tag::TX_EXTRA_HEAT_COMMITMENT,
};

/// Length of the commitment hash in bytes.
pub const COMMITMENT_HASH_LEN: usize = 32;

/// Length of the encoded amount in bytes.
pub const AMOUNT_LEN: usize = 8;

/// Largest metadata span a single length byte can describe.
pub const MAX_METADATA_LEN: usize = u8::MAX as usize;

/// A decoded HEAT burn commitment.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CommitmentRecord {
    /// Opaque commitment identifier
    pub commitment_hash: [u8; COMMITMENT_HASH_LEN],

    /// Burned amount in atomic units
    pub amount: u64,

    /// Free-form metadata, at most 255 bytes
    pub metadata: Vec<u8>,
}

impl CommitmentRecord {
    /// Create a record, rejecting metadata that cannot be length-prefixed by a
    /// single byte.
    pub fn new(
        commitment_hash: [u8; COMMITMENT_HASH_LEN],
        amount: u64,
        metadata: impl Into<Vec<u8>>,
    ) -> Result<Self, EncodeError> {
        let metadata = metadata.into();
        if metadata.len() > MAX_METADATA_LEN {
            return Err(EncodeError::MetadataTooLong(metadata.len()));
        }
        Ok(Self {
            commitment_hash,
            amount,
            metadata,
        })
    }

    /// Number of bytes the record occupies after its tag.
    pub fn encoded_len(&self) -> usize {
        COMMITMENT_HASH_LEN + AMOUNT_LEN + 1 + self.metadata.len()
    }

    /// Append the tagged record to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        let metadata_len = u8::try_from(self.metadata.len())
            .map_err(|_| EncodeError::MetadataTooLong(self.metadata.len()))?;

        out.reserve(1 + self.encoded_len());
        out.push(TX_EXTRA_HEAT_COMMITMENT);
        out.extend_from_slice(&self.commitment_hash);
        out.extend_from_slice(&self.amount.to_le_bytes());
        out.push(metadata_len);
        out.extend_from_slice(&self.metadata);
        Ok(())
    }

    /// Encode the record as a standalone `tx_extra` buffer.
    pub fn to_extra_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(1 + self.encoded_len());
        self.encode_into(&mut out)?;
        Ok(out)
    }
}

/// Borrow `len` bytes at `pos`, or report how short the buffer is.
fn take(buf: &[u8], pos: usize, len: usize, field: RecordField) -> Result<&[u8], DecodeError> {
    pos.checked_add(len)
        .and_then(|end| buf.get(pos..end))
        .ok_or(DecodeError::Truncated {
            field,
            needed: len,
            available: buf.len().saturating_sub(pos),
        })
}

/// Decode the commitment record starting at `pos`, the byte just past the
/// `0x08` tag.
///
/// Either all four fields fit inside `buf` or the whole decode fails; a
/// partial record is never produced. No semantic validation of the hash or
/// amount is done.
pub fn decode_commitment(buf: &[u8], pos: usize) -> Result<CommitmentRecord, DecodeError> {
    let mut pos = pos;

    let hash_bytes = take(buf, pos, COMMITMENT_HASH_LEN, RecordField::CommitmentHash)?;
    let mut commitment_hash = [0u8; COMMITMENT_HASH_LEN];
    commitment_hash.copy_from_slice(hash_bytes);
    pos += COMMITMENT_HASH_LEN;

    let amount_bytes = take(buf, pos, AMOUNT_LEN, RecordField::Amount)?;
    let mut amount_le = [0u8; AMOUNT_LEN];
    amount_le.copy_from_slice(amount_bytes);
    let amount = u64::from_le_bytes(amount_le);
    pos += AMOUNT_LEN;

    let metadata_len = take(buf, pos, 1, RecordField::MetadataLength)?[0] as usize;
    pos += 1;

    let metadata = take(buf, pos, metadata_len, RecordField::Metadata)?.to_vec();

    Ok(CommitmentRecord {
        commitment_hash,
        amount,
        metadata,
    })
}
