// Copyright (c) 2024 The Fuego Developers

//! `tx_extra` tag stream scanner.
//!
//! The stream is a sequence of tagged records. Padding (`0x00`) is a run of
//! zero bytes with no length prefix, a HEAT commitment (`0x08`) has a fixed
//! layout, and every other tag is followed by a varint length and that many
//! opaque bytes. The first commitment tag ends the scan whether or not its
//! record decodes.

use tracing::{debug, trace};

use crate::{
    commitment::{decode_commitment, CommitmentRecord},
    error::ScanError,
    tag::{ExtraTag, TX_EXTRA_PADDING_MAX_RUN},
    varint::{read_varint, VarintError},
};

/// Scan `extra` for the first HEAT commitment record.
///
/// Every failure, including a matched but undecodable record, is reported as
/// `None`. Use [`scan_detailed`] to tell them apart.
pub fn scan(extra: &[u8]) -> Option<CommitmentRecord> {
    scan_detailed(extra).ok()
}

/// Returns true if `extra` carries a decodable HEAT commitment.
pub fn is_burn_transaction(extra: &[u8]) -> bool {
    scan(extra).is_some()
}

/// Scan `extra` for the first HEAT commitment record, reporting why none was
/// returned.
///
/// The cursor advances by at least one byte per iteration and varints are
/// capped at five bytes, so the scan is linear in `extra.len()` for any input.
pub fn scan_detailed(extra: &[u8]) -> Result<CommitmentRecord, ScanError> {
    let mut pos = 0usize;

    while pos < extra.len() {
        let tag_offset = pos;
        let tag = ExtraTag::from(extra[pos]);
        pos += 1;

        match tag {
            ExtraTag::HeatCommitment => {
                return decode_commitment(extra, pos).map_err(|err| {
                    debug!(offset = tag_offset, %tag, "commitment present but {}", err);
                    ScanError::from(err)
                });
            }
            ExtraTag::Padding => {
                let run = extra[pos..]
                    .iter()
                    .take(TX_EXTRA_PADDING_MAX_RUN)
                    .take_while(|byte| **byte == 0)
                    .count();
                trace!(offset = tag_offset, %tag, run, "skipping padding");
                pos += run;
            }
            ExtraTag::Other(_) => {
                let (len, consumed) = match read_varint(extra, pos) {
                    Ok(v) => v,
                    Err(VarintError::Truncated(_)) => {
                        trace!(offset = tag_offset, %tag, "extra ends inside varint");
                        return Err(ScanError::NotFound);
                    }
                    Err(VarintError::Overlong) => {
                        debug!(offset = pos, %tag, "overlong varint length");
                        return Err(ScanError::MalformedVarint { offset: pos });
                    }
                };
                trace!(offset = tag_offset, %tag, len, "skipping record");

                // A declared length running past the end of the buffer is
                // tolerated; the loop condition ends the scan.
                let len = usize::try_from(len).unwrap_or(usize::MAX);
                pos = pos.saturating_add(consumed).saturating_add(len);
            }
        }
    }

    Err(ScanError::NotFound)
}
