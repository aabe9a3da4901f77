// Copyright (c) 2024 The Fuego Developers

//! Bounded little-endian base-128 varints, as used for `tx_extra` record
//! lengths.

use displaydoc::Display;

/// Maximum number of bytes read for a single varint (a 32-bit budget).
pub const MAX_VARINT_BYTES: usize = 5;

/// Reasons a varint could not be read.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum VarintError {
    /// Buffer ended after {0} varint bytes
    Truncated(usize),

    /// Continuation bit still set after 5 bytes
    Overlong,
}

impl std::error::Error for VarintError {}

/// Read a varint starting at `pos`.
///
/// Returns the decoded value and the number of bytes consumed. At most
/// [`MAX_VARINT_BYTES`] bytes are examined regardless of continuation bits.
pub fn read_varint(buf: &[u8], pos: usize) -> Result<(u64, usize), VarintError> {
    let mut value = 0u64;

    for i in 0..MAX_VARINT_BYTES {
        let byte = *buf
            .get(pos.saturating_add(i))
            .ok_or(VarintError::Truncated(i))?;
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }

    Err(VarintError::Overlong)
}

/// Append the varint encoding of `value` to `out`.
pub fn write_varint(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}
