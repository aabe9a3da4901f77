// Copyright (c) 2024 The Fuego Developers

//! Errors which can occur while scanning `tx_extra` for a burn commitment

use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// A field of the HEAT commitment record, in wire order.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RecordField {
    /// commitment hash
    CommitmentHash,
    /// amount
    Amount,
    /// metadata length
    MetadataLength,
    /// metadata
    Metadata,
}

/// An error decoding a HEAT commitment record
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum DecodeError {
    /// Record truncated reading {field}: needed {needed} bytes, {available} available
    Truncated {
        field: RecordField,
        needed: usize,
        available: usize,
    },
}

impl std::error::Error for DecodeError {}

/// An error encoding a HEAT commitment record
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum EncodeError {
    /// Metadata is {0} bytes, at most 255 can be encoded
    MetadataTooLong(usize),
}

impl std::error::Error for EncodeError {}

/// The reason a scan of `tx_extra` did not yield a commitment record
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum ScanError {
    /// No HEAT commitment tag present
    NotFound,

    /// Varint length at offset {offset} exceeds 5 bytes
    MalformedVarint { offset: usize },

    /// HEAT commitment present but undecodable: {0}
    Decode(DecodeError),
}

impl std::error::Error for ScanError {}

impl From<DecodeError> for ScanError {
    fn from(src: DecodeError) -> Self {
        ScanError::Decode(src)
    }
}
