// Copyright (c) 2024 The Fuego Developers

//! Detection of HEAT burn commitments in Fuego transaction extra data.
//!
//! A burn transaction carries a commitment record under tag `0x08` in its
//! `tx_extra` field. This crate provides:
//!
//! - A scanner that walks the `tx_extra` tag stream, skipping padding and
//!   length-prefixed records it does not care about
//! - A strict, all-or-nothing decoder for the commitment record
//! - A best-effort extractor for an Ethereum destination address hidden in the
//!   record's free-form metadata
//! - A serializable [`BurnReport`] for callers that print or forward results
//!
//! Everything here is a pure function over a borrowed byte slice. Malformed or
//! truncated input never panics; it is reported as "not a burn".
//!
//! No cryptographic verification of the commitment is performed.

pub mod address;
pub mod commitment;
pub mod error;
pub mod report;
pub mod scanner;
pub mod tag;
pub mod varint;

pub use address::extract_destination_address;
pub use commitment::{decode_commitment, CommitmentRecord};
pub use error::{DecodeError, EncodeError, RecordField, ScanError};
pub use report::BurnReport;
pub use scanner::{is_burn_transaction, scan, scan_detailed};
pub use tag::ExtraTag;

/// Scan `tx_extra` and build a [`BurnReport`] for the first commitment found.
///
/// The destination address is extracted from the metadata when
/// `extract_address` is set.
pub fn parse_burn_transaction(extra: &[u8], extract_address: bool) -> Option<BurnReport> {
    scan(extra).map(|record| BurnReport::for_record(&record, extract_address))
}
