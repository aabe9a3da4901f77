// Copyright (c) 2024 The Fuego Developers

//! Destination address hints in commitment metadata.
//!
//! Wallets may write the recipient's Ethereum address into the free-form
//! metadata of a burn. This is a convenience heuristic only: the first
//! `0x`-prefixed run of 40 hex characters is returned as-is, with no EIP-55
//! checksum validation.

use once_cell::sync::Lazy;
use regex::Regex;

static ETH_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x[0-9a-fA-F]{40}").expect("static regex is valid"));

/// Find the first Ethereum-style address in `metadata`.
///
/// Invalid UTF-8 is replaced rather than rejected, so an address surrounded
/// by binary data is still found.
pub fn extract_destination_address(metadata: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(metadata);
    ETH_ADDRESS.find(&text).map(|m| m.as_str().to_string())
}
