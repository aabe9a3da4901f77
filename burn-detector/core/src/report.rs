// Copyright (c) 2024 The Fuego Developers

//! Serializable burn detection reports.

use serde::{Deserialize, Serialize};

use crate::{address::extract_destination_address, commitment::CommitmentRecord};

/// Report kind for HEAT commitments.
pub const HEAT_COMMITMENT_KIND: &str = "heat_commitment";

/// A detected burn, with binary fields hex-encoded for display and transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnReport {
    /// Record kind, always `heat_commitment`
    #[serde(rename = "type")]
    pub kind: String,

    /// Commitment hash (hex)
    pub commitment_hash: String,

    /// Burned amount in atomic units
    pub amount: u64,

    /// Metadata (hex, empty when absent)
    pub metadata: String,

    /// Metadata length in bytes
    pub metadata_size: usize,

    /// Always true for a decoded commitment
    pub is_burn: bool,

    /// Ethereum address found in the metadata, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
}

impl BurnReport {
    /// Build a report without looking for a destination address.
    pub fn from_record(record: &CommitmentRecord) -> Self {
        Self {
            kind: HEAT_COMMITMENT_KIND.to_string(),
            commitment_hash: hex::encode(record.commitment_hash),
            amount: record.amount,
            metadata: hex::encode(&record.metadata),
            metadata_size: record.metadata.len(),
            is_burn: true,
            destination_address: None,
        }
    }

    /// Build a report and fill in the destination address from the metadata.
    pub fn with_destination(record: &CommitmentRecord) -> Self {
        Self {
            destination_address: extract_destination_address(&record.metadata),
            ..Self::from_record(record)
        }
    }

    /// Build a report, extracting the destination address only when asked.
    pub fn for_record(record: &CommitmentRecord, extract_address: bool) -> Self {
        if extract_address {
            Self::with_destination(record)
        } else {
            Self::from_record(record)
        }
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Convert to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
