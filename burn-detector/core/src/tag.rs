// Copyright (c) 2024 The Fuego Developers

//! `tx_extra` tag classification.

/// Tag byte announcing a run of zero padding.
pub const TX_EXTRA_TAG_PADDING: u8 = 0x00;

/// Tag byte announcing a HEAT burn commitment record.
pub const TX_EXTRA_HEAT_COMMITMENT: u8 = 0x08;

/// Maximum number of zero bytes consumed after a padding tag.
pub const TX_EXTRA_PADDING_MAX_RUN: usize = 255;

/// The behavioral class of a `tx_extra` tag byte.
///
/// Only padding and HEAT commitments are interpreted; every other value is an
/// opaque, varint length-prefixed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraTag {
    /// Zero padding (`0x00`)
    Padding,
    /// HEAT burn commitment (`0x08`)
    HeatCommitment,
    /// Any other tag, skipped by length
    Other(u8),
}

impl From<u8> for ExtraTag {
    fn from(byte: u8) -> Self {
        match byte {
            TX_EXTRA_TAG_PADDING => ExtraTag::Padding,
            TX_EXTRA_HEAT_COMMITMENT => ExtraTag::HeatCommitment,
            other => ExtraTag::Other(other),
        }
    }
}

impl std::fmt::Display for ExtraTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtraTag::Padding => write!(f, "padding"),
            ExtraTag::HeatCommitment => write!(f, "heat_commitment"),
            ExtraTag::Other(byte) => write!(f, "other(0x{:02x})", byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_classification() {
        assert_eq!(ExtraTag::from(0x00), ExtraTag::Padding);
        assert_eq!(ExtraTag::from(0x08), ExtraTag::HeatCommitment);
        assert_eq!(ExtraTag::from(0x01), ExtraTag::Other(0x01));
        assert_eq!(ExtraTag::from(0x07), ExtraTag::Other(0x07));
        assert_eq!(ExtraTag::from(0x09), ExtraTag::Other(0x09));
        assert_eq!(ExtraTag::from(0xff), ExtraTag::Other(0xff));
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(ExtraTag::Padding.to_string(), "padding");
        assert_eq!(ExtraTag::HeatCommitment.to_string(), "heat_commitment");
        assert_eq!(ExtraTag::Other(0x02).to_string(), "other(0x02)");
    }
}
