//! Property-based tests for the `tx_extra` scanner and commitment decoder.
//!
//! These check the decoding guarantees for arbitrary inputs rather than fixed
//! vectors: no panics, all-or-nothing decoding, and exact skipping of
//! length-prefixed records.

use fuego_burn_core::{
    decode_commitment, extract_destination_address, scan, scan_detailed, varint::write_varint,
    CommitmentRecord, DecodeError, ScanError,
};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = CommitmentRecord> {
    (
        prop::array::uniform32(any::<u8>()),
        any::<u64>(),
        prop::collection::vec(any::<u8>(), 0..=255),
    )
        .prop_map(|(commitment_hash, amount, metadata)| CommitmentRecord {
            commitment_hash,
            amount,
            metadata,
        })
}

/// An `Other` record: a tag that is neither padding nor a commitment, followed
/// by its varint length and payload.
fn arb_other_record() -> impl Strategy<Value = Vec<u8>> {
    (
        any::<u8>().prop_filter("not padding or commitment", |t| *t != 0x00 && *t != 0x08),
        prop::collection::vec(any::<u8>(), 0..300),
    )
        .prop_map(|(tag, payload)| {
            let mut out = vec![tag];
            write_varint(payload.len() as u64, &mut out);
            out.extend_from_slice(&payload);
            out
        })
}

proptest! {
    /// Property: the scanner terminates without panicking on any input.
    #[test]
    fn prop_scan_never_panics(extra in prop::collection::vec(any::<u8>(), 0..2048)) {
        let _ = scan_detailed(&extra);
        prop_assert_eq!(scan(&extra).is_some(), scan_detailed(&extra).is_ok());
    }

    /// Property: encoding a record and decoding it yields the same record.
    #[test]
    fn prop_decode_roundtrip(record in arb_record()) {
        let extra = record.to_extra_bytes().unwrap();
        prop_assert_eq!(decode_commitment(&extra, 1).unwrap(), record.clone());
        prop_assert_eq!(scan(&extra), Some(record));
    }

    /// Property: cutting a valid record short anywhere fails with `Truncated`.
    #[test]
    fn prop_truncation_always_fails(record in arb_record(), cut in any::<prop::sample::Index>()) {
        let extra = record.to_extra_bytes().unwrap();
        // Keep the tag, drop at least the final byte.
        let len = 1 + cut.index(extra.len() - 1);
        let truncated = &extra[..len];

        let result = decode_commitment(truncated, 1);
        prop_assert!(
            matches!(result, Err(DecodeError::Truncated { .. })),
            "expected truncation error, got {:?}",
            result
        );
        let scanned = scan_detailed(truncated);
        prop_assert!(
            matches!(scanned, Err(ScanError::Decode(DecodeError::Truncated { .. }))),
            "expected decode truncation from scan, got {:?}",
            scanned
        );
    }

    /// Property: the amount is the little-endian value of bytes 33..41 after
    /// the tag, whatever precedes the commitment.
    #[test]
    fn prop_amount_is_little_endian(
        prefix in prop::collection::vec(arb_other_record(), 0..4),
        padding in 0usize..300,
        record in arb_record(),
    ) {
        let mut extra: Vec<u8> = prefix.concat();
        if padding > 0 {
            extra.extend(std::iter::repeat(0u8).take(padding));
        }
        let tag_offset = extra.len();
        extra.extend_from_slice(&record.to_extra_bytes().unwrap());

        let mut amount_le = [0u8; 8];
        amount_le.copy_from_slice(&extra[tag_offset + 33..tag_offset + 41]);

        let found = scan(&extra).unwrap();
        prop_assert_eq!(found.amount, u64::from_le_bytes(amount_le));
        prop_assert_eq!(found, record);
    }

    /// Property: a stream of skippable records without a commitment is not a
    /// burn.
    #[test]
    fn prop_other_records_only(records in prop::collection::vec(arb_other_record(), 0..8)) {
        prop_assert_eq!(scan_detailed(&records.concat()), Err(ScanError::NotFound));
    }

    /// Property: the address extractor never panics and only returns
    /// well-shaped candidates.
    #[test]
    fn prop_address_shape(metadata in prop::collection::vec(any::<u8>(), 0..=255)) {
        if let Some(address) = extract_destination_address(&metadata) {
            prop_assert_eq!(address.len(), 42);
            prop_assert!(address.starts_with("0x"));
            prop_assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}

#[test]
fn pathological_ff_buffer_terminates() {
    let extra = vec![0xffu8; 10_000];
    assert!(matches!(
        scan_detailed(&extra),
        Err(ScanError::MalformedVarint { .. }) | Err(ScanError::NotFound)
    ));
    assert_eq!(scan(&extra), None);
}

#[test]
fn zero_length_other_record_resumes_at_next_tag() {
    let record = CommitmentRecord::new([0x42; 32], 10, b"x".to_vec()).unwrap();
    let mut extra = vec![0x02, 0x00];
    extra.extend_from_slice(&record.to_extra_bytes().unwrap());
    assert_eq!(scan(&extra), Some(record));
}
