#![no_main]

use libfuzzer_sys::fuzz_target;

use fuego_burn_core::{
    decode_commitment, extract_destination_address, scan, scan_detailed, BurnReport,
};

// Fuzz target for tx_extra scanning.
//
// tx_extra is attacker-controlled: anyone can submit a transaction with
// arbitrary extra bytes. Scanning must terminate and never panic.
fuzz_target!(|data: &[u8]| {
    let detailed = scan_detailed(data);
    assert_eq!(scan(data).is_some(), detailed.is_ok());

    if let Ok(record) = detailed {
        // A decoded record re-encodes to the bytes it came from.
        let encoded = record.to_extra_bytes().expect("decoded metadata fits in a length byte");
        assert!(data.windows(encoded.len()).any(|window| window == encoded.as_slice()));

        let again = decode_commitment(&encoded, 1).expect("re-encoded record decodes");
        assert_eq!(again, record);

        let report = BurnReport::with_destination(&record);
        let _ = report.to_json();
    }

    // Decoding from every offset must stay in bounds.
    for pos in 0..=data.len().min(64) {
        let _ = decode_commitment(data, pos);
    }

    let _ = extract_destination_address(data);
});
