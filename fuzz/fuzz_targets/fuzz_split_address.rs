#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on any input.
        let (street, number) = zahlteil::qrbill::split_address(s);
        assert!(street.chars().count() <= zahlteil::qrbill::MAX_STREET);
        assert!(number.chars().count() <= zahlteil::qrbill::MAX_HOUSE_NUMBER);
        let _ = zahlteil::qrbill::Iban::parse(s).map(|iban| iban.has_valid_checksum());
    }
});
