#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use zahlteil::core::*;
use zahlteil::qrbill::*;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Spread the input over the free-text fields.
    let parts: Vec<&str> = s.split('|').collect();
    let part = |i: usize| parts.get(i).copied().unwrap_or_default();

    let Some(day) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return;
    };
    let invoice = InvoiceBuilder::new(part(0), "fuzz", day, day)
        .debtor(
            DebtorBuilder::new(part(1), part(2))
                .address(part(3), part(4), part(5), part(6))
                .build(),
        )
        .build_unchecked();
    let sender = Sender::new(part(7), part(8), part(9), part(10), part(11));
    let banking = Banking::new("", part(12), part(13));

    // Errors are fine; a payload must always have the full field count.
    if let Ok(payload) = build_payload(&invoice, &sender, &banking) {
        assert_eq!(payload.fields().count(), FIELD_COUNT);
    }
});
