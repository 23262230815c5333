use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zahlteil::core::*;
use zahlteil::qrbill::*;

fn invoice() -> InvoiceBuilder {
    InvoiceBuilder::new(
        "2024-002",
        "building-7",
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    )
    .add_item(LineItemBuilder::new("Netzstrom", LineItemType::NormalPower, dec!(80.00)).build())
}

fn report(label: &str, result: Result<QrPayload, EncodeError>) {
    match result {
        Ok(payload) => println!("  {label}: ok, amount {}", payload.field(19).unwrap_or_default()),
        Err(e) if e.omits_payment_page() => println!("  {label}: payment part omitted ({e})"),
        Err(e) => println!("  {label}: failed ({e})"),
    }
}

fn main() {
    let sender = Sender::new("Verwaltung AG", "Bahnhofstrasse 1", "8000", "Zürich", "CH");
    let debtor = DebtorBuilder::new("Anna", "Muster")
        .address("Seestrasse 5", "8001", "Zürich", "CH")
        .build();
    let with_debtor = invoice().debtor(debtor).build().expect("valid invoice");

    // ── 1. Builder rejects an inconsistent total ──────────────────────
    println!("=== Builder ===");
    match invoice().total_amount(dec!(79.95)).build() {
        Ok(_) => println!("  unexpectedly valid"),
        Err(e) => println!("  build failed: {e}"),
    }

    // ── 2. Encoding failures ──────────────────────────────────────────
    println!("\n=== Encoding ===");
    report(
        "no banking details",
        build_payload(&with_debtor, &sender, &Banking::default()),
    );
    report(
        "German IBAN",
        build_payload(
            &with_debtor,
            &sender,
            &Banking::new("", "DE89 3704 0044 0532 0130 00", "Verwaltung AG"),
        ),
    );
    let banking = Banking::new("", "CH93 0076 2011 6238 5295 7", "Verwaltung AG");
    report(
        "no debtor",
        build_payload(&invoice().build_unchecked(), &sender, &banking),
    );
    report("complete", build_payload(&with_debtor, &sender, &banking));

    // ── 3. Stored total is encoded even when line items disagree ──────
    println!("\n=== Total verification ===");
    let mut imported = with_debtor.clone();
    imported.total_amount = dec!(79.95);
    if let Err(e) = verify_total(&imported) {
        println!("  {e}");
    }
    report("mismatching total", build_payload(&imported, &sender, &banking));
}
