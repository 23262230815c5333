use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zahlteil::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn debtor() -> Debtor {
    DebtorBuilder::new("Anna", "Muster")
        .address("Seestrasse 5", "8001", "Zürich", "CH")
        .email("anna@example.ch")
        .build()
}

fn energy_items() -> Vec<InvoiceLineItem> {
    vec![
        LineItemBuilder::info("Zähler EG links", LineItemType::MeterInfo).build(),
        LineItemBuilder::info("Stand 01.01.: 1200 kWh", LineItemType::MeterReadingFrom).build(),
        LineItemBuilder::info("Stand 31.03.: 1650 kWh", LineItemType::MeterReadingTo).build(),
        LineItemBuilder::info("Verbrauch: 450 kWh", LineItemType::TotalConsumption).build(),
        LineItemBuilder::new("Solarstrom 300 kWh", LineItemType::SolarPower, dec!(60.00)).build(),
        LineItemBuilder::new("Netzstrom 150 kWh", LineItemType::NormalPower, dec!(40.00)).build(),
        LineItemBuilder::info("", LineItemType::Separator).build(),
        LineItemBuilder::info("Ladestation P3", LineItemType::ChargingHeader).build(),
        LineItemBuilder::new("Laden normal", LineItemType::CarChargingNormal, dec!(30.00)).build(),
        LineItemBuilder::new("Laden priorität", LineItemType::CarChargingPriority, dec!(0)).build(),
        LineItemBuilder::new("Grundgebühr", LineItemType::BaseFee, dec!(20.00)).build(),
        LineItemBuilder::new("Hinweis", LineItemType::from_tag("notice"), dec!(0)).build(),
    ]
}

fn builder() -> InvoiceBuilder {
    let mut b = InvoiceBuilder::new("2024-001", "building-7", date(2024, 1, 1), date(2024, 3, 31))
        .currency("CHF")
        .status(InvoiceStatus::Issued)
        .debtor(debtor());
    for item in energy_items() {
        b = b.add_item(item);
    }
    b
}

// --- Classifier ---

#[test]
fn classifier_sum_invariant() {
    let items = vec![
        LineItemBuilder::info("Zähler", LineItemType::MeterInfo).build(),
        LineItemBuilder::info("Verbrauch", LineItemType::TotalConsumption).build(),
        LineItemBuilder::new("Solar", LineItemType::SolarPower, dec!(100.00)).build(),
        LineItemBuilder::new("Laden", LineItemType::CarChargingNormal, dec!(50.00)).build(),
        LineItemBuilder::new("Info", LineItemType::from_tag("note"), dec!(0.00)).build(),
    ];

    let contributing: rust_decimal::Decimal = classify_items(&items)
        .iter()
        .filter(|c| c.contributes)
        .map(|c| c.item.total_price)
        .sum();
    assert_eq!(contributing, dec!(150.00));
    assert_eq!(costed_total(&items), dec!(150.00));
}

#[test]
fn classification_follows_table_order() {
    let items = energy_items();
    let categories: Vec<LineCategory> = classify_items(&items).iter().map(|c| c.category).collect();
    assert_eq!(
        categories,
        vec![
            LineCategory::Header,
            LineCategory::Info,
            LineCategory::Info,
            LineCategory::Info,
            LineCategory::CostedHighlighted,
            LineCategory::CostedHighlighted,
            LineCategory::Separator,
            LineCategory::Header,
            LineCategory::CostedHighlighted,
            LineCategory::CostedHighlighted,
            LineCategory::CostedPlain,
            LineCategory::ZeroAmountInfo,
        ]
    );
}

#[test]
fn energy_kinds_for_highlighted_rows() {
    let items = energy_items();
    let kinds: Vec<EnergyKind> = classify_items(&items)
        .iter()
        .filter_map(|c| c.energy_kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            EnergyKind::Solar,
            EnergyKind::Grid,
            EnergyKind::ChargingNormal,
            EnergyKind::ChargingPriority,
        ]
    );
}

// --- Builder ---

#[test]
fn build_defaults_total_to_costed_sum() {
    let inv = builder().build().unwrap();
    assert_eq!(inv.total_amount, dec!(150.00));
    assert_eq!(inv.id, "2024-001");
    assert_eq!(inv.status, InvoiceStatus::Issued);
    assert_eq!(inv.items.len(), 12);
}

#[test]
fn build_rejects_mismatching_total() {
    let err = builder().total_amount(dec!(149.95)).build().unwrap_err();
    assert!(matches!(err, InvoiceError::Arithmetic(_)));
    assert!(err.to_string().contains("TOTAL-01"));
}

#[test]
fn build_reports_total_mismatch_once() {
    let err = builder()
        .currency("Franken")
        .total_amount(dec!(149.95))
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Arithmetic(_)));
    assert_eq!(err.to_string().matches("TOTAL-01").count(), 1);
}

#[test]
fn build_unchecked_keeps_stored_total() {
    let inv = builder().total_amount(dec!(149.95)).build_unchecked();
    assert_eq!(inv.total_amount, dec!(149.95));
    assert!(verify_total(&inv).is_err());
}

#[test]
fn build_rejects_bad_currency() {
    let err = builder().currency("Franken").build().unwrap_err();
    assert!(matches!(err, InvoiceError::Validation(_)));
}

#[test]
fn build_rejects_overlong_number() {
    let err = InvoiceBuilder::new("x".repeat(201), "b", date(2024, 1, 1), date(2024, 1, 31))
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Builder(_)));
}

#[test]
fn empty_invoice_is_valid_with_zero_total() {
    let inv = InvoiceBuilder::new("2024-002", "b", date(2024, 1, 1), date(2024, 1, 31))
        .build()
        .unwrap();
    assert_eq!(inv.total_amount, dec!(0));
    assert!(inv.debtor.is_none());
}

// --- Serialization ---

#[test]
fn json_roundtrip() {
    let inv = builder().build().unwrap();
    let json = serde_json::to_string_pretty(&inv).unwrap();
    assert!(json.contains("\"item_type\": \"solar_power\""));
    assert!(json.contains("\"status\": \"issued\""));
    assert!(json.contains("\"total_amount\": \"150.00\""));

    let back: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(back.items, inv.items);
    assert_eq!(back.total_amount, inv.total_amount);
}

#[test]
fn unknown_item_type_from_json() {
    let json = r#"{"description":"Wärmepumpe","item_type":"heat_pump_share","total_price":"12.30"}"#;
    let item: InvoiceLineItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.item_type, LineItemType::Other("heat_pump_share".into()));
    assert_eq!(classify(&item).category, LineCategory::CostedPlain);
}
