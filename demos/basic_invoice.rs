use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zahlteil::core::*;
use zahlteil::qrbill::*;

fn main() {
    // An invoice as the billing engine hands it over
    let invoice = InvoiceBuilder::new(
        "2024-001",
        "building-7",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
    .currency("CHF")
    .status(InvoiceStatus::Issued)
    .debtor(
        DebtorBuilder::new("Anna", "Muster")
            .address("Seestrasse 5", "8001", "Zürich", "CH")
            .email("anna.muster@example.ch")
            .build(),
    )
    .add_item(LineItemBuilder::info("Zähler EG links", LineItemType::MeterInfo).build())
    .add_item(LineItemBuilder::info("Verbrauch: 450 kWh", LineItemType::TotalConsumption).build())
    .add_item(LineItemBuilder::new("Solarstrom 300 kWh", LineItemType::SolarPower, dec!(60.00)).build())
    .add_item(LineItemBuilder::new("Netzstrom 150 kWh", LineItemType::NormalPower, dec!(40.00)).build())
    .add_item(LineItemBuilder::info("", LineItemType::Separator).build())
    .add_item(LineItemBuilder::info("Ladestation P3", LineItemType::ChargingHeader).build())
    .add_item(
        LineItemBuilder::new("Laden normal 120 kWh", LineItemType::CarChargingNormal, dec!(50.00))
            .build(),
    )
    .build()
    .expect("invoice should be valid");

    println!("Invoice {} ({})", invoice.number, invoice.status.as_str());
    for line in classify_items(&invoice.items) {
        let amount = if line.category.shows_amount() {
            format!("{:>10.2}", line.item.total_price)
        } else {
            String::new()
        };
        let category = format!("{:?}", line.category);
        println!("  {:<24} {category:<20} {amount}", line.item.description);
    }
    println!("  Total: {} {}", invoice.currency_code, invoice.total_amount);

    let sender = Sender::new("Verwaltung AG", "Bahnhofstrasse 1", "8000", "Zürich", "Schweiz");
    let banking = Banking::new("Zürcher Kantonalbank", "ch93 0076 2011 6238 5295 7", "Verwaltung AG");

    match build_payload(&invoice, &sender, &banking) {
        Ok(payload) => {
            println!("\nQR payload ({} fields):", payload.fields().count());
            for (i, field) in payload.fields().enumerate() {
                println!("  {:>2}: {field}", i + 1);
            }
        }
        Err(e) => println!("no payment part: {e}"),
    }
}
