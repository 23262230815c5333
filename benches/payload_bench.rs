use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use zahlteil::core::*;
use zahlteil::qrbill;

fn test_date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn build_invoice(meters: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new("BENCH-001", "building-1", test_date(1, 1), test_date(3, 31))
        .currency("CHF")
        .debtor(
            DebtorBuilder::new("Anna", "Muster")
                .address("Seestrasse 5", "8001", "Zürich", "CH")
                .build(),
        );

    for i in 1..=meters {
        builder = builder
            .add_item(LineItemBuilder::info(format!("Zähler {i}"), LineItemType::MeterInfo).build())
            .add_item(LineItemBuilder::info("Verbrauch", LineItemType::TotalConsumption).build())
            .add_item(LineItemBuilder::new("Solarstrom", LineItemType::SolarPower, dec!(12.40)).build())
            .add_item(LineItemBuilder::new("Netzstrom", LineItemType::NormalPower, dec!(8.15)).build())
            .add_item(LineItemBuilder::info("", LineItemType::Separator).build());
    }

    builder.build().unwrap()
}

fn sender() -> Sender {
    Sender::new("Verwaltung AG", "Bahnhofstrasse 1", "8000", "Zürich", "Schweiz")
}

fn banking() -> Banking {
    Banking::new("Bank", "CH93 0076 2011 6238 5295 7", "Verwaltung AG")
}

fn bench_build_payload(c: &mut Criterion) {
    let invoice = build_invoice(10);
    let (sender, banking) = (sender(), banking());
    c.bench_function("build_payload", |b| {
        b.iter(|| qrbill::build_payload(black_box(&invoice), black_box(&sender), black_box(&banking)));
    });
}

fn bench_split_address(c: &mut Criterion) {
    c.bench_function("split_address", |b| {
        b.iter(|| qrbill::split_address(black_box("Rue de la Gare 12a")));
    });
}

fn bench_classify_1000_meters(c: &mut Criterion) {
    let invoice = build_invoice(1000);
    c.bench_function("costed_total_5000_lines", |b| {
        b.iter(|| costed_total(black_box(&invoice.items)));
    });
}

criterion_group!(
    benches,
    bench_build_payload,
    bench_split_address,
    bench_classify_1000_meters,
);
criterion_main!(benches);
