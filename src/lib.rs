//! # zahlteil
//!
//! Swiss QR-bill payload encoding for building-energy invoices: the
//! payment part ("Zahlteil") of an invoice, plus the line-item classifier
//! that decides which rows make up the amount being billed.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! The payload follows the Swiss Payment Code (SPC) 2.0 layout: 31 fields,
//! CRLF-separated, structured addresses, reference type `NON`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zahlteil::core::*;
//! use zahlteil::qrbill::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(
//!         "2024-001",
//!         "building-7",
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//!     )
//!     .currency("CHF")
//!     .debtor(DebtorBuilder::new("Anna", "Muster")
//!         .address("Seestrasse 5", "8001", "Zürich", "CH")
//!         .build())
//!     .add_item(LineItemBuilder::new("Solarstrom", LineItemType::SolarPower, dec!(100)).build())
//!     .add_item(LineItemBuilder::new("Laden", LineItemType::CarChargingNormal, dec!(50)).build())
//!     .build()
//!     .unwrap();
//!
//! let sender = Sender::new("Verwaltung AG", "Bahnhofstrasse 1", "8000", "Zürich", "Schweiz");
//! let banking = Banking::new("Zürcher Bank", "CH93 0076 2011 6238 5295 7", "Verwaltung AG");
//!
//! let payload = build_payload(&invoice, &sender, &banking).unwrap();
//! assert_eq!(payload.field(19), Some("150.00"));
//! assert_eq!(payload.fields().count(), 31);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice model, builders, line classifier, total verification |
//! | `qrbill` (default) | Address splitting, IBAN checks, SPC payload builder |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "qrbill")]
pub mod qrbill;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
