//! Swiss QR-bill (SPC 2.0) payload encoding.
//!
//! Builds the text embedded in the QR symbol of a Swiss payment part:
//! 31 fields separated by CRLF, creditor and debtor as structured
//! addresses, no payment reference.
//!
//! # Example
//!
//! ```
//! use zahlteil::qrbill::*;
//!
//! assert_eq!(
//!     split_address("Bahnhofstrasse 12a"),
//!     ("Bahnhofstrasse".to_string(), "12a".to_string())
//! );
//! assert!(is_supported_iban(&normalize_iban("ch93 0076 2011 6238 5295 7")));
//! assert!(!is_supported_iban("DE89370400440532013000"));
//! ```

mod address;
mod country;
mod error;
mod iban;
mod payload;

pub use address::{MAX_HOUSE_NUMBER, MAX_STREET, sanitize, split_address, truncate};
pub use country::{is_known_country_code, resolve_country};
pub use error::EncodeError;
pub use iban::{Iban, is_supported_iban, normalize_iban};
pub use payload::{FIELD_COUNT, QrPayload, SEPARATOR, build_payload};
