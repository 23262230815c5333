//! SPC payload assembly.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{Banking, Debtor, Invoice, Sender, round_currency, verify_total};

use super::address::{sanitize, split_address, truncate};
use super::country::{DEFAULT_COUNTRY, is_known_country_code, resolve_country};
use super::error::EncodeError;
use super::iban::Iban;

/// Number of fields in an SPC 2.0 payload without alternative procedures.
pub const FIELD_COUNT: usize = 31;
/// Field separator.
pub const SEPARATOR: &str = "\r\n";

const QR_TYPE: &str = "SPC";
const VERSION: &str = "0200";
const CODING_UTF8: &str = "1";
const ADDRESS_STRUCTURED: &str = "S";
const REFERENCE_NONE: &str = "NON";
const TRAILER: &str = "EPD";

const MAX_NAME: usize = 70;
const MAX_POSTAL_CODE: usize = 16;
const MAX_TOWN: usize = 35;
const MAX_COUNTRY: usize = 2;
const MAX_CURRENCY: usize = 3;
const MAX_ADDITIONAL_INFO: usize = 140;
const ULTIMATE_CREDITOR_FIELDS: usize = 7;

const MAX_AMOUNT: Decimal = dec!(999999999.99);

/// A finished payload, ready to be embedded verbatim in a QR symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrPayload(String);

impl QrPayload {
    /// What renderers show in place of a payload when encoding failed.
    pub const FAILED: &'static str = "";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterate over the fields in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Field by 1-based position, as numbered in the SPC layout.
    pub fn field(&self, position: usize) -> Option<&str> {
        position.checked_sub(1).and_then(|i| self.fields().nth(i))
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creditor or debtor block: address type plus six fields.
struct StructuredAddress {
    name: String,
    street: String,
    house_number: String,
    postal_code: String,
    town: String,
    country: String,
}

impl StructuredAddress {
    fn creditor(banking: &Banking, sender: &Sender) -> Self {
        let (street, house_number) = split_address(&sender.address);
        Self {
            name: truncate(&sanitize(&banking.account_holder), MAX_NAME),
            street,
            house_number,
            postal_code: truncate(&sanitize(&sender.zip), MAX_POSTAL_CODE),
            town: truncate(&sanitize(&sender.city), MAX_TOWN),
            country: truncate(&resolve_country(&sender.country), MAX_COUNTRY),
        }
    }

    fn debtor(debtor: &Debtor) -> Self {
        let (street, house_number) = split_address(&debtor.address_line);
        let country = sanitize(&debtor.country_code).to_uppercase();
        let country = if is_known_country_code(&country) {
            country
        } else {
            DEFAULT_COUNTRY.to_string()
        };
        Self {
            name: truncate(&sanitize(&debtor.full_name()), MAX_NAME),
            street,
            house_number,
            postal_code: truncate(&sanitize(&debtor.postal_code), MAX_POSTAL_CODE),
            town: truncate(&sanitize(&debtor.city), MAX_TOWN),
            country,
        }
    }

    fn data_list(self) -> [String; 7] {
        [
            ADDRESS_STRUCTURED.to_string(),
            self.name,
            self.street,
            self.house_number,
            self.postal_code,
            self.town,
            self.country,
        ]
    }
}

/// Build the QR-bill payload for an invoice.
///
/// Checks, in order: banking details present, IBAN is CH/LI, debtor
/// present, amount in range. Pure: identical inputs give an identical
/// payload. The stored invoice total is encoded as-is; a mismatch with
/// the line items is logged, not corrected.
pub fn build_payload(
    invoice: &Invoice,
    sender: &Sender,
    banking: &Banking,
) -> Result<QrPayload, EncodeError> {
    if !banking.is_complete() {
        return Err(EncodeError::MissingBankingDetails);
    }

    let iban = Iban::parse(&banking.iban).inspect_err(|e| {
        tracing::warn!(invoice = %invoice.number, error = %e, "unsupported creditor IBAN");
    })?;

    let debtor = invoice.debtor.as_ref().ok_or(EncodeError::MissingDebtor)?;

    let amount = round_currency(invoice.total_amount);
    if amount < Decimal::ZERO || amount > MAX_AMOUNT {
        return Err(EncodeError::AmountOutOfRange(invoice.total_amount));
    }

    if let Err(e) = verify_total(invoice) {
        tracing::warn!(invoice = %invoice.number, error = %e, "invoice total mismatch");
    }

    let mut fields: Vec<String> = Vec::with_capacity(FIELD_COUNT);
    fields.extend([QR_TYPE, VERSION, CODING_UTF8].map(String::from));
    fields.push(iban.to_string());
    fields.extend(StructuredAddress::creditor(banking, sender).data_list());
    fields.extend(std::iter::repeat_n(String::new(), ULTIMATE_CREDITOR_FIELDS));
    fields.push(format_amount(amount));
    fields.push(truncate(&sanitize(&invoice.currency_code), MAX_CURRENCY));
    fields.extend(StructuredAddress::debtor(debtor).data_list());
    fields.push(REFERENCE_NONE.to_string());
    fields.push(String::new());
    fields.push(truncate(
        &format!("Invoice {}", sanitize(&invoice.number)),
        MAX_ADDITIONAL_INFO,
    ));
    fields.push(TRAILER.to_string());

    let payload = join_fields(&fields)?;
    tracing::debug!(invoice = %invoice.number, fields = FIELD_COUNT, "encoded QR-bill payload");
    Ok(payload)
}

/// Amount with exactly two decimals and a `.` separator.
fn format_amount(amount: Decimal) -> String {
    if amount.is_zero() {
        return "0.00".to_string();
    }
    format!("{amount:.2}")
}

fn join_fields(fields: &[String]) -> Result<QrPayload, EncodeError> {
    let payload = fields.join(SEPARATOR);
    let actual = payload.split(SEPARATOR).count();
    if actual != FIELD_COUNT {
        tracing::error!(expected = FIELD_COUNT, actual, "QR-bill payload field count mismatch");
        return Err(EncodeError::StructuralMismatch {
            expected: FIELD_COUNT,
            actual,
        });
    }
    Ok(QrPayload(payload))
}
