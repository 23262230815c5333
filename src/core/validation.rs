use rust_decimal::Decimal;

use super::classify::{checked_costed_total, round_currency};
use super::error::ValidationError;
use super::types::*;

/// Check that the stored total matches the classifier sum.
///
/// Returns the classifier sum on success. A mismatch points at a defect in
/// the billing engine; the stored total is never corrected here.
pub fn verify_total(invoice: &Invoice) -> Result<Decimal, ValidationError> {
    let Some(expected) = checked_costed_total(&invoice.items) else {
        return Err(ValidationError::with_rule(
            "items",
            "sum of billed line items overflows",
            "TOTAL-01",
        ));
    };
    let stored = round_currency(invoice.total_amount);

    if stored != expected {
        return Err(ValidationError::with_rule(
            "total_amount",
            format!(
                "stored total {} does not match sum of billed line items {}",
                invoice.total_amount, expected
            ),
            "TOTAL-01",
        ));
    }

    Ok(expected)
}

/// Validate an invoice before it is handed to the payment part.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "number",
            "invoice number must not be empty",
            "INV-01",
        ));
    }

    let currency = &invoice.currency_code;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push(ValidationError::with_rule(
            "currency_code",
            format!("currency code '{currency}' must be 3 uppercase letters (ISO 4217)"),
            "INV-02",
        ));
    }

    if invoice.period.end < invoice.period.start {
        errors.push(ValidationError::with_rule(
            "period.end",
            format!(
                "period end {} is before period start {}",
                invoice.period.end, invoice.period.start
            ),
            "INV-03",
        ));
    }

    if invoice.total_amount.scale() > 2
        && invoice.total_amount != round_currency(invoice.total_amount)
    {
        errors.push(ValidationError::with_rule(
            "total_amount",
            format!(
                "total {} has more than 2 decimal places",
                invoice.total_amount
            ),
            "INV-04",
        ));
    }

    if let Some(debtor) = &invoice.debtor {
        validate_debtor(debtor, &mut errors);
    }

    if let Err(e) = verify_total(invoice) {
        errors.push(e);
    }

    errors
}

fn validate_debtor(debtor: &Debtor, errors: &mut Vec<ValidationError>) {
    if debtor.full_name().is_empty() {
        errors.push(ValidationError::new(
            "debtor.name",
            "debtor must have a first or last name",
        ));
    }

    let cc = debtor.country_code.trim();
    if !cc.is_empty() && (cc.len() != 2 || !cc.chars().all(|c| c.is_ascii_alphabetic())) {
        errors.push(ValidationError::new(
            "debtor.country_code",
            format!("country code '{cc}' must be 2 letters (ISO 3166-1 alpha-2)"),
        ));
    }
}
