use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a payment part payload could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// IBAN or account holder missing.
    #[error("banking details incomplete: IBAN and account holder are required")]
    MissingBankingDetails,

    /// IBAN present but not a CH/LI account (value is the normalized IBAN).
    #[error("IBAN '{0}' is not a Swiss or Liechtenstein IBAN")]
    UnsupportedIban(String),

    /// The invoice has no billed user.
    #[error("invoice has no debtor")]
    MissingDebtor,

    /// Amount outside the range a QR-bill can carry.
    #[error("amount {0} is outside 0.00..=999999999.99")]
    AmountOutOfRange(Decimal),

    /// The assembled payload has the wrong number of fields. Always a bug.
    #[error("payload has {actual} fields, expected {expected}")]
    StructuralMismatch { expected: usize, actual: usize },
}

impl EncodeError {
    /// True when the invoice is still deliverable without a payment part.
    pub fn omits_payment_page(&self) -> bool {
        matches!(self, Self::MissingBankingDetails | Self::UnsupportedIban(_))
    }
}
