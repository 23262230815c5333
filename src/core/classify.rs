//! Line item classification.
//!
//! Every invoice row falls into exactly one [`LineCategory`]. Structural
//! rows (headers, meter readings, separators) are checked first; only
//! then does the row amount decide between costed and informational.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::types::{InvoiceLineItem, LineItemType};

/// Render/compute category of an invoice row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Bold section label.
    Header,
    /// Muted meter reading or consumption figure.
    Info,
    /// Blank spacer row.
    Separator,
    /// Energy or charging tier: bold, tinted, with an icon.
    CostedHighlighted,
    /// Any other billed row.
    CostedPlain,
    /// Unbilled row of an unknown or plain type.
    ZeroAmountInfo,
}

impl LineCategory {
    /// Header and info rows span description and amount columns.
    pub fn spans_both_columns(&self) -> bool {
        matches!(self, Self::Header | Self::Info)
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            Self::Header | Self::CostedHighlighted | Self::CostedPlain
        )
    }

    /// Whether the amount column is printed for this row.
    pub fn shows_amount(&self) -> bool {
        matches!(self, Self::CostedHighlighted | Self::CostedPlain)
    }
}

/// Icon hint for highlighted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyKind {
    Solar,
    Grid,
    ChargingNormal,
    ChargingPriority,
}

/// Classification result for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub item: &'a InvoiceLineItem,
    pub category: LineCategory,
    /// Set for [`LineCategory::CostedHighlighted`] rows only.
    pub energy_kind: Option<EnergyKind>,
    /// Whether `item.total_price` is part of the invoice total.
    pub contributes: bool,
}

impl ClassifiedLine<'_> {
    /// Amount this row adds to the total (zero when it does not contribute).
    pub fn contribution(&self) -> Decimal {
        if self.contributes {
            self.item.total_price
        } else {
            Decimal::ZERO
        }
    }
}

/// Classify a single line item. Never fails.
pub fn classify(item: &InvoiceLineItem) -> ClassifiedLine<'_> {
    let (category, energy_kind) = match &item.item_type {
        LineItemType::MeterInfo | LineItemType::ChargingHeader => (LineCategory::Header, None),
        LineItemType::MeterReadingFrom
        | LineItemType::MeterReadingTo
        | LineItemType::TotalConsumption
        | LineItemType::ChargingSessionFrom
        | LineItemType::ChargingSessionTo
        | LineItemType::TotalCharged => (LineCategory::Info, None),
        LineItemType::Separator => (LineCategory::Separator, None),
        LineItemType::SolarPower => (LineCategory::CostedHighlighted, Some(EnergyKind::Solar)),
        LineItemType::NormalPower => (LineCategory::CostedHighlighted, Some(EnergyKind::Grid)),
        LineItemType::CarChargingNormal => (
            LineCategory::CostedHighlighted,
            Some(EnergyKind::ChargingNormal),
        ),
        LineItemType::CarChargingPriority => (
            LineCategory::CostedHighlighted,
            Some(EnergyKind::ChargingPriority),
        ),
        // Negative amounts are credits and still count.
        _ if !item.total_price.is_zero() => (LineCategory::CostedPlain, None),
        _ => (LineCategory::ZeroAmountInfo, None),
    };

    let contributes = match category {
        LineCategory::CostedHighlighted => item.total_price > Decimal::ZERO,
        LineCategory::CostedPlain => true,
        _ => false,
    };

    ClassifiedLine {
        item,
        category,
        energy_kind,
        contributes,
    }
}

/// Classify all items, preserving order.
pub fn classify_items(items: &[InvoiceLineItem]) -> Vec<ClassifiedLine<'_>> {
    items.iter().map(classify).collect()
}

/// Sum of all contributing rows, rounded to 2 decimal places.
///
/// Saturates at the `Decimal` bounds instead of overflowing; use
/// [`checked_costed_total`] to detect that case.
pub fn costed_total(items: &[InvoiceLineItem]) -> Decimal {
    let sum = items
        .iter()
        .map(|i| classify(i).contribution())
        .fold(Decimal::ZERO, Decimal::saturating_add);
    round_currency(sum)
}

/// Like [`costed_total`], but `None` when the sum overflows `Decimal`.
pub fn checked_costed_total(items: &[InvoiceLineItem]) -> Option<Decimal> {
    items
        .iter()
        .map(|i| classify(i).contribution())
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .map(round_currency)
}

/// Round to currency precision (2 dp, commercial rounding).
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
