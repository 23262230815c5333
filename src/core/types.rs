use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A generated energy invoice for one user of one building.
///
/// Produced once by the billing engine and treated as read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Internal identifier.
    pub id: String,
    /// Human-facing invoice number (e.g. "2024-001").
    pub number: String,
    /// Building the invoice was generated for.
    pub building_ref: String,
    /// Billed user. `None` when the user could not be resolved.
    pub debtor: Option<Debtor>,
    /// Billing period.
    pub period: Period,
    /// Currency code (ISO 4217, e.g. "CHF").
    pub currency_code: String,
    /// Stored total, authoritative for the payment part.
    pub total_amount: Decimal,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Line items in display order.
    pub items: Vec<InvoiceLineItem>,
}

/// Billing period (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Issued,
    Paid,
    Archived,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Issued => "issued",
            Self::Paid => "paid",
            Self::Archived => "archived",
        }
    }
}

/// A single invoice row as emitted by the billing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Display text.
    pub description: String,
    /// Type tag that drives classification.
    pub item_type: LineItemType,
    /// Row total, may be zero.
    pub total_price: Decimal,
}

/// Line item type tags.
///
/// Unknown tags are kept verbatim in [`LineItemType::Other`] so newer
/// billing engines can add types without breaking older readers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LineItemType {
    /// `meter_info`: section label for a meter block.
    MeterInfo,
    /// `charging_header`: section label for an EV-charging block.
    ChargingHeader,
    MeterReadingFrom,
    MeterReadingTo,
    TotalConsumption,
    ChargingSessionFrom,
    ChargingSessionTo,
    TotalCharged,
    /// `separator`: blank spacer row.
    Separator,
    /// `solar_power`: locally produced energy.
    SolarPower,
    /// `normal_power`: grid energy.
    NormalPower,
    CarChargingNormal,
    CarChargingPriority,
    /// `custom_item`: operator-defined line item.
    CustomItem,
    /// `shared_meter`: share of a common meter (stairwell, heat pump, ...).
    SharedMeter,
    /// `base_fee`: fixed periodic fee.
    BaseFee,
    /// Any tag not known to this version.
    Other(String),
}

impl LineItemType {
    /// Parse a type tag. Never fails; unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "meter_info" => Self::MeterInfo,
            "charging_header" => Self::ChargingHeader,
            "meter_reading_from" => Self::MeterReadingFrom,
            "meter_reading_to" => Self::MeterReadingTo,
            "total_consumption" => Self::TotalConsumption,
            "charging_session_from" => Self::ChargingSessionFrom,
            "charging_session_to" => Self::ChargingSessionTo,
            "total_charged" => Self::TotalCharged,
            "separator" => Self::Separator,
            "solar_power" => Self::SolarPower,
            "normal_power" => Self::NormalPower,
            "car_charging_normal" => Self::CarChargingNormal,
            "car_charging_priority" => Self::CarChargingPriority,
            "custom_item" => Self::CustomItem,
            "shared_meter" => Self::SharedMeter,
            "base_fee" => Self::BaseFee,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MeterInfo => "meter_info",
            Self::ChargingHeader => "charging_header",
            Self::MeterReadingFrom => "meter_reading_from",
            Self::MeterReadingTo => "meter_reading_to",
            Self::TotalConsumption => "total_consumption",
            Self::ChargingSessionFrom => "charging_session_from",
            Self::ChargingSessionTo => "charging_session_to",
            Self::TotalCharged => "total_charged",
            Self::Separator => "separator",
            Self::SolarPower => "solar_power",
            Self::NormalPower => "normal_power",
            Self::CarChargingNormal => "car_charging_normal",
            Self::CarChargingPriority => "car_charging_priority",
            Self::CustomItem => "custom_item",
            Self::SharedMeter => "shared_meter",
            Self::BaseFee => "base_fee",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for LineItemType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<LineItemType> for String {
    fn from(ty: LineItemType) -> Self {
        ty.as_str().to_string()
    }
}

impl std::fmt::Display for LineItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The billed building user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debtor {
    pub first_name: String,
    pub last_name: String,
    /// Street and house number on one line (e.g. "Seestrasse 5").
    pub address_line: String,
    pub postal_code: String,
    pub city: String,
    /// Country code (ISO 3166-1 alpha-2).
    pub country_code: String,
    pub email: Option<String>,
}

impl Debtor {
    /// "{first} {last}", without stray spaces when a part is missing.
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Invoice sender (creditor address), entered per operator session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    /// Street and house number on one line.
    pub address: String,
    pub zip: String,
    pub city: String,
    /// Free-text country name (e.g. "Schweiz") or ISO code.
    pub country: String,
}

impl Sender {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        zip: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            zip: zip.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

/// Creditor bank account. An empty record means "no payment part".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Banking {
    pub bank_name: String,
    /// IBAN as typed by the operator (arbitrary spacing and case).
    pub iban: String,
    pub account_holder: String,
}

impl Banking {
    pub fn new(
        bank_name: impl Into<String>,
        iban: impl Into<String>,
        account_holder: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: bank_name.into(),
            iban: iban.into(),
            account_holder: account_holder.into(),
        }
    }

    /// True when both IBAN and account holder are filled in.
    pub fn is_complete(&self) -> bool {
        !self.iban.trim().is_empty() && !self.account_holder.trim().is_empty()
    }
}
