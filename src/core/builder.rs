use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::classify::costed_total;
use super::error::InvoiceError;
use super::types::*;
use super::validation;

/// Builder for constructing invoices as the billing engine emits them.
///
/// ```
/// use zahlteil::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new(
///         "2024-001",
///         "building-7",
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
///     )
///     .currency("CHF")
///     .add_item(LineItemBuilder::new("Netzstrom", LineItemType::NormalPower, dec!(42.10)).build())
///     .build()
///     .unwrap();
/// assert_eq!(invoice.total_amount, dec!(42.10));
/// ```
pub struct InvoiceBuilder {
    id: Option<String>,
    number: String,
    building_ref: String,
    debtor: Option<Debtor>,
    period: Period,
    currency_code: String,
    total_amount: Option<Decimal>,
    status: InvoiceStatus,
    items: Vec<InvoiceLineItem>,
}

impl InvoiceBuilder {
    pub fn new(
        number: impl Into<String>,
        building_ref: impl Into<String>,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            number: number.into(),
            building_ref: building_ref.into(),
            debtor: None,
            period: Period {
                start: period_start,
                end: period_end,
            },
            currency_code: "CHF".to_string(),
            total_amount: None,
            status: InvoiceStatus::Draft,
            items: Vec::new(),
        }
    }

    /// Internal identifier. Defaults to the invoice number.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn debtor(mut self, debtor: Debtor) -> Self {
        self.debtor = Some(debtor);
        self
    }

    pub fn add_item(mut self, item: InvoiceLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Stored total. When unset, the sum of billed line items is used.
    pub fn total_amount(mut self, amount: Decimal) -> Self {
        self.total_amount = Some(amount);
        self
    }

    /// Build the invoice and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        if self.items.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.chars().count() > 200 {
            return Err(InvoiceError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        let invoice = self.assemble();

        let errors = validation::validate_invoice(&invoice);
        if let Some(e) = errors.iter().find(|e| e.rule.as_deref() == Some("TOTAL-01")) {
            return Err(InvoiceError::Arithmetic(e.to_string()));
        }
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(InvoiceError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation, for importing invoices from the billing
    /// engine exactly as stored, including inconsistent totals.
    pub fn build_unchecked(self) -> Invoice {
        self.assemble()
    }

    fn assemble(self) -> Invoice {
        let total_amount = self
            .total_amount
            .unwrap_or_else(|| costed_total(&self.items));

        Invoice {
            id: self.id.unwrap_or_else(|| self.number.clone()),
            number: self.number,
            building_ref: self.building_ref,
            debtor: self.debtor,
            period: self.period,
            currency_code: self.currency_code,
            total_amount,
            status: self.status,
            items: self.items,
        }
    }
}

/// Builder for the billed user.
pub struct DebtorBuilder {
    first_name: String,
    last_name: String,
    address_line: String,
    postal_code: String,
    city: String,
    country_code: String,
    email: Option<String>,
}

impl DebtorBuilder {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address_line: String::new(),
            postal_code: String::new(),
            city: String::new(),
            country_code: "CH".to_string(),
            email: None,
        }
    }

    pub fn address(
        mut self,
        address_line: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        self.address_line = address_line.into();
        self.postal_code = postal_code.into();
        self.city = city.into();
        self.country_code = country_code.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Debtor {
        Debtor {
            first_name: self.first_name,
            last_name: self.last_name,
            address_line: self.address_line,
            postal_code: self.postal_code,
            city: self.city,
            country_code: self.country_code,
            email: self.email,
        }
    }
}

/// Builder for InvoiceLineItem.
pub struct LineItemBuilder {
    description: String,
    item_type: LineItemType,
    total_price: Decimal,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, item_type: LineItemType, total_price: Decimal) -> Self {
        Self {
            description: description.into(),
            item_type,
            total_price,
        }
    }

    /// Row without an amount (headers, readings, separators).
    pub fn info(description: impl Into<String>, item_type: LineItemType) -> Self {
        Self::new(description, item_type, Decimal::ZERO)
    }

    pub fn build(self) -> InvoiceLineItem {
        InvoiceLineItem {
            description: self.description,
            item_type: self.item_type,
            total_price: self.total_price,
        }
    }
}
