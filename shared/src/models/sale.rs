//! Sales models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{lenient_date, lenient_decimal, lenient_quantity, RecordRef};

/// Sale lifecycle status as reported by the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    #[default]
    Pending,
    Completed,
    Cancel,
    Paid,
    Overdue,
    #[serde(other)]
    Other,
}

/// One product/quantity/price entry within a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    pub product: RecordRef,
    #[serde(default, with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(default, with = "lenient_decimal")]
    pub unit_price: Decimal,
    #[serde(default, with = "lenient_decimal")]
    pub line_total: Decimal,
}

/// A recorded sale.
///
/// The upstream has never settled on one date field name; `sale_date` is
/// the canonical one here and `invoice_date`/`date` are accepted as
/// aliases, with the `created_at` timestamp as a last-resort fallback in
/// [`Sale::record_date`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(
        default,
        alias = "invoice_date",
        alias = "date",
        with = "lenient_date"
    )]
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    pub customer: RecordRef,
    #[serde(default)]
    pub status: SaleStatus,
    #[serde(default, with = "lenient_decimal")]
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl Sale {
    /// Date used for period filtering and trend bucketing
    pub fn record_date(&self) -> Option<NaiveDate> {
        self.sale_date
            .or_else(|| self.created_at.map(|ts| ts.date_naive()))
    }
}

/// Line item within a sale creation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSaleItem {
    pub product: i64,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i64,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub unit_price: Decimal,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub line_total: Decimal,
}

/// Payload for creating or fully updating a sale
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSale {
    pub customer: i64,
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: SaleStatus,
    #[serde(default)]
    pub is_paid: bool,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub total_amount: Decimal,
    #[validate]
    pub items: Vec<NewSaleItem>,
}
