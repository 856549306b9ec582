//! Wholesale purchase models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{lenient_date, lenient_decimal, lenient_quantity, RecordRef};

/// A wholesale stock purchase from a vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WholesalePurchase {
    pub id: i64,
    pub product: RecordRef,
    pub vendor: RecordRef,
    #[serde(default, with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(default, with = "lenient_decimal")]
    pub cost_per_unit: Decimal,
    #[serde(default, with = "lenient_date")]
    pub purchase_date: Option<NaiveDate>,
}

impl WholesalePurchase {
    /// Total cost of the purchase
    pub fn total_cost(&self) -> Decimal {
        self.cost_per_unit * Decimal::from(self.quantity)
    }
}

/// Payload for creating or fully updating a wholesale purchase
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPurchase {
    pub product: i64,
    pub vendor: i64,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i64,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub cost_per_unit: Decimal,
    pub purchase_date: NaiveDate,
}
