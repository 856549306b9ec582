//! Customer models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{lenient_date, lenient_decimal};

/// A retail customer (shop) buying from the business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub shop_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub shop_type: Option<String>,
    #[serde(default, with = "lenient_decimal")]
    pub credit_limit: Decimal,
    #[serde(default, with = "lenient_decimal")]
    pub outstanding_amount: Decimal,
    #[serde(default)]
    pub total_purchases: i64,
    #[serde(default, with = "lenient_date")]
    pub last_purchase: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Payload for creating or fully updating a customer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "shop name is required"))]
    pub shop_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[validate(email(message = "invalid email address"))]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub shop_type: Option<String>,
    #[validate(custom = "crate::validation::non_negative_amount")]
    #[serde(default)]
    pub credit_limit: Decimal,
}
