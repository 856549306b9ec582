//! Vendor models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{lenient_date, lenient_decimal};

/// A wholesale supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Comma-separated list as sent by the upstream, e.g. "Tea, Coffee"
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default, with = "lenient_decimal")]
    pub rating: Decimal,
    #[serde(default)]
    pub total_purchases: i64,
    #[serde(default, with = "lenient_date")]
    pub last_purchase: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Payload for creating or fully updating a vendor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewVendor {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
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
    pub specialties: Option<String>,
}
