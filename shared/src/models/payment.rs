//! Payment models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{lenient_date, lenient_decimal, RecordRef};

/// Payment settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    /// Pending and overdue payments both count as money still owed
    pub fn is_outstanding(&self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Overdue)
    }
}

/// A customer payment tracked by the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub customer: Option<RecordRef>,
    #[serde(default, with = "lenient_decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default, with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
}

/// Payload for creating or fully updating a payment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPayment {
    pub customer: i64,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub amount: Decimal,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
