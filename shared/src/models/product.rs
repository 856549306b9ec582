//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{lenient_decimal, lenient_quantity, RecordRef};

/// A catalog product.
///
/// `stock_quantity` is the initial stock recorded when the product was
/// created; the current level is derived by subtracting cumulative units
/// sold (see [`crate::stock`]) and is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "lenient_decimal")]
    pub retail_price: Decimal,
    #[serde(default, with = "lenient_decimal")]
    pub wholesale_cost: Decimal,
    #[serde(default, with = "lenient_quantity")]
    pub stock_quantity: i64,
    #[serde(default)]
    pub min_stock: Option<i64>,
    #[serde(default)]
    pub max_stock: Option<i64>,
    #[serde(default)]
    pub vendor: Option<RecordRef>,
}

/// Payload for creating or fully updating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub retail_price: Decimal,
    #[validate(custom = "crate::validation::non_negative_amount")]
    pub wholesale_cost: Decimal,
    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock_quantity: i64,
    #[serde(default)]
    pub min_stock: Option<i64>,
    #[serde(default)]
    pub max_stock: Option<i64>,
    #[serde(default)]
    pub vendor: Option<i64>,
}
