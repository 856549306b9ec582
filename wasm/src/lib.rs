//! WebAssembly module for the Bazaar Management Platform
//!
//! Runs the same reporting and stock pipeline as the backend in the
//! browser, so a dashboard can recompute from cached records while
//! offline. All inputs and outputs cross the boundary as JSON strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::models::{Product, Sale, WholesalePurchase};
use shared::reporting;
use shared::stock;
use shared::types::Period;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_period(period: &str) -> Result<Period, JsValue> {
    serde_json::from_value(serde_json::Value::String(period.to_string()))
        .map_err(|_| JsValue::from_str(&format!("Unknown period: {}", period)))
}

fn parse_date(date: &str) -> Result<NaiveDate, JsValue> {
    date.parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid date: {}", date)))
}

fn parse_rate(rate: &str) -> Result<Decimal, JsValue> {
    rate.parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid expense rate: {}", rate)))
}

/// Compute the profit summary for a period.
///
/// `today` anchors the period filter as "YYYY-MM-DD"; `expense_rate` is a
/// decimal string like "0.10".
#[wasm_bindgen]
pub fn profit_summary(
    sales_json: &str,
    purchases_json: &str,
    period: &str,
    expense_rate: &str,
    today: &str,
) -> Result<String, JsValue> {
    let sales: Vec<Sale> = parse_json(sales_json, "sales JSON")?;
    let purchases: Vec<WholesalePurchase> = parse_json(purchases_json, "purchases JSON")?;
    let summary = reporting::profit_summary(
        &sales,
        &purchases,
        parse_period(period)?,
        parse_rate(expense_rate)?,
        parse_date(today)?,
    );
    to_json(&summary)
}

/// Rank products by profit within a period
#[wasm_bindgen]
pub fn product_profitability(
    sales_json: &str,
    purchases_json: &str,
    products_json: &str,
    period: &str,
    today: &str,
    top_n: usize,
) -> Result<String, JsValue> {
    let sales: Vec<Sale> = parse_json(sales_json, "sales JSON")?;
    let purchases: Vec<WholesalePurchase> = parse_json(purchases_json, "purchases JSON")?;
    let products: Vec<Product> = parse_json(products_json, "products JSON")?;

    let period = parse_period(period)?;
    let today = parse_date(today)?;
    let filtered_sales = reporting::filter_by_period(&sales, period, today);
    let filtered_purchases = reporting::filter_by_period(&purchases, period, today);

    let ranked = reporting::product_profitability(
        &filtered_sales,
        &filtered_purchases,
        &products,
        top_n,
    );
    to_json(&ranked)
}

/// Bucket the full history into monthly profit trends
#[wasm_bindgen]
pub fn monthly_trends(
    sales_json: &str,
    purchases_json: &str,
    expense_rate: &str,
    keep: usize,
) -> Result<String, JsValue> {
    let sales: Vec<Sale> = parse_json(sales_json, "sales JSON")?;
    let purchases: Vec<WholesalePurchase> = parse_json(purchases_json, "purchases JSON")?;
    let trends =
        reporting::monthly_trends(&sales, &purchases, parse_rate(expense_rate)?, keep);
    to_json(&trends)
}

/// Derive the stock level of every product
#[wasm_bindgen]
pub fn stock_levels(
    products_json: &str,
    sales_json: &str,
    purchases_json: &str,
    threshold: i64,
) -> Result<String, JsValue> {
    let products: Vec<Product> = parse_json(products_json, "products JSON")?;
    let sales: Vec<Sale> = parse_json(sales_json, "sales JSON")?;
    let purchases: Vec<WholesalePurchase> = parse_json(purchases_json, "purchases JSON")?;
    to_json(&stock::stock_levels(&products, &sales, &purchases, threshold))
}

/// Products at or below the low-stock threshold
#[wasm_bindgen]
pub fn low_stock(
    products_json: &str,
    sales_json: &str,
    purchases_json: &str,
    threshold: i64,
) -> Result<String, JsValue> {
    let products: Vec<Product> = parse_json(products_json, "products JSON")?;
    let sales: Vec<Sale> = parse_json(sales_json, "sales JSON")?;
    let purchases: Vec<WholesalePurchase> = parse_json(purchases_json, "purchases JSON")?;
    to_json(&stock::low_stock(&products, &sales, &purchases, threshold))
}

/// Total wholesale value of registered stock, as a decimal string
#[wasm_bindgen]
pub fn total_stock_value(products_json: &str) -> Result<String, JsValue> {
    let products: Vec<Product> = parse_json(products_json, "products JSON")?;
    Ok(stock::total_stock_value(&products).to_string())
}

/// Revenue if every registered unit sold at retail price
#[wasm_bindgen]
pub fn potential_revenue(products_json: &str) -> Result<String, JsValue> {
    let products: Vec<Product> = parse_json(products_json, "products JSON")?;
    Ok(stock::potential_revenue(&products).to_string())
}
