//! Dashboard overview service
//!
//! Aggregates all-time totals, today's sales, outstanding payments, the
//! best-selling products and the most recent invoices into one payload.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{Customer, Payment, Product, Sale, SaleStatus, WholesalePurchase};
use shared::stock;

use crate::config::ReportingConfig;
use crate::error::AppResult;
use crate::external::StoreApi;

/// Entries shown in the top-products and recent-sales panels
const PANEL_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct TopProduct {
    pub product_id: i64,
    pub name: String,
    pub units_sold: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentSale {
    /// Display invoice number, e.g. "INV-007"
    pub invoice_number: String,
    pub customer: String,
    pub amount: Decimal,
    pub status: SaleStatus,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub total_revenue: Decimal,
    /// All-time revenue minus all-time purchase cost
    pub total_profit: Decimal,
    pub today_sales: Decimal,
    pub today_sales_count: usize,
    pub pending_payments: Decimal,
    pub pending_payments_count: usize,
    pub customers_count: usize,
    pub low_stock_count: usize,
    pub top_products: Vec<TopProduct>,
    pub recent_sales: Vec<RecentSale>,
}

pub struct DashboardService {
    api: StoreApi,
    config: ReportingConfig,
}

impl DashboardService {
    pub fn new(api: StoreApi, config: ReportingConfig) -> Self {
        Self { api, config }
    }

    pub async fn overview(&self) -> AppResult<DashboardOverview> {
        let (sales, purchases, products, customers, payments) = tokio::try_join!(
            self.api.list::<Sale>(),
            self.api.list::<WholesalePurchase>(),
            self.api.list::<Product>(),
            self.api.list::<Customer>(),
            self.api.list::<Payment>(),
        )?;

        Ok(summarize(
            &sales,
            &purchases,
            &products,
            &customers,
            &payments,
            self.config.low_stock_threshold,
            Utc::now().date_naive(),
        ))
    }
}

/// Assemble the overview from already-fetched collections
fn summarize(
    sales: &[Sale],
    purchases: &[WholesalePurchase],
    products: &[Product],
    customers: &[Customer],
    payments: &[Payment],
    low_stock_threshold: i64,
    today: NaiveDate,
) -> DashboardOverview {
    let total_revenue: Decimal = sales.iter().map(|sale| sale.total_amount).sum();
    let total_cost: Decimal = purchases.iter().map(|purchase| purchase.total_cost()).sum();

    let todays: Vec<&Sale> = sales
        .iter()
        .filter(|sale| sale.record_date() == Some(today))
        .collect();
    let today_sales = todays.iter().map(|sale| sale.total_amount).sum();

    let outstanding: Vec<&Payment> = payments
        .iter()
        .filter(|payment| payment.status.is_outstanding())
        .collect();
    let pending_payments = outstanding.iter().map(|payment| payment.amount).sum();

    let low = stock::low_stock(products, sales, purchases, low_stock_threshold);

    DashboardOverview {
        total_revenue,
        total_profit: total_revenue - total_cost,
        today_sales,
        today_sales_count: todays.len(),
        pending_payments,
        pending_payments_count: outstanding.len(),
        customers_count: customers.len(),
        low_stock_count: low.len(),
        top_products: top_products(sales, products, PANEL_LIMIT),
        recent_sales: recent_sales(sales, PANEL_LIMIT),
    }
}

/// Rank products by total units sold across the whole history
fn top_products(sales: &[Sale], products: &[Product], limit: usize) -> Vec<TopProduct> {
    let mut totals: HashMap<i64, (i64, Decimal)> = HashMap::new();
    for sale in sales {
        for item in &sale.items {
            let entry = totals.entry(item.product.id()).or_default();
            entry.0 += item.quantity;
            entry.1 += item.line_total;
        }
    }

    let mut ranked: Vec<TopProduct> = totals
        .into_iter()
        .map(|(product_id, (units_sold, revenue))| TopProduct {
            product_id,
            name: products
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("Product {product_id}")),
            units_sold,
            revenue,
        })
        .collect();

    ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    ranked.truncate(limit);
    ranked
}

/// Most recent sales, newest first; undated sales sort last
fn recent_sales(sales: &[Sale], limit: usize) -> Vec<RecentSale> {
    let mut ordered: Vec<&Sale> = sales.iter().collect();
    ordered.sort_by(|a, b| {
        b.record_date()
            .cmp(&a.record_date())
            .then(b.id.cmp(&a.id))
    });

    ordered
        .into_iter()
        .take(limit)
        .map(|sale| RecentSale {
            invoice_number: format!("INV-{:03}", sale.id),
            customer: sale
                .customer
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Customer {}", sale.customer.id())),
            amount: sale.total_amount,
            status: sale.status,
            date: sale.record_date(),
        })
        .collect()
}
