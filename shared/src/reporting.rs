//! Pure reporting pipeline: period filtering, profit metrics, product
//! profitability ranking, and monthly trends.
//!
//! Every function here is a pure transformation over already-fetched
//! record collections. Nothing is cached between calls; the backend and
//! the WASM module both recompute from scratch on each request.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, Sale, WholesalePurchase};
use crate::types::Period;

/// Records that carry a business date usable for period filtering
pub trait Dated {
    fn record_date(&self) -> Option<NaiveDate>;
}

impl Dated for Sale {
    fn record_date(&self) -> Option<NaiveDate> {
        Sale::record_date(self)
    }
}

impl Dated for WholesalePurchase {
    fn record_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }
}

/// Aggregated profit metrics for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub total_revenue: Decimal,
    pub total_cost: Decimal,
    pub gross_profit: Decimal,
    pub expenses: Decimal,
    pub net_profit: Decimal,
    pub profit_margin: Decimal,
    pub profit_growth: Decimal,
}

/// Per-product profitability entry, ranked by profit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProfit {
    pub product_id: i64,
    pub product: String,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
    pub margin: Decimal,
    pub units_sold: i64,
}

/// Profit for one calendar-month bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Bucket label, e.g. "Aug 2026"
    pub month: String,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
    pub margin: Decimal,
    /// First day of the bucket month, used for ordering
    pub date: NaiveDate,
}

/// Select the records whose date falls inside `period`, evaluated against
/// `today`.
///
/// `Period::All` returns every record unfiltered, including ones without a
/// usable date. For any other period, records with a missing or
/// unparseable date are dropped with a warning.
pub fn filter_by_period<'a, T: Dated>(
    records: &'a [T],
    period: Period,
    today: NaiveDate,
) -> Vec<&'a T> {
    if period == Period::All {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| match record.record_date() {
            Some(date) => in_period(date, period, today),
            None => {
                tracing::warn!(
                    period = period.as_str(),
                    "dropping record with missing or invalid date"
                );
                false
            }
        })
        .collect()
}

fn in_period(date: NaiveDate, period: Period, today: NaiveDate) -> bool {
    match period {
        Period::All => true,
        Period::CurrentMonth => {
            date.year() == today.year() && date.month() == today.month()
        }
        Period::LastMonth => {
            let last = today.checked_sub_months(Months::new(1)).unwrap_or(today);
            date.year() == last.year() && date.month() == last.month()
        }
        // Quarter membership is month/3 equality within the current year
        // only; there is no cross-year quarter matching.
        Period::Quarter => {
            date.year() == today.year() && date.month0() / 3 == today.month0() / 3
        }
        Period::Year => date.year() == today.year(),
    }
}

/// Net-profit margin as a percentage; zero whenever there is no revenue,
/// so the result is never NaN or infinite.
pub fn margin_percent(profit: Decimal, revenue: Decimal) -> Decimal {
    if revenue > Decimal::ZERO {
        profit / revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Month-over-month growth percentage.
///
/// A move away from exactly zero previous profit counts as 100% growth
/// when the current period is in the black and 0% otherwise.
pub fn growth_percent(current: Decimal, previous: Decimal) -> Decimal {
    if previous != Decimal::ZERO {
        (current - previous) / previous.abs() * Decimal::ONE_HUNDRED
    } else if current > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Total revenue over a set of sales
pub fn revenue_of(sales: &[&Sale]) -> Decimal {
    sales.iter().map(|sale| sale.total_amount).sum()
}

/// Total purchase cost over a set of wholesale purchases
pub fn cost_of(purchases: &[&WholesalePurchase]) -> Decimal {
    purchases.iter().map(|purchase| purchase.total_cost()).sum()
}

/// Compute the profit summary for `period`, including growth against the
/// previous calendar month.
pub fn profit_summary(
    sales: &[Sale],
    purchases: &[WholesalePurchase],
    period: Period,
    expense_rate: Decimal,
    today: NaiveDate,
) -> ProfitSummary {
    let filtered_sales = filter_by_period(sales, period, today);
    let filtered_purchases = filter_by_period(purchases, period, today);

    let total_revenue = revenue_of(&filtered_sales);
    let total_cost = cost_of(&filtered_purchases);
    let expenses = total_revenue * expense_rate;
    let gross_profit = total_revenue - total_cost;
    let net_profit = gross_profit - expenses;
    let profit_margin = margin_percent(net_profit, total_revenue);

    // Growth always compares against the previous calendar month,
    // regardless of the selected period.
    let prev_sales = filter_by_period(sales, Period::LastMonth, today);
    let prev_purchases = filter_by_period(purchases, Period::LastMonth, today);
    let prev_revenue = revenue_of(&prev_sales);
    let prev_net = prev_revenue - cost_of(&prev_purchases) - prev_revenue * expense_rate;
    let profit_growth = growth_percent(net_profit, prev_net);

    ProfitSummary {
        total_revenue,
        total_cost,
        gross_profit,
        expenses,
        net_profit,
        profit_margin,
        profit_growth,
    }
}

/// Rank products by profit over the given (already period-filtered) sales
/// and purchases.
///
/// A product with purchases but no sales still appears with zero revenue,
/// and vice versa. Names are resolved from the product collection, with a
/// `Product {id}` placeholder when the catalog entry is gone.
pub fn product_profitability(
    sales: &[&Sale],
    purchases: &[&WholesalePurchase],
    products: &[Product],
    top_n: usize,
) -> Vec<ProductProfit> {
    #[derive(Default)]
    struct Stats {
        revenue: Decimal,
        cost: Decimal,
        units_sold: i64,
    }

    let mut stats: HashMap<i64, Stats> = HashMap::new();

    for sale in sales {
        for item in &sale.items {
            let entry = stats.entry(item.product.id()).or_default();
            entry.revenue += item.line_total;
            entry.units_sold += item.quantity;
        }
    }

    for purchase in purchases {
        let entry = stats.entry(purchase.product.id()).or_default();
        entry.cost += purchase.total_cost();
    }

    let mut ranked: Vec<ProductProfit> = stats
        .into_iter()
        .map(|(product_id, s)| {
            let profit = s.revenue - s.cost;
            let product = products
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("Product {product_id}"));
            ProductProfit {
                product_id,
                product,
                revenue: s.revenue,
                cost: s.cost,
                profit,
                margin: margin_percent(profit, s.revenue),
                units_sold: s.units_sold,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.profit.cmp(&a.profit));
    ranked.truncate(top_n);
    ranked
}

/// Bucket the full (unfiltered) sales and purchase history by calendar
/// month and keep the `keep` most recent buckets, newest first.
///
/// Revenue and cost accumulate independently, so a month with purchases
/// but no sales still gets a bucket. Records without a usable date are
/// skipped.
pub fn monthly_trends(
    sales: &[Sale],
    purchases: &[WholesalePurchase],
    expense_rate: Decimal,
    keep: usize,
) -> Vec<MonthlyTrend> {
    let mut buckets: HashMap<NaiveDate, (Decimal, Decimal)> = HashMap::new();

    for sale in sales {
        let Some(date) = sale.record_date() else {
            continue;
        };
        buckets.entry(month_bucket(date)).or_default().0 += sale.total_amount;
    }

    for purchase in purchases {
        let Some(date) = purchase.purchase_date else {
            continue;
        };
        buckets.entry(month_bucket(date)).or_default().1 += purchase.total_cost();
    }

    let mut trends: Vec<MonthlyTrend> = buckets
        .into_iter()
        .map(|(date, (revenue, cost))| {
            let expenses = revenue * expense_rate;
            let profit = revenue - cost - expenses;
            MonthlyTrend {
                month: date.format("%b %Y").to_string(),
                revenue,
                cost,
                profit,
                margin: margin_percent(profit, revenue),
                date,
            }
        })
        .collect();

    trends.sort_by(|a, b| b.date.cmp(&a.date));
    trends.truncate(keep);
    trends
}

fn month_bucket(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
