//! Profit and loss reporting service
//!
//! Fetches the full sales, purchase and product collections from the
//! store API and runs the pure pipeline in `shared::reporting` over them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shared::models::{Product, Sale, WholesalePurchase};
use shared::reporting::{self, MonthlyTrend, ProductProfit, ProfitSummary};
use shared::types::Period;

use crate::config::ReportingConfig;
use crate::error::{AppError, AppResult};
use crate::external::StoreApi;

/// Full profit and loss report for one period
#[derive(Debug, Clone, Serialize)]
pub struct ProfitLossReport {
    pub period: Period,
    pub summary: ProfitSummary,
    pub product_profitability: Vec<ProductProfit>,
    /// Always computed over the full history, regardless of `period`
    pub monthly_trends: Vec<MonthlyTrend>,
    pub generated_at: DateTime<Utc>,
}

pub struct ReportingService {
    api: StoreApi,
    config: ReportingConfig,
}

impl ReportingService {
    pub fn new(api: StoreApi, config: ReportingConfig) -> Self {
        Self { api, config }
    }

    /// Build the profit and loss report for `period`
    pub async fn profit_loss(&self, period: Period) -> AppResult<ProfitLossReport> {
        let (sales, purchases, products) = tokio::try_join!(
            self.api.list::<Sale>(),
            self.api.list::<WholesalePurchase>(),
            self.api.list::<Product>(),
        )?;

        let generated_at = Utc::now();
        let today = generated_at.date_naive();
        tracing::debug!(
            period = period.as_str(),
            sales = sales.len(),
            purchases = purchases.len(),
            "computing profit and loss report"
        );

        let summary = reporting::profit_summary(
            &sales,
            &purchases,
            period,
            self.config.expense_rate,
            today,
        );

        let filtered_sales = reporting::filter_by_period(&sales, period, today);
        let filtered_purchases = reporting::filter_by_period(&purchases, period, today);
        let product_profitability = reporting::product_profitability(
            &filtered_sales,
            &filtered_purchases,
            &products,
            self.config.top_products,
        );

        let monthly_trends = reporting::monthly_trends(
            &sales,
            &purchases,
            self.config.expense_rate,
            self.config.trend_months,
        );

        Ok(ProfitLossReport {
            period,
            summary,
            product_profitability,
            monthly_trends,
            generated_at,
        })
    }
}

fn write(writer: &mut csv::Writer<Vec<u8>>, row: &[&str]) -> AppResult<()> {
    writer
        .write_record(row)
        .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))
}

/// Render a report as CSV for download
pub fn report_to_csv(report: &ProfitLossReport) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    write(&mut writer, &["Profit & Loss Report", report.period.as_str()])?;
    write(&mut writer, &[])?;

    let s = &report.summary;
    write(&mut writer, &["Metric", "Value"])?;
    write(&mut writer, &["Total Revenue", &s.total_revenue.to_string()])?;
    write(&mut writer, &["Total Cost", &s.total_cost.to_string()])?;
    write(&mut writer, &["Gross Profit", &s.gross_profit.to_string()])?;
    write(&mut writer, &["Expenses", &s.expenses.to_string()])?;
    write(&mut writer, &["Net Profit", &s.net_profit.to_string()])?;
    write(&mut writer, &["Profit Margin %", &s.profit_margin.to_string()])?;
    write(&mut writer, &["Profit Growth %", &s.profit_growth.to_string()])?;
    write(&mut writer, &[])?;

    write(
        &mut writer,
        &["Product", "Revenue", "Cost", "Profit", "Margin %", "Units Sold"],
    )?;
    for product in &report.product_profitability {
        write(
            &mut writer,
            &[
                &product.product,
                &product.revenue.to_string(),
                &product.cost.to_string(),
                &product.profit.to_string(),
                &product.margin.to_string(),
                &product.units_sold.to_string(),
            ],
        )?;
    }
    write(&mut writer, &[])?;

    write(&mut writer, &["Month", "Revenue", "Cost", "Profit", "Margin %"])?;
    for trend in &report.monthly_trends {
        write(
            &mut writer,
            &[
                &trend.month,
                &trend.revenue.to_string(),
                &trend.cost.to_string(),
                &trend.profit.to_string(),
                &trend.margin.to_string(),
            ],
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV encoding: {}", e)))
}
