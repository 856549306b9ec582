//! Inventory derivation service
//!
//! Stock positions are computed on demand from the product catalog and
//! the sales history; the store API never stores a running balance.

use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{Product, Sale, WholesalePurchase};
use shared::stock::{self, StockLevel};

use crate::config::ReportingConfig;
use crate::error::AppResult;
use crate::external::StoreApi;

/// Valuation of the whole inventory
#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_stock_value: Decimal,
    pub potential_revenue: Decimal,
    pub low_stock_count: usize,
}

pub struct InventoryService {
    api: StoreApi,
    config: ReportingConfig,
}

impl InventoryService {
    pub fn new(api: StoreApi, config: ReportingConfig) -> Self {
        Self { api, config }
    }

    async fn fetch(&self) -> AppResult<(Vec<Product>, Vec<Sale>, Vec<WholesalePurchase>)> {
        let (products, sales, purchases) = tokio::try_join!(
            self.api.list::<Product>(),
            self.api.list::<Sale>(),
            self.api.list::<WholesalePurchase>(),
        )?;
        Ok((products, sales, purchases))
    }

    /// Stock level of every product
    pub async fn stock_levels(&self) -> AppResult<Vec<StockLevel>> {
        let (products, sales, purchases) = self.fetch().await?;
        Ok(stock::stock_levels(
            &products,
            &sales,
            &purchases,
            self.config.low_stock_threshold,
        ))
    }

    /// Products at or below the low-stock threshold
    pub async fn low_stock(&self) -> AppResult<Vec<StockLevel>> {
        let (products, sales, purchases) = self.fetch().await?;
        Ok(stock::low_stock(
            &products,
            &sales,
            &purchases,
            self.config.low_stock_threshold,
        ))
    }

    /// Inventory valuation summary
    pub async fn summary(&self) -> AppResult<InventorySummary> {
        let (products, sales, purchases) = self.fetch().await?;
        let low = stock::low_stock(&products, &sales, &purchases, self.config.low_stock_threshold);

        Ok(InventorySummary {
            total_products: products.len(),
            total_stock_value: stock::total_stock_value(&products),
            potential_revenue: stock::potential_revenue(&products),
            low_stock_count: low.len(),
        })
    }
}
