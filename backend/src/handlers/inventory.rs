//! HTTP handlers for inventory endpoints

use axum::{extract::State, Json};

use shared::stock::StockLevel;

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, InventorySummary};
use crate::AppState;

/// Derived stock level for every product
pub async fn get_stock_levels(State(state): State<AppState>) -> AppResult<Json<Vec<StockLevel>>> {
    let service = InventoryService::new(state.store.clone(), state.config.reporting.clone());
    let levels = service.stock_levels().await?;
    Ok(Json(levels))
}

/// Products at or below the low-stock threshold
pub async fn get_low_stock(State(state): State<AppState>) -> AppResult<Json<Vec<StockLevel>>> {
    let service = InventoryService::new(state.store.clone(), state.config.reporting.clone());
    let levels = service.low_stock().await?;
    Ok(Json(levels))
}

/// Inventory valuation summary
pub async fn get_inventory_summary(
    State(state): State<AppState>,
) -> AppResult<Json<InventorySummary>> {
    let service = InventoryService::new(state.store.clone(), state.config.reporting.clone());
    let summary = service.summary().await?;
    Ok(Json(summary))
}
