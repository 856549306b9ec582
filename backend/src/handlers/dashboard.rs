//! HTTP handler for the dashboard overview

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::dashboard::{DashboardOverview, DashboardService};
use crate::AppState;

/// Aggregated overview for the landing dashboard
pub async fn get_overview(State(state): State<AppState>) -> AppResult<Json<DashboardOverview>> {
    let service = DashboardService::new(state.store.clone(), state.config.reporting.clone());
    let overview = service.overview().await?;
    Ok(Json(overview))
}
