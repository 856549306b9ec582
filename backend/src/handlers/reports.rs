//! HTTP handlers for reporting endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use shared::types::Period;

use crate::error::AppResult;
use crate::services::reporting::{report_to_csv, ReportingService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub period: Period,
    pub format: Option<String>,
}

/// Profit and loss report, as JSON or as a CSV download
pub async fn profit_loss(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let service = ReportingService::new(state.store.clone(), state.config.reporting.clone());
    let report = service.profit_loss(query.period).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = report_to_csv(&report)?;
        let disposition = format!(
            "attachment; filename=\"profit-loss-{}.csv\"",
            report.period.as_str()
        );
        return Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response());
    }

    Ok(Json(report).into_response())
}
