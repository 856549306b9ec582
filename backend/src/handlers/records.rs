//! Generic CRUD handlers for store API records
//!
//! One set of handlers serves all six resources; routes pick the record
//! type with a turbofish, e.g. `get(records::list::<Product>)`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::external::ApiResource;
use crate::services::records::RecordService;
use crate::AppState;

/// List every record of a resource
pub async fn list<R: ApiResource>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let service = RecordService::new(state.store.clone());
    let records = service.list::<R>().await?;
    Ok(Json(records))
}

/// Fetch one record by id
pub async fn get_by_id<R: ApiResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<R>> {
    let service = RecordService::new(state.store.clone());
    let record = service.get::<R>(id).await?;
    Ok(Json(record))
}

/// Create a record
pub async fn create<R: ApiResource>(
    State(state): State<AppState>,
    Json(payload): Json<R::Payload>,
) -> AppResult<(StatusCode, Json<R>)> {
    let service = RecordService::new(state.store.clone());
    let record = service.create::<R>(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a record
pub async fn update<R: ApiResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<R::Payload>,
) -> AppResult<Json<R>> {
    let service = RecordService::new(state.store.clone());
    let record = service.update::<R>(id, payload).await?;
    Ok(Json(record))
}

/// Delete a record
pub async fn remove<R: ApiResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = RecordService::new(state.store.clone());
    service.delete::<R>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
