//! Generic CRUD service for store API records
//!
//! All six record types share one service; per-type behavior lives on the
//! [`ApiResource`] implementations.

use crate::error::AppResult;
use crate::external::{ApiResource, StoreApi};

/// CRUD operations over any store API resource
pub struct RecordService {
    api: StoreApi,
}

impl RecordService {
    pub fn new(api: StoreApi) -> Self {
        Self { api }
    }

    pub async fn list<R: ApiResource>(&self) -> AppResult<Vec<R>> {
        self.api.list::<R>().await
    }

    pub async fn get<R: ApiResource>(&self, id: i64) -> AppResult<R> {
        self.api.get::<R>(id).await
    }

    pub async fn create<R: ApiResource>(&self, payload: R::Payload) -> AppResult<R> {
        R::validate_payload(&payload)?;
        let record = self.api.create::<R>(&payload).await?;
        tracing::info!(resource = R::PATH, "created record");
        Ok(record)
    }

    pub async fn update<R: ApiResource>(&self, id: i64, payload: R::Payload) -> AppResult<R> {
        R::validate_payload(&payload)?;
        let record = self.api.update::<R>(id, &payload).await?;
        tracing::info!(resource = R::PATH, id, "updated record");
        Ok(record)
    }

    pub async fn delete<R: ApiResource>(&self, id: i64) -> AppResult<()> {
        self.api.delete::<R>(id).await?;
        tracing::info!(resource = R::PATH, id, "deleted record");
        Ok(())
    }
}
