//! Clients for external services

pub mod store_api;

pub use store_api::{ApiResource, StoreApi};
