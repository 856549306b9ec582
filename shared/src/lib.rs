//! Shared types and models for the Bazaar Management Platform
//!
//! This crate contains the record types mirrored from the upstream store
//! API, the pure reporting/stock pipeline, and validation helpers shared
//! between the backend and the WASM module.

pub mod models;
pub mod reporting;
pub mod stock;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
