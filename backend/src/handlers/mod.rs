//! HTTP handlers

pub mod dashboard;
pub mod inventory;
pub mod records;
pub mod reports;

pub use dashboard::*;
pub use inventory::*;
pub use reports::*;
