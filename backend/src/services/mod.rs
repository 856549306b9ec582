//! Business logic services

pub mod dashboard;
pub mod inventory;
pub mod records;
pub mod reporting;
