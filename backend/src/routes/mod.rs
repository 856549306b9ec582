//! Route definitions for the Bazaar Management Platform

use axum::{
    routing::get,
    Router,
};

use shared::models::{Customer, Payment, Product, Sale, Vendor, WholesalePurchase};

use crate::external::ApiResource;
use crate::handlers::{self, records};
use crate::AppState;

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Record CRUD, proxied to the store API
        .nest("/customers", record_routes::<Customer>())
        .nest("/products", record_routes::<Product>())
        .nest("/vendors", record_routes::<Vendor>())
        .nest("/sales", record_routes::<Sale>())
        .nest("/purchases", record_routes::<WholesalePurchase>())
        .nest("/payments", record_routes::<Payment>())
        // Derived views
        .nest("/reports", report_routes())
        .nest("/inventory", inventory_routes())
        .route("/dashboard", get(handlers::get_overview))
}

/// Standard CRUD routes for one record type
fn record_routes<R: ApiResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list::<R>).post(records::create::<R>))
        .route(
            "/:id",
            get(records::get_by_id::<R>)
                .put(records::update::<R>)
                .delete(records::remove::<R>),
        )
}

/// Reporting routes
fn report_routes() -> Router<AppState> {
    Router::new().route("/profit-loss", get(handlers::profit_loss))
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/stock", get(handlers::get_stock_levels))
        .route("/low-stock", get(handlers::get_low_stock))
        .route("/summary", get(handlers::get_inventory_summary))
}
