//! Inventory service.
//!
//! The only writer of stock levels. Deduction is a single atomic
//! check-and-decrement over the whole batch; there is no separate
//! validate endpoint for callers to race against.

pub mod error;
pub mod routes;
pub mod store;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use store::{DeductItem, StockError, StockStore};

/// Creates the inventory router over the given store.
pub fn create_app(store: StockStore) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/inventory/deduct", post(routes::deduct))
        .route(
            "/inventory/{product_id}",
            get(routes::get_stock).put(routes::set_stock),
        )
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}
