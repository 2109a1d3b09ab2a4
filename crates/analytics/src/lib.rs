//! Analytics service.
//!
//! Ingests fire-and-forget events and computes an order summary on demand.
//! Ingestion is append-only; nothing here is ever updated or deleted.

pub mod routes;
pub mod store;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use store::{AnalyticsEvent, EventLog, ORDER_PLACED, Summary};

/// Creates the analytics router over the given event log.
pub fn create_app(log: EventLog) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/analytics/event", post(routes::ingest))
        .route("/analytics/summary", get(routes::summary))
        .with_state(log)
        .layer(TraceLayer::new_for_http())
}
