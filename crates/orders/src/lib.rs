//! Order service.
//!
//! Hosts the order-placement orchestrator: a single inbound request fans
//! out to the catalog (pricing), inventory (atomic deduction), and
//! analytics (best-effort notification) before the order is returned.
//! Collaborators are reached through the `clients` traits, so the whole
//! workflow runs against in-memory fakes in tests.

pub mod error;
pub mod model;
pub mod orchestrator;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use clients::{AnalyticsSink, InventoryGateway, ProductCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use model::{LineItem, Order, OrderStatus};
pub use orchestrator::{OrderError, OrderPlacement};
pub use store::OrderStore;

/// Shared state for the order handlers.
#[derive(Clone)]
pub struct AppState {
    pub placement: OrderPlacement,
}

impl AppState {
    /// Wires the workflow over the given collaborator clients and a fresh
    /// order store.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        inventory: Arc<dyn InventoryGateway>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            placement: OrderPlacement::new(catalog, inventory, analytics, OrderStore::new()),
        }
    }
}

/// Creates the order router with all routes and shared state.
pub fn create_app(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health))
        .route("/orders", post(routes::create))
        .route("/orders/{user_id}", get(routes::list_for_user))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
