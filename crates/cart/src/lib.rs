//! Shopping cart service.
//!
//! Cart rows are keyed by (user, product) with merge-on-add semantics.
//! Products are validated against the catalog through the `ProductCatalog`
//! contract before a row is created.

pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use clients::ProductCatalog;
use tower_http::trace::TraceLayer;

pub use store::{CartItem, CartStore};

/// Shared state for the cart handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: CartStore,
    pub catalog: Arc<dyn ProductCatalog>,
}

/// Creates the cart router over the given store and catalog client.
pub fn create_app(store: CartStore, catalog: Arc<dyn ProductCatalog>) -> Router {
    let state = AppState { store, catalog };
    Router::new()
        .route("/health", get(routes::health))
        .route("/cart/add", post(routes::add))
        .route("/cart/{user_id}", get(routes::list).delete(routes::clear))
        .route(
            "/cart/{user_id}/item/{product_id}",
            delete(routes::remove_item),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
