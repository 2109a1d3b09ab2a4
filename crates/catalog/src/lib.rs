//! Product catalog service.
//!
//! Owns the product record store and exposes CRUD over it. Prices live here
//! and nowhere else; stock does not (inventory is the single source of
//! truth for stock levels).

pub mod error;
pub mod routes;
pub mod store;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub use store::{NewProduct, Product, ProductStore};

/// Creates the catalog router over the given store.
pub fn create_app(store: ProductStore) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/products", get(routes::list).post(routes::create))
        .route(
            "/products/{id}",
            get(routes::get_one)
                .put(routes::update)
                .delete(routes::delete),
        )
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}
