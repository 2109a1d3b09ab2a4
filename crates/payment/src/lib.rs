//! Payment service.
//!
//! Holds user wallets. Deliberately outside the order flow: orders never
//! debit a wallet in the current design.

pub mod error;
pub mod routes;
pub mod store;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use store::{WalletError, WalletStore};

/// Creates the payment router over the given store.
pub fn create_app(store: WalletStore) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/add_balance", post(routes::add_balance))
        .route("/get_balance/{user_id}", get(routes::get_balance))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}
