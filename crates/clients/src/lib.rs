//! Client contracts for cross-service calls.
//!
//! Each collaborator a service depends on is reached through a narrow trait
//! (`ProductCatalog`, `InventoryGateway`, `AnalyticsSink`) so orchestration
//! logic is testable against in-memory fakes without a network. The HTTP
//! implementations are thin reqwest wrappers with a bounded timeout on every
//! call.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;

use std::time::Duration;

pub use analytics::{AnalyticsSink, HttpAnalyticsSink, InMemoryAnalytics, OrderPlacedEvent, OrderPlacedItem};
pub use catalog::{HttpProductCatalog, InMemoryCatalog, ProductCatalog};
pub use config::CollaboratorConfig;
pub use error::ClientError;
pub use inventory::{DeductItem, HttpInventoryGateway, InMemoryInventory, InventoryGateway};

/// Builds a reqwest client with the given per-request timeout.
///
/// Every outbound call made through the HTTP implementations is bounded by
/// this timeout; exceeding it surfaces as [`ClientError::Transport`].
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
