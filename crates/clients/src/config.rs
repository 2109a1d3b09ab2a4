//! Collaborator endpoints loaded from environment variables.

use std::time::Duration;

/// Base URLs and timeout for outbound calls.
///
/// Reads from environment variables, with the docker-compose service names
/// as defaults:
/// - `CATALOG_SERVICE_URL` (default `http://catalog-service:8000`)
/// - `INVENTORY_SERVICE_URL` (default `http://inventory-service:8000`)
/// - `ANALYTICS_SERVICE_URL` (default `http://analytics-service:8000`)
/// - `UPSTREAM_TIMEOUT_MS` (default `2000`)
#[derive(Debug, Clone)]
pub struct CollaboratorConfig {
    pub catalog_url: String,
    pub inventory_url: String,
    pub analytics_url: String,
    pub timeout: Duration,
}

impl CollaboratorConfig {
    /// Loads collaborator endpoints from the environment.
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };
        Self {
            catalog_url: var("CATALOG_SERVICE_URL", "http://catalog-service:8000"),
            inventory_url: var("INVENTORY_SERVICE_URL", "http://inventory-service:8000"),
            analytics_url: var("ANALYTICS_SERVICE_URL", "http://analytics-service:8000"),
            timeout: std::env::var("UPSTREAM_TIMEOUT_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(2000)),
        }
    }
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            catalog_url: "http://catalog-service:8000".to_string(),
            inventory_url: "http://inventory-service:8000".to_string(),
            analytics_url: "http://analytics-service:8000".to_string(),
            timeout: Duration::from_millis(2000),
        }
    }
}
