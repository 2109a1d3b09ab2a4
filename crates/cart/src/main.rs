//! Cart service entry point.

use std::sync::Arc;

use clients::{CollaboratorConfig, HttpProductCatalog};
use common::ServiceConfig;
use common::runtime::{init_tracing, serve};

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_filter());

    let collaborators = CollaboratorConfig::from_env();
    let http = clients::http_client(collaborators.timeout).expect("failed to build HTTP client");
    let catalog = Arc::new(HttpProductCatalog::new(collaborators.catalog_url, http));

    let app = cart::create_app(cart::CartStore::new(), catalog);

    serve("cart", &config, app).await.expect("cart service failed");
}
