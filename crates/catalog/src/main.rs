//! Catalog service entry point.

use common::ServiceConfig;
use common::runtime::{init_tracing, serve};

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_filter());

    let store = catalog::ProductStore::new();
    store.seed_defaults().await;

    serve("catalog", &config, catalog::create_app(store))
        .await
        .expect("catalog service failed");
}
