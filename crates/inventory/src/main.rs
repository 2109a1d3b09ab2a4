//! Inventory service entry point.

use common::ServiceConfig;
use common::runtime::{init_tracing, serve};

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_filter());

    let store = inventory::StockStore::new();
    store.seed_defaults().await;

    serve("inventory", &config, inventory::create_app(store))
        .await
        .expect("inventory service failed");
}
