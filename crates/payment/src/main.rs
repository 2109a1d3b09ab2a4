//! Payment service entry point.

use common::ServiceConfig;
use common::runtime::{init_tracing, serve};

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_filter());

    let app = payment::create_app(payment::WalletStore::new());

    serve("payment", &config, app)
        .await
        .expect("payment service failed");
}
