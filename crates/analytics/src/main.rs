//! Analytics service entry point.

use common::ServiceConfig;
use common::runtime::{init_tracing, serve};

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_filter());

    let app = analytics::create_app(analytics::EventLog::new());

    serve("analytics", &config, app)
        .await
        .expect("analytics service failed");
}
