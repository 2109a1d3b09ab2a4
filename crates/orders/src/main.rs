//! Order service entry point.

use std::sync::Arc;

use clients::{CollaboratorConfig, HttpAnalyticsSink, HttpInventoryGateway, HttpProductCatalog};
use common::ServiceConfig;
use common::runtime::{init_tracing, serve};

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_filter());

    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let collaborators = CollaboratorConfig::from_env();
    let http = clients::http_client(collaborators.timeout).expect("failed to build HTTP client");

    let state = orders::AppState::new(
        Arc::new(HttpProductCatalog::new(
            collaborators.catalog_url,
            http.clone(),
        )),
        Arc::new(HttpInventoryGateway::new(
            collaborators.inventory_url,
            http.clone(),
        )),
        Arc::new(HttpAnalyticsSink::new(collaborators.analytics_url, http)),
    );

    let app = orders::create_app(state, metrics_handle);

    serve("orders", &config, app).await.expect("order service failed");
}
