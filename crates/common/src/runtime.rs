//! Service lifecycle: tracing setup and the serve loop shared by every
//! binary in the workspace.

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ServiceConfig;

/// Installs the global tracing subscriber. `RUST_LOG` wins over
/// `fallback_filter`.
pub fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Binds the configured address and serves `app` until the process is told
/// to stop, then drains in-flight requests.
pub async fn serve(service: &str, config: &ServiceConfig, app: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(service, addr = %config.bind_addr(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(stop_requested())
        .await?;
    tracing::info!(service, "stopped");
    Ok(())
}

/// Resolves once SIGINT (or, on unix, SIGTERM) arrives.
async fn stop_requested() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut term = signal(SignalKind::terminate()).expect("SIGTERM handler install");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => tracing::info!("SIGINT received, shutting down"),
            _ = term.recv() => tracing::info!("SIGTERM received, shutting down"),
        }
    }
    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("SIGINT received, shutting down");
        }
    }
}
