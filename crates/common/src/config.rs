//! Runtime settings for a service binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// Every container listens on this port; compose maps them apart.
pub const DEFAULT_PORT: u16 = 8000;

/// What a service needs before it can take traffic: where to bind and how
/// verbose to log.
///
/// All services read the same variables:
/// - `HOST` — bind IP (default `0.0.0.0`)
/// - `PORT` — listen port (default `8000`)
/// - `RUST_LOG` — tracing filter directive (default `info`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    bind: SocketAddr,
    log_filter: String,
}

impl ServiceConfig {
    /// Reads the environment; unset or unparseable variables fall back to
    /// the defaults above.
    pub fn from_env() -> Self {
        Self {
            bind: SocketAddr::new(
                env_parsed("HOST").unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
                env_parsed("PORT").unwrap_or(DEFAULT_PORT),
            ),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// The address the service binds its listener to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// The tracing filter to use when `RUST_LOG` is unset at subscriber
    /// setup time.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            log_filter: "info".to_string(),
        }
    }
}

fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_the_shared_port() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.log_filter(), "info");
    }
}
