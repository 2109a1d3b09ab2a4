//! Shared value types for the shopfloor services.
//!
//! Every service speaks in these types at its boundary: integer-keyed
//! product and user identifiers, UUID order identifiers, and integer-cents
//! money amounts.

pub mod config;
pub mod ids;
pub mod money;
pub mod runtime;

pub use config::ServiceConfig;
pub use ids::{OrderId, ProductId, UserId};
pub use money::Money;
