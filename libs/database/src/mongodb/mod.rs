//! MongoDB connector for the order store.
//!
//! Handles connection setup (with optional retry) and health probing.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export driver types so consumers don't need a direct mongodb dependency
// just to hold a handle.
pub use mongodb::{Client, Collection, Database};
