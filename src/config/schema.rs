//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML. Every field
//! has a default, so an empty file yields the fixed ports and addresses.

use serde::{Deserialize, Serialize};

/// Root configuration shared by all three services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Greeting service listener.
    pub greeting: ListenerConfig,

    /// Name service listener.
    pub name: ListenerConfig,

    /// Aggregator listener and downstream addresses.
    pub aggregator: AggregatorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting: ListenerConfig::on("127.0.0.1:5001"),
            name: ListenerConfig::on("127.0.0.1:5002"),
            aggregator: AggregatorConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration for a leaf service.
///
/// Has no `Default`: each section's address comes from `AppConfig::default`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:5001").
    pub bind_address: String,
}

impl ListenerConfig {
    pub fn on(bind_address: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
        }
    }
}

/// Aggregator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Bind address (e.g., "0.0.0.0:6000").
    pub bind_address: String,

    /// Base URL of the greeting service.
    pub greeting_url: String,

    /// Base URL of the name service.
    pub name_url: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:6000".to_string(),
            greeting_url: "http://localhost:5001".to_string(),
            name_url: "http://localhost:5002".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
        }
    }
}
