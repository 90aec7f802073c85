//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Bind addresses must be socket addresses
//! - Downstream URLs must be absolute http(s) URLs
//!
//! All errors are collected, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid bind address {value:?}")]
    BindAddress { field: &'static str, value: String },

    #[error("{field}: invalid URL {value:?}")]
    Url { field: &'static str, value: String },

    #[error("observability.log_level: unknown level {0:?}")]
    LogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("greeting.bind_address", &config.greeting.bind_address),
        ("name.bind_address", &config.name.bind_address),
        ("aggregator.bind_address", &config.aggregator.bind_address),
    ] {
        if value.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::BindAddress {
                field,
                value: value.clone(),
            });
        }
    }

    for (field, value) in [
        ("aggregator.greeting_url", &config.aggregator.greeting_url),
        ("aggregator.name_url", &config.aggregator.name_url),
    ] {
        if !is_http_url(value) {
            errors.push(ValidationError::Url {
                field,
                value: value.clone(),
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}
