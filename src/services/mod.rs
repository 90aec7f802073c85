//! The three services.
//!
//! # Topology
//! ```text
//!                    ┌────────────────────┐  GET /greet  ┌──────────────────┐
//!   client ──GET /──▶│ aggregator (:6000) │─────────────▶│ greeting (:5001) │
//!                    │                    │  GET /name   ├──────────────────┤
//!                    │                    │─────────────▶│ name     (:5002) │
//!                    └────────────────────┘              └──────────────────┘
//! ```
//!
//! Each service exposes a `router` function; `HttpServer` adds the shared
//! middleware. Handlers keep no state between requests.

pub mod aggregator;
pub mod greeting;
pub mod name;
pub mod types;

use std::fmt;

use crate::config::AppConfig;
use crate::downstream::DownstreamClient;
use crate::http::HttpServer;

pub use aggregator::AggregatorState;
pub use types::{AggregateResponse, GreetingResponse, NameResponse, GREETINGS, NAMES};

/// Which service a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ServiceKind {
    Greeting,
    Name,
    Aggregator,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Greeting => "greeting",
            ServiceKind::Name => "name",
            ServiceKind::Aggregator => "aggregator",
        }
    }

    /// Configured listen address for this service.
    pub fn bind_address<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            ServiceKind::Greeting => &config.greeting.bind_address,
            ServiceKind::Name => &config.name.bind_address,
            ServiceKind::Aggregator => &config.aggregator.bind_address,
        }
    }

    /// Build the server for this service.
    pub fn build_server(&self, config: &AppConfig) -> Result<HttpServer, url::ParseError> {
        let routes = match self {
            ServiceKind::Greeting => greeting::router(),
            ServiceKind::Name => name::router(),
            ServiceKind::Aggregator => {
                let downstream = DownstreamClient::from_config(&config.aggregator)?;
                aggregator::router(AggregatorState::new(downstream))
            }
        };
        Ok(HttpServer::new(self.as_str(), routes))
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
