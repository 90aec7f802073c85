//! Fan-out demo services.
//!
//! Three small HTTP services: a greeting service, a name service, and an
//! aggregator that calls both and returns `"{greeting} {name}"`.

pub mod config;
pub mod downstream;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod services;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use services::ServiceKind;
