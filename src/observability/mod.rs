//! Observability.
//!
//! Plain text logs to stdout through `tracing`. Request/response lines come
//! from `TraceLayer`; handlers log at DEBUG. There is no log schema.
//!
//! Distributed trace propagation between the services is not wired in.
//! `downstream::client` is where outgoing context headers would be injected.

pub mod logging;

pub use logging::init_logging;
