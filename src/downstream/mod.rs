//! Outbound calls from the aggregator.
//!
//! # Data Flow
//! ```text
//! aggregator GET /
//!     → client.rs fetch_greeting (GET {greeting_url}/greet)
//!     → client.rs fetch_name     (GET {name_url}/name)
//!     → compose "{greeting} {name}"
//! ```
//!
//! The two calls are issued one after the other. Any failure aborts the
//! aggregate request; there is no partial result.

pub mod client;

pub use client::DownstreamClient;
