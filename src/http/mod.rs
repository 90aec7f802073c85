//! HTTP plumbing shared by all three services.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (assign x-request-id)
//!     → TraceLayer (request/response logging)
//!     → CatchPanicLayer (panic → 500)
//!     → service router (services/)
//!     → response.rs (AppError → 500)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, X_REQUEST_ID};
pub use response::AppError;
pub use server::HttpServer;
