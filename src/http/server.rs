//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap a service router with the shared middleware stack
//! - Bind the server to a listener
//! - Stop accepting on shutdown
//!
//! Each service builds its own `Router`; nothing is registered globally.

use std::any::Any;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response::internal_error;

/// An HTTP server for one service.
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// Create a server for `name` serving `routes`.
    pub fn new(name: &'static str, routes: Router) -> Self {
        let router = Self::build_router(routes);
        Self { name, router }
    }

    /// Apply middleware. Outermost first: request ID, trace, panic guard.
    fn build_router(routes: Router) -> Router {
        routes
            .layer(CatchPanicLayer::custom(|_panic: Box<dyn Any + Send + 'static>| {
                tracing::error!("Handler panicked");
                internal_error()
            }))
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// Service name, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(service = self.name, address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(service = self.name, "HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn panic_becomes_500() {
        let server = HttpServer::new("test", Router::new().route("/boom", get(boom)));
        let response = server
            .router()
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn response_carries_request_id() {
        let server = HttpServer::new("test", Router::new().route("/", get(|| async { "ok" })));
        let response = server
            .router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn incoming_request_id_is_kept() {
        let server = HttpServer::new("test", Router::new().route("/", get(|| async { "ok" })));
        let response = server
            .router()
            .oneshot(
                Request::get("/")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
    }
}
