//! Greeting service: `GET /greet`.

use axum::{http::HeaderMap, routing::get, Json, Router};

use crate::http::request_id;
use crate::services::types::{pick, GreetingResponse, GREETINGS};

/// Routes served by the greeting service.
pub fn router() -> Router {
    Router::new().route("/greet", get(greet))
}

/// Return a random greeting.
pub async fn greet(headers: HeaderMap) -> Json<GreetingResponse> {
    tracing::debug!(request_id = %request_id(&headers), headers = ?headers, "Received headers");
    Json(GreetingResponse {
        greeting: pick(GREETINGS).to_string(),
    })
}
