//! Name service: `GET /name`.

use axum::{http::HeaderMap, routing::get, Json, Router};

use crate::http::request_id;
use crate::services::types::{pick, NameResponse, NAMES};

pub fn router() -> Router {
    Router::new().route("/name", get(name))
}

pub async fn name(headers: HeaderMap) -> Json<NameResponse> {
    tracing::debug!(request_id = %request_id(&headers), headers = ?headers, "Received headers");
    Json(NameResponse {
        name: pick(NAMES).to_string(),
    })
}
