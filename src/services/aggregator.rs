//! Aggregator service: fans out to the greeting and name services.
//!
//! - `GET /`      → `{"message": "<greeting> <name>"}`
//! - `GET /other` → `{"message": "Other endpoint"}`
//! - `GET /fail`  → always 500

use axum::{extract::State, routing::get, Json, Router};

use crate::downstream::DownstreamClient;
use crate::http::AppError;
use crate::services::types::AggregateResponse;

/// State injected into aggregator handlers.
#[derive(Clone)]
pub struct AggregatorState {
    pub downstream: DownstreamClient,
}

impl AggregatorState {
    pub fn new(downstream: DownstreamClient) -> Self {
        Self { downstream }
    }
}

pub fn router(state: AggregatorState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/other", get(other))
        .route("/fail", get(fail))
        .with_state(state)
}

/// Call greeting then name, and join the results.
pub async fn home(
    State(state): State<AggregatorState>,
) -> Result<Json<AggregateResponse>, AppError> {
    tracing::debug!("Handling / request");

    let greeting = state.downstream.fetch_greeting().await?;
    let name = state.downstream.fetch_name().await?;

    Ok(Json(AggregateResponse::compose(&greeting.greeting, &name.name)))
}

pub async fn other() -> Json<AggregateResponse> {
    tracing::debug!("Handling /other request");
    Json(AggregateResponse {
        message: "Other endpoint".to_string(),
    })
}

pub async fn fail() -> Result<Json<AggregateResponse>, AppError> {
    tracing::debug!("Handling /fail request");
    Err(AppError::Deliberate("Oops!".to_string()))
}
