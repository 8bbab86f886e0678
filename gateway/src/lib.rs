//! HTTP surface of the PR Pilot agent.

pub mod api;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::api::{AgentRequest, AgentResponse, ApiError};
use prpilot_core::{Dispatcher, Registry};

// Shared, read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<dyn Dispatcher>,
    pub registry: Arc<Registry>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/agent", post(run_agent))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// --- HANDLERS ---

async fn health_check() -> &'static str {
    "PR Pilot Gateway: Operational"
}

async fn run_agent(
    State(state): State<AppState>,
    Json(payload): Json<AgentRequest>,
) -> Result<Json<AgentResponse>, ApiError> {
    info!("Agent task received: {}", payload.task);

    let result = state
        .dispatcher
        .dispatch(&payload.task, &state.registry)
        .await?;

    info!("Agent answered: {}", result.output);
    Ok(Json(AgentResponse { result }))
}
