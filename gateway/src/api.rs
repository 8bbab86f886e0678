use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prpilot_core::AgentResult;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

// Input: What the user sends us
#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    pub task: String, // What do they want done?
}

// Output: What we send back
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponse {
    pub result: AgentResult,
}

/// Any failure below the handler; surfaces as a plain 500.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Agent run failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("{:#}", self.0) })),
        )
            .into_response()
    }
}
