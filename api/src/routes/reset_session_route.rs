//! POST /reset-session — clears one conversation session.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::app_state::AppState;
use crate::routes::interactive_chat::interactive_chat_route::DEFAULT_SESSION_ID;

/// Request body for POST /reset-session.
#[derive(Debug, Deserialize)]
pub struct ResetSessionRequest {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Response body for POST /reset-session.
#[derive(Debug, Serialize)]
pub struct ResetSessionResponse {
    pub message: String,
}

/// Handler: POST /reset-session
///
/// Removes the session if present. The confirmation is uniform whether or
/// not the id existed.
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResetSessionRequest>,
) -> Json<ResetSessionResponse> {
    let session_id = body
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

    state.sessions.reset(&session_id).await;

    Json(ResetSessionResponse {
        message: "Session cleared".to_string(),
    })
}
