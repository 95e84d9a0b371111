//! POST /api_chat — one-off, stateless generative chat.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// Request body for POST /api_chat.
#[derive(Debug, Deserialize)]
pub struct ApiChatRequest {
    pub message: Option<String>,
}

/// Response body for POST /api_chat.
#[derive(Debug, Serialize)]
pub struct ApiChatResponse {
    pub response: String,
}

/// Handler: POST /api_chat
///
/// Sends the message to the generative model as-is, with no session state.
/// Generation failures surface as 500 with the upstream error text.
pub async fn api_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ApiChatRequest>,
) -> AppResult<Json<ApiChatResponse>> {
    let message = body
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(AppError::MissingField("message"))?;

    let reply = state.genai.generate(message).await?;

    Ok(Json(ApiChatResponse {
        response: reply.trim().to_string(),
    }))
}
