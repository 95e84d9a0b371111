//! POST /interactive-chat — session-scoped conversational chat.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::debug;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::interactive_chat::interactive_chat_request::{
        InteractiveChatRequest, InteractiveChatResponse,
    },
};

/// Session id used when the caller does not supply one.
pub const DEFAULT_SESSION_ID: &str = "default-session";

/// Handler: POST /interactive-chat
///
/// Drives the per-session state machine: the first message of a session
/// becomes its base question and is explained standalone; later messages
/// are follow-ups answered against the recorded history.
///
/// The session's lock is held across the whole begin-turn / generate /
/// record-reply sequence so two concurrent turns on the same session cannot
/// interleave their history appends. If generation fails the user's turn
/// stays recorded and the error surfaces as 500 with the upstream text.
pub async fn interactive_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InteractiveChatRequest>,
) -> AppResult<Json<InteractiveChatResponse>> {
    let session_id = body
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());
    let message = body.message.unwrap_or_default();

    let session = state.sessions.session(&session_id).await;
    let mut session = session.lock().await;

    let prompt = session.begin_turn(&message);
    debug!(session = %session_id, prompt_len = prompt.len(), "conversation turn started");

    let reply = state.genai.generate(&prompt).await?;
    let reply = reply.trim().to_string();
    session.record_reply(&reply);

    Ok(Json(InteractiveChatResponse { response: reply }))
}
