//! GET / — health and endpoint discovery.

use axum::Json;
use serde_json::{Value, json};

/// Handler: GET /
///
/// Returns the service status and a map of the available endpoints so a
/// fresh deployment can be probed with one request.
pub async fn home() -> Json<Value> {
    Json(json!({
        "status": "AI Prepzone backend is running",
        "endpoints": {
            "question_analysis": "/chat (POST)",
            "simple_ai_chat": "/api_chat (POST)",
            "interactive_session_chat": "/interactive-chat (POST)",
            "reset_session": "/reset-session (POST)",
            "quiz_generation": "/generate-questions (POST)"
        }
    }))
}
