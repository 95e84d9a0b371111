use serde::{Deserialize, Serialize};

/// Request body for POST /interactive-chat.
#[derive(Debug, Deserialize)]
pub struct InteractiveChatRequest {
    pub message: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Response body for POST /interactive-chat.
#[derive(Debug, Serialize)]
pub struct InteractiveChatResponse {
    pub response: String,
}
