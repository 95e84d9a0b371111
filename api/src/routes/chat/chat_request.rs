use serde::{Deserialize, Serialize};

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Response body for POST /chat (webhook-style fulfillment contract).
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "fulfillmentText")]
    pub fulfillment_text: String,
}

impl ChatResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }
}
