//! POST /chat — intent-routed question lookup.
//!
//! The message goes through the NLU resolver. A `get_questions_by_intent`
//! match is answered from the question bank; any other intent echoes the
//! agent's own fulfillment text. This route always answers 200 with a
//! `fulfillmentText` body: it speaks the webhook-style fulfillment protocol,
//! so resolver failures surface as a fixed connection-error reply rather
//! than an HTTP error.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{info, warn};

use question_store::{FilterOutcome, format_questions, query::AppliedFilter};

use crate::{
    core::app_state::AppState,
    routes::chat::{
        chat_request::{ChatRequest, ChatResponse},
        intent_params::filter_query_from_params,
    },
};

/// Session id used when the caller does not supply one.
const DEFAULT_CHAT_SESSION: &str = "12345";
/// Intent that routes to the question bank.
const QUESTION_LOOKUP_INTENT: &str = "get_questions_by_intent";
/// Fixed reply when the resolver is missing or unreachable. No upstream
/// detail is leaked here.
const CONNECTION_ERROR: &str = "Connection Error.";

/// Handler: POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = body
        .session_id
        .unwrap_or_else(|| DEFAULT_CHAT_SESSION.to_string());

    let Some(message) = body
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
    else {
        return Json(ChatResponse::new("No message received."));
    };

    let Some(nlu) = state.nlu.as_ref() else {
        warn!("chat request received but no intent resolver is configured");
        return Json(ChatResponse::new(CONNECTION_ERROR));
    };

    let result = match nlu.detect_intent(message, &session_id).await {
        Ok(result) => result,
        Err(err) => {
            warn!(%err, "intent resolution failed");
            return Json(ChatResponse::new(CONNECTION_ERROR));
        }
    };

    if result.intent.eq_ignore_ascii_case(QUESTION_LOOKUP_INTENT) {
        let query = filter_query_from_params(&result.parameters);
        let text = match state.questions.filter(&query) {
            FilterOutcome::Matches(rows) => {
                info!(rows = rows.len(), "question lookup matched");
                format_questions(&rows)
            }
            FilterOutcome::NoMatch(filters) => no_match_message(&filters),
        };
        return Json(ChatResponse::new(text));
    }

    Json(ChatResponse::new(result.fulfillment_text))
}

/// Friendly "nothing found" reply, listing the filters that were applied.
fn no_match_message(filters: &[AppliedFilter]) -> String {
    let mut msg =
        "I couldn't find any questions matching those criteria. Try being less specific!"
            .to_string();
    if !filters.is_empty() {
        let list = filters
            .iter()
            .map(|f| format!("{}: {}", f.field, f.value))
            .collect::<Vec<_>>()
            .join(", ");
        msg.push_str(&format!(" (filters applied: {list})"));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_message_lists_applied_filters() {
        let filters = vec![
            AppliedFilter {
                field: "subject",
                value: "Math".into(),
            },
            AppliedFilter {
                field: "year",
                value: "1999".into(),
            },
        ];
        let msg = no_match_message(&filters);
        assert!(msg.contains("couldn't find any questions"));
        assert!(msg.contains("subject: Math, year: 1999"));
    }

    #[test]
    fn no_match_message_without_filters_has_no_filter_suffix() {
        let msg = no_match_message(&[]);
        assert!(!msg.contains("filters applied"));
    }
}
