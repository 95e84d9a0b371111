//! Constrained-format quiz generation.
//!
//! Builds a single prompt demanding a raw JSON object with a `questions`
//! array, then parses the reply defensively: models routinely wrap the JSON
//! in prose or code fences despite instructions, so the payload is trimmed
//! to the substring between the first `{` and the last `}` before parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::error_handler::GenAiError;
use crate::services::gemini_service::GeminiService;

/// Default number of quiz items when the caller does not ask for one.
pub const DEFAULT_COUNT: u8 = 5;
/// Default difficulty label.
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Errors from quiz generation.
///
/// `Format` is deliberately distinct from `Generation`: the first means the
/// upstream answered but not in the requested shape, the second means the
/// upstream call itself failed.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The topic was empty; no upstream call was made.
    #[error("quiz topic must not be empty")]
    EmptyTopic,

    /// The upstream generation call failed.
    #[error(transparent)]
    Generation(#[from] GenAiError),

    /// The reply did not parse as the expected JSON structure.
    #[error("quiz output did not match the expected JSON shape: {0}")]
    Format(String),
}

/// A generated quiz: what the `/generate-questions` route returns verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizSet {
    pub questions: Vec<QuizItem>,
}

/// One multiple-choice item.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    /// Four answer options.
    pub options: Vec<String>,
    /// The correct option, verbatim.
    pub answer: String,
    /// Short rationale for the answer.
    #[serde(default)]
    pub explanation: String,
}

/// Generates a quiz of `count` multiple-choice items on `topic`.
///
/// # Errors
/// - [`QuizError::EmptyTopic`] for an empty/whitespace topic (checked before
///   any network traffic)
/// - [`QuizError::Generation`] if the upstream call fails
/// - [`QuizError::Format`] if the reply does not parse as a [`QuizSet`]
#[instrument(skip(svc))]
pub async fn generate_quiz(
    svc: &GeminiService,
    topic: &str,
    count: u8,
    difficulty: &str,
) -> Result<QuizSet, QuizError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(QuizError::EmptyTopic);
    }

    let prompt = build_prompt(topic, count, difficulty);
    let raw = svc.generate(&prompt).await?;
    debug!(reply_len = raw.len(), "quiz reply received");
    parse_quiz_payload(&raw)
}

fn build_prompt(topic: &str, count: u8, difficulty: &str) -> String {
    format!(
        "Generate exactly {count} multiple-choice questions on \"{topic}\" at {difficulty} \
         difficulty. Each question must have exactly 4 options, one correct answer, and a \
         short explanation. Return ONLY a single raw JSON object of the form \
         {{\"questions\":[{{\"question\":\"...\",\"options\":[\"...\",\"...\",\"...\",\"...\"],\
         \"answer\":\"...\",\"explanation\":\"...\"}}]}}. \
         No markdown, no code fences, no text outside the JSON object."
    )
}

/// Extracts the substring between the first `{` and the last `}` and parses
/// it as a [`QuizSet`].
fn parse_quiz_payload(raw: &str) -> Result<QuizSet, QuizError> {
    let object = extract_json_object(raw)
        .ok_or_else(|| QuizError::Format("no JSON object found in reply".into()))?;
    serde_json::from_str(object).map_err(|e| QuizError::Format(e.to_string()))
}

fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
