//! POST /generate-questions — structured quiz generation.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use genai_service::quiz::{DEFAULT_COUNT, DEFAULT_DIFFICULTY, QuizSet, generate_quiz};

use crate::{
    core::app_state::AppState, error_handler::AppResult,
    routes::generate_questions::generate_questions_request::GenerateQuestionsRequest,
};

/// Handler: POST /generate-questions
///
/// A missing topic is a 400; a generation failure or a reply in the wrong
/// shape is a 500 (the latter with a generic retry message, see
/// `error_handler`). The parsed quiz is returned verbatim as
/// `{"questions": [...]}`.
pub async fn generate_questions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateQuestionsRequest>,
) -> AppResult<Json<QuizSet>> {
    let topic = body.topic.unwrap_or_default();
    let count = body.count.unwrap_or(DEFAULT_COUNT);
    let difficulty = body
        .difficulty
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());

    let quiz = generate_quiz(&state.genai, &topic, count, &difficulty).await?;
    info!(items = quiz.questions.len(), "quiz generated");

    Ok(Json(quiz))
}
