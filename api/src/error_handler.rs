use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use genai_service::GenAiError;
use genai_service::quiz::QuizError;
use nlu_service::NluError;

/// Public application error type.
///
/// One convention across routes: failures carry a JSON body with an `error`
/// field and a non-200 status. Upstream generation errors are surfaced with
/// their text; quiz format failures deliberately are not (the detail is
/// logged instead, users get a generic retry message).
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    NluConfig(#[from] NluError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request validation ---
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    // --- Upstream collaborators ---
    #[error("AI Error: {0}")]
    Generation(#[from] GenAiError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::NluConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 4xx
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Quiz(QuizError::EmptyTopic) => StatusCode::BAD_REQUEST,

            // 5xx
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Quiz(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            // Format failures keep upstream detail out of the response.
            AppError::Quiz(QuizError::Format(detail)) => {
                warn!(%detail, "quiz reply did not match the expected shape");
                "AI could not format the quiz. Please try again.".to_string()
            }
            AppError::Quiz(QuizError::Generation(err)) => format!("AI Error: {err}"),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_topic_maps_to_bad_request() {
        assert_eq!(
            AppError::Quiz(QuizError::EmptyTopic).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn format_failure_maps_to_500_with_generic_message() {
        let err = AppError::Quiz(QuizError::Format("missing field `answer`".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let msg = err.user_message();
        assert!(msg.contains("could not format the quiz"));
        assert!(!msg.contains("answer"));
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = AppError::MissingField("message");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "missing required field: message");
    }
}
