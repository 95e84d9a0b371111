use chat_sessions::SessionStore;
use chat_sessions::store::DEFAULT_CAPACITY;
use genai_service::{GeminiService, config::default_config::config_gemini};
use nlu_service::{DialogflowService, NluConfig};
use question_store::QuestionStore;

use crate::error_handler::AppError;

/// Default path of the question bank CSV.
const DEFAULT_BANK_PATH: &str = "QUESTIONPAPER.csv";

/// Shared state for all HTTP handlers.
///
/// Constructed once at startup and passed to handlers behind an `Arc`. The
/// question store is read-only after load; the session store manages its own
/// locking.
pub struct AppState {
    /// CSV-backed exam question bank (possibly empty if loading failed).
    pub questions: QuestionStore,
    /// Bounded per-session conversation state.
    pub sessions: SessionStore,
    /// Generative text client (Gemini).
    pub genai: GeminiService,
    /// Intent resolver; `None` when the deployment has no NLU configured.
    pub nlu: Option<DialogflowService>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// A missing or unreadable question bank degrades to an empty store and
    /// an absent NLU config disables intent resolution; only a broken
    /// generative-service config fails startup.
    pub fn from_env() -> Result<Self, AppError> {
        let bank_path = std::env::var("QUESTION_BANK_PATH")
            .unwrap_or_else(|_| DEFAULT_BANK_PATH.to_string());

        let capacity = std::env::var("SESSION_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CAPACITY);

        let genai = GeminiService::new(config_gemini()?)?;

        let nlu = match NluConfig::from_env() {
            Some(cfg) => Some(DialogflowService::new(cfg)?),
            None => None,
        };

        Ok(Self {
            questions: QuestionStore::load(bank_path),
            sessions: SessionStore::new(capacity),
            genai,
            nlu,
        })
    }
}
