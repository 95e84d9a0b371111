//! Generative text service backed by the Gemini REST API.
//!
//! One thin, non-streaming client ([`services::gemini_service::GeminiService`])
//! plus the constrained-format quiz generator built on top of it
//! ([`quiz`]). Configuration comes strictly from environment variables via
//! [`config::default_config`].

pub mod config;
pub mod error_handler;
pub mod quiz;
pub mod services;

pub use config::gen_ai_config::GenAiConfig;
pub use error_handler::GenAiError;
pub use services::gemini_service::GeminiService;
