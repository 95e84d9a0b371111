//! Default Gemini config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY`    = API key (mandatory)
//! - `GEMINI_MODEL`      = model id (default `gemini-1.5-flash`)
//! - `GEMINI_API_BASE`   = API base URL
//!   (default `https://generativelanguage.googleapis.com`)
//! - `GENAI_MAX_TOKENS`  = optional output token cap (u32)
//! - `GENAI_TIMEOUT_SECS` = optional request timeout (u64, default 60)

use crate::config::gen_ai_config::GenAiConfig;
use crate::error_handler::{ConfigError, GenAiError, env_opt_u32, must_env};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Builds the process-wide Gemini config from the environment.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `GEMINI_API_KEY` is absent or empty
/// - [`ConfigError::InvalidNumber`] for malformed numeric variables
pub fn config_gemini() -> Result<GenAiConfig, GenAiError> {
    let api_key = must_env("GEMINI_API_KEY")?;
    let model = env_or("GEMINI_MODEL", DEFAULT_MODEL);
    let endpoint = env_or("GEMINI_API_BASE", DEFAULT_API_BASE);
    let max_output_tokens = env_opt_u32("GENAI_MAX_TOKENS")?;
    let timeout_secs = match std::env::var("GENAI_TIMEOUT_SECS") {
        Ok(v) if !v.trim().is_empty() => {
            Some(v.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                var: "GENAI_TIMEOUT_SECS",
                reason: "expected u64",
            })?)
        }
        _ => Some(60),
    };

    Ok(GenAiConfig {
        model,
        endpoint,
        api_key,
        max_output_tokens,
        temperature: None,
        timeout_secs,
    })
}

fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
