//! NLU resolver config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `DIALOGFLOW_PROJECT_ID` = agent project id (mandatory)
//! - `DIALOGFLOW_TOKEN`      = OAuth bearer token (mandatory)
//! - `DIALOGFLOW_API_BASE`   = API base URL
//!   (default `https://dialogflow.googleapis.com`)
//! - `DIALOGFLOW_LANGUAGE`   = query language code (default `en`)
//! - `NLU_TIMEOUT_SECS`      = optional request timeout (default 15)

use tracing::warn;

const DEFAULT_API_BASE: &str = "https://dialogflow.googleapis.com";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the `detectIntent` client.
#[derive(Debug, Clone)]
pub struct NluConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_token: String,
    pub language_code: String,
    pub timeout_secs: u64,
}

impl NluConfig {
    /// Builds the config from the environment, or `None` when the resolver
    /// is not configured. A missing resolver is a supported deployment mode,
    /// so this logs a warning instead of failing startup.
    pub fn from_env() -> Option<Self> {
        let project_id = non_empty_var("DIALOGFLOW_PROJECT_ID");
        let api_token = non_empty_var("DIALOGFLOW_TOKEN");
        let (Some(project_id), Some(api_token)) = (project_id, api_token) else {
            warn!(
                "DIALOGFLOW_PROJECT_ID/DIALOGFLOW_TOKEN not set; \
                 intent resolution is disabled"
            );
            return None;
        };

        let timeout_secs = non_empty_var("NLU_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(Self {
            endpoint: non_empty_var("DIALOGFLOW_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            project_id,
            api_token,
            language_code: non_empty_var("DIALOGFLOW_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            timeout_secs,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
