//! Thin Dialogflow ES client for intent detection.
//!
//! This module implements a minimal client for:
//! - `POST {endpoint}/v2/projects/{project}/agent/sessions/{session}:detectIntent`
//!
//! The response is mapped into a fully-typed [`IntentResult`] where every
//! field the upstream may omit defaults to empty, so callers never need
//! optional-attribute fallbacks.

use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::config::NluConfig;
use crate::error_handler::{NluError, Result};

/// Classified intent plus extracted parameters for one utterance.
#[derive(Debug, Clone, Default)]
pub struct IntentResult {
    /// Intent display name; empty when the upstream matched nothing.
    pub intent: String,
    /// Canned agent reply for intents served directly by the agent.
    pub fulfillment_text: String,
    /// Extracted parameters (e.g., `Subject`, `Year`, `Topic`).
    pub parameters: Map<String, Value>,
}

/// Thin client for the Dialogflow `detectIntent` API.
///
/// Holds one preconfigured `reqwest::Client` (timeout + bearer auth). Calls
/// are single-attempt and blocking from the caller's point of view.
pub struct DialogflowService {
    client: reqwest::Client,
    cfg: NluConfig,
    url_base: String,
}

impl DialogflowService {
    /// Creates a new [`DialogflowService`] from the given config.
    ///
    /// # Errors
    /// - [`NluError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`NluError::Decode`] if the token is not a valid header value
    /// - [`NluError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: NluConfig) -> Result<Self> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(NluError::InvalidEndpoint(cfg.endpoint));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_token))
                .map_err(|e| NluError::Decode(format!("invalid token header: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let url_base = format!(
            "{}/v2/projects/{}/agent/sessions",
            endpoint.trim_end_matches('/'),
            cfg.project_id
        );

        info!(
            project = %cfg.project_id,
            endpoint = %cfg.endpoint,
            "DialogflowService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_base,
        })
    }

    /// Classifies `text` within the given conversation session.
    ///
    /// Single attempt, no retry: any failure surfaces immediately.
    ///
    /// # Errors
    /// - [`NluError::HttpStatus`] for non-2xx responses
    /// - [`NluError::Transport`] for client errors
    /// - [`NluError::Decode`] if the response cannot be parsed
    #[instrument(skip_all, fields(session = %session_id))]
    pub async fn detect_intent(&self, text: &str, session_id: &str) -> Result<IntentResult> {
        let url = format!("{}/{}:detectIntent", self.url_base, session_id);
        let body = DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text,
                    language_code: &self.cfg.language_code,
                },
            },
        };

        debug!("POST {url}");
        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(NluError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: DetectIntentResponse = resp
            .json()
            .await
            .map_err(|e| NluError::Decode(format!("serde error: {e}")))?;

        let query = out.query_result.unwrap_or_default();
        Ok(IntentResult {
            intent: query.intent.map(|i| i.display_name).unwrap_or_default(),
            fulfillment_text: query.fulfillment_text,
            parameters: query.parameters,
        })
    }
}

/* ==========================
HTTP payloads
========================== */

#[derive(Debug, Serialize)]
struct DetectIntentRequest<'a> {
    #[serde(rename = "queryInput")]
    query_input: QueryInput<'a>,
}

#[derive(Debug, Serialize)]
struct QueryInput<'a> {
    text: TextInput<'a>,
}

#[derive(Debug, Serialize)]
struct TextInput<'a> {
    text: &'a str,
    #[serde(rename = "languageCode")]
    language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct DetectIntentResponse {
    #[serde(rename = "queryResult")]
    query_result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
struct QueryResult {
    intent: Option<Intent>,
    #[serde(rename = "fulfillmentText", default)]
    fulfillment_text: String,
    #[serde(default)]
    parameters: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct Intent {
    #[serde(rename = "displayName", default)]
    display_name: String,
}
