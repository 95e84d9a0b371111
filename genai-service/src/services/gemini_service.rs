//! Lightweight Gemini client for text generation.
//!
//! This module implements a thin client for the Gemini REST API:
//! - `POST {endpoint}/v1beta/models/{model}:generateContent`
//!   — synchronous (non-streaming) text generation
//!
//! Authentication uses the `x-goog-api-key` header. Every call is a single
//! attempt: failures surface immediately to the caller, never retried.

use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::gen_ai_config::GenAiConfig;
use crate::error_handler::{GenAiError, Result};

/// Thin client for Gemini.
///
/// Initialized with a full [`GenAiConfig`]. Reuses one HTTP client with a
/// configurable timeout and the API key preset as a default header.
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: GenAiConfig,
    url_generate: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - [`GenAiError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`GenAiError::Decode`] if the API key is not a valid header value
    /// - [`GenAiError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: GenAiConfig) -> Result<Self> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(GenAiError::InvalidEndpoint(cfg.endpoint));
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            header::HeaderValue::from_str(&cfg.api_key)
                .map_err(|e| GenAiError::Decode(format!("invalid API key header: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_generate = format!("{}/v1beta/models/{}:generateContent", base, cfg.model);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(60),
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a **non-streaming** generation request.
    ///
    /// The reply text is the concatenation of all text parts of the first
    /// candidate.
    ///
    /// # Errors
    /// - [`GenAiError::HttpStatus`] for non-2xx responses
    /// - [`GenAiError::Transport`] for client errors
    /// - [`GenAiError::Decode`] if the response cannot be parsed
    /// - [`GenAiError::EmptyCandidates`] if no candidate carries text
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest::from_cfg(&self.cfg, prompt);

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_generate.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(GenAiError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GenAiError::Decode(format!("serde error: {e}")))?;

        let text = out
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenAiError::EmptyCandidates);
        }
        Ok(text)
    }
}

/* ==========================
HTTP payloads
========================== */

/// Request body for `:generateContent` (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_cfg(cfg: &'a GenAiConfig, prompt: &'a str) -> Self {
        let generation_config = if cfg.max_output_tokens.is_some() || cfg.temperature.is_some() {
            Some(GenerationConfig {
                max_output_tokens: cfg.max_output_tokens,
                temperature: cfg.temperature,
            })
        } else {
            None
        };

        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Subset of the Gemini generation options.
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Minimal response shape: the generated text lives in
/// `candidates[0].content.parts[*].text`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(endpoint: &str) -> GenAiConfig {
        GenAiConfig {
            model: "gemini-1.5-flash".into(),
            endpoint: endpoint.into(),
            api_key: "test-key".into(),
            max_output_tokens: None,
            temperature: None,
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn rejects_endpoint_without_http_scheme() {
        let err = GeminiService::new(cfg("generativelanguage.googleapis.com")).unwrap_err();
        assert!(matches!(err, GenAiError::InvalidEndpoint(_)));
    }

    #[test]
    fn builds_generate_url_from_base_and_model() {
        let svc = GeminiService::new(cfg("https://generativelanguage.googleapis.com/")).unwrap();
        assert_eq!(
            svc.url_generate,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn response_parses_candidate_part_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Hello world");
    }
}
