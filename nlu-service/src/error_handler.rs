//! Unified error handling for `nlu-service`.
//!
//! All messages carry the `[NLU Service]` prefix for log attribution. The
//! api layer never leaks these upstream details to users; chat surfaces a
//! fixed connection-error reply instead.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, NluError>;

/// Errors produced by the detectIntent client.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NluError {
    /// Invalid endpoint (empty or missing http/https scheme).
    #[error("[NLU Service] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport/HTTP client error.
    #[error("[NLU Service] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from upstream.
    #[error("[NLU Service] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[NLU Service] failed to decode response: {0}")]
    Decode(String),
}
