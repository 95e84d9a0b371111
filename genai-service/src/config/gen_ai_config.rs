/// Configuration for a Gemini model invocation.
///
/// # Fields
///
/// - `model`: model identifier (e.g., `"gemini-1.5-flash"`).
/// - `endpoint`: API base URL (normally the public Gemini endpoint).
/// - `api_key`: API key sent as `x-goog-api-key`.
/// - `max_output_tokens`: generation cap, if any.
/// - `temperature`: sampling temperature, if any.
/// - `timeout_secs`: per-request timeout in seconds.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub model: String,
    pub endpoint: String,
    pub api_key: String,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}
