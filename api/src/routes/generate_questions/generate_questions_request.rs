use serde::Deserialize;

/// Request body for POST /generate-questions.
///
/// `count` and `difficulty` are optional; the quiz generator's defaults
/// (5 items, "medium") apply when absent.
#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub topic: Option<String>,
    pub count: Option<u8>,
    pub difficulty: Option<String>,
}
