/// One row of the question bank.
///
/// Only `subject` and `question_text` are guaranteed by the loader; every
/// other column may be absent from the source schema or empty for a given
/// row. `repeat_count` is parsed leniently at load time: a non-numeric cell
/// is treated as absent rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    /// Exam year, normalized to a trimmed string.
    pub year: Option<String>,
    pub subject: String,
    pub exam_type: Option<String>,
    pub question_type: Option<String>,
    pub difficulty: Option<String>,
    pub topic: Option<String>,
    /// How many times the question reappeared across papers.
    pub repeat_count: Option<f64>,
    pub question_text: String,
}
