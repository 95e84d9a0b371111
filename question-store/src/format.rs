//! Rendering of matched questions into the chat-facing excerpt format.

use crate::record::QuestionRecord;

/// Placeholder for display fields absent from the row or schema.
const MISSING_FIELD: &str = "N/A";
/// Placeholder for an empty question cell.
const MISSING_QUESTION: &str = "No question provided.";

/// Renders records as two-line blocks separated by a blank line:
///
/// ```text
/// <b>[2023] Math (Final)</b><br>Q: What is 2+2?
/// ```
///
/// Missing optional fields render as `N/A`. The markup is consumed verbatim
/// by the chat frontend.
pub fn format_questions(records: &[&QuestionRecord]) -> String {
    records
        .iter()
        .map(|r| {
            let year = r.year.as_deref().unwrap_or(MISSING_FIELD);
            let exam_type = r.exam_type.as_deref().unwrap_or(MISSING_FIELD);
            let subject = if r.subject.is_empty() {
                MISSING_FIELD
            } else {
                r.subject.as_str()
            };
            let question = if r.question_text.is_empty() {
                MISSING_QUESTION
            } else {
                r.question_text.as_str()
            };
            format!("<b>[{year}] {subject} ({exam_type})</b><br>Q: {question}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QuestionRecord {
        QuestionRecord {
            year: Some("2023".into()),
            subject: "Math".into(),
            exam_type: Some("Final".into()),
            question_type: None,
            difficulty: None,
            topic: None,
            repeat_count: None,
            question_text: "What is 2+2?".into(),
        }
    }

    #[test]
    fn renders_header_and_question_lines() {
        let r = record();
        assert_eq!(
            format_questions(&[&r]),
            "<b>[2023] Math (Final)</b><br>Q: What is 2+2?"
        );
    }

    #[test]
    fn joins_blocks_with_blank_line() {
        let a = record();
        let b = record();
        let out = format_questions(&[&a, &b]);
        assert_eq!(out.matches("\n\n").count(), 1);
    }

    #[test]
    fn missing_fields_render_as_na() {
        let mut r = record();
        r.year = None;
        r.exam_type = None;
        assert_eq!(
            format_questions(&[&r]),
            "<b>[N/A] Math (N/A)</b><br>Q: What is 2+2?"
        );
    }
}
