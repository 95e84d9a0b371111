//! Mapping from resolver-extracted parameters to a question bank query.

use serde_json::{Map, Value};

use question_store::FilterQuery;
use question_store::query::DEFAULT_LIMIT;

/// Builds a [`FilterQuery`] from the parameter map of a
/// `get_questions_by_intent` match.
///
/// Parameter names follow the NLU agent's conventions (`Year`, `Exam_Type`,
/// `Subject`, `Question_Type`, `Difficulty`, `Topic`, `Repeatation`,
/// `number`). Values arrive untyped; numbers are accepted where text is
/// expected and vice versa, with anything unusable treated as absent.
pub fn filter_query_from_params(params: &Map<String, Value>) -> FilterQuery {
    let text = |key: &str| {
        params
            .get(key)
            .map(value_to_string)
            .filter(|s| !s.is_empty())
    };

    FilterQuery {
        year: text("Year"),
        exam_type: text("Exam_Type"),
        subject: text("Subject"),
        question_type: text("Question_Type"),
        difficulty: text("Difficulty"),
        // Any non-empty value means "repeated questions only".
        repeated_only: text("Repeatation").is_some(),
        search_terms: text("Topic"),
        limit: params
            .get("number")
            .and_then(value_to_usize)
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_LIMIT),
    }
}

/// Renders a parameter value as trimmed text. Dialogflow sends numeric
/// entities as floats, so whole numbers are printed without the trailing
/// `.0` (a year must come out as "2023", not "2023.0").
fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn value_to_usize(v: &Value) -> Option<usize> {
    match v {
        Value::Number(n) => n.as_f64().map(|f| f as usize),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(v: Value) -> Map<String, Value> {
        v.as_object().expect("test params are an object").clone()
    }

    #[test]
    fn maps_all_named_parameters() {
        let p = params(json!({
            "Year": 2023.0,
            "Exam_Type": "Final",
            "Subject": "Math",
            "Question_Type": "MCQ",
            "Difficulty": "easy",
            "Topic": "algebra or geometry",
            "Repeatation": "yes",
            "number": 3.0
        }));
        let q = filter_query_from_params(&p);
        assert_eq!(q.year.as_deref(), Some("2023"));
        assert_eq!(q.exam_type.as_deref(), Some("Final"));
        assert_eq!(q.subject.as_deref(), Some("Math"));
        assert_eq!(q.question_type.as_deref(), Some("MCQ"));
        assert_eq!(q.difficulty.as_deref(), Some("easy"));
        assert_eq!(q.search_terms.as_deref(), Some("algebra or geometry"));
        assert!(q.repeated_only);
        assert_eq!(q.limit, 3);
    }

    #[test]
    fn empty_and_missing_values_are_absent() {
        let p = params(json!({"Subject": "  ", "Repeatation": ""}));
        let q = filter_query_from_params(&p);
        assert!(q.subject.is_none());
        assert!(!q.repeated_only);
        assert_eq!(q.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn numeric_year_loses_the_float_suffix() {
        let p = params(json!({"Year": 2022.0}));
        let q = filter_query_from_params(&p);
        assert_eq!(q.year.as_deref(), Some("2022"));
    }

    #[test]
    fn zero_or_junk_limit_falls_back_to_default() {
        let p = params(json!({"number": 0}));
        assert_eq!(filter_query_from_params(&p).limit, DEFAULT_LIMIT);

        let p = params(json!({"number": "lots"}));
        assert_eq!(filter_query_from_params(&p).limit, DEFAULT_LIMIT);
    }
}
