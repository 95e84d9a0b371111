//! Filter queries against the question bank.

use crate::record::QuestionRecord;

/// Default number of records returned when the caller does not ask for a
/// specific amount.
pub const DEFAULT_LIMIT: usize = 2;

/// A transient, conjunctive filter over the question bank.
///
/// Every predicate is optional; an empty query matches everything. The
/// `search_terms` field carries the raw topic text as supplied by the user;
/// tokenization happens inside the store.
#[derive(Debug, Clone)]
pub struct FilterQuery {
    /// Exact match after trimming.
    pub year: Option<String>,
    /// Case-insensitive substring match.
    pub exam_type: Option<String>,
    /// Case-insensitive substring match.
    pub subject: Option<String>,
    /// Case-insensitive substring match.
    pub question_type: Option<String>,
    /// Case-insensitive substring match.
    pub difficulty: Option<String>,
    /// Keep only questions whose repeat count is a number greater than 1.
    /// Forces the result limit to exactly 1.
    pub repeated_only: bool,
    /// Raw keyword text matched against the topic column.
    pub search_terms: Option<String>,
    /// Maximum number of records to return.
    pub limit: usize,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            year: None,
            exam_type: None,
            subject: None,
            question_type: None,
            difficulty: None,
            repeated_only: false,
            search_terms: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FilterQuery {
    /// Returns the human-readable `field: value` pairs that were actually
    /// supplied. Used for the "nothing found" diagnostic; the limit is not
    /// a filter and is excluded.
    pub fn applied_filters(&self) -> Vec<AppliedFilter> {
        let mut out = Vec::new();
        let mut push = |field: &'static str, value: Option<&String>| {
            if let Some(v) = value {
                let v = v.trim();
                if !v.is_empty() {
                    out.push(AppliedFilter {
                        field,
                        value: v.to_string(),
                    });
                }
            }
        };
        push("year", self.year.as_ref());
        push("exam type", self.exam_type.as_ref());
        push("subject", self.subject.as_ref());
        push("question type", self.question_type.as_ref());
        push("difficulty", self.difficulty.as_ref());
        push("topic", self.search_terms.as_ref());
        if self.repeated_only {
            out.push(AppliedFilter {
                field: "repeated",
                value: "yes".to_string(),
            });
        }
        out
    }
}

/// One supplied filter, for diagnostic display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilter {
    pub field: &'static str,
    pub value: String,
}

/// Result of a filter query.
#[derive(Debug)]
pub enum FilterOutcome<'a> {
    /// The first `limit` matching records, in original load order.
    Matches(Vec<&'a QuestionRecord>),
    /// Nothing matched; carries the filters that were applied so the caller
    /// can tell the user what to loosen.
    NoMatch(Vec<AppliedFilter>),
}
