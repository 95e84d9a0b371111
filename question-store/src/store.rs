//! CSV-backed question store: one-time load plus conjunctive filtering.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use regex::RegexBuilder;
use tracing::{info, warn};

use crate::error_handler::DataLoadError;
use crate::query::{FilterOutcome, FilterQuery};
use crate::record::QuestionRecord;

/// Column names after header normalization (lowercased, trimmed).
const COL_YEAR: &str = "year";
const COL_SUBJECT: &str = "sub";
const COL_EXAM_TYPE: &str = "examtype";
const COL_QUESTION_TYPE: &str = "questiontype";
const COL_DIFFICULTY: &str = "difficulty";
const COL_TOPIC: &str = "topic";
const COL_REPEAT: &str = "repeatation";
const COL_QUESTION: &str = "question";

/// Immutable, in-memory question bank.
///
/// Load failures degrade to an empty store: queries against an empty store
/// are valid and simply match nothing.
#[derive(Debug, Default)]
pub struct QuestionStore {
    records: Vec<QuestionRecord>,
    /// Whether the loaded schema had a topic column at all. When it does
    /// not, keyword search is a no-op rather than an always-empty filter.
    topic_in_schema: bool,
}

impl QuestionStore {
    /// An empty store, used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the bank from a CSV file. Never fails: unreadable or malformed
    /// sources are logged at WARN and produce an empty store.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                info!(path = %path.display(), rows = store.len(), "question bank loaded");
                store
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "question bank load failed, store is empty");
                Self::empty()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, DataLoadError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses the bank from any CSV reader.
    ///
    /// Header names are lowercased and trimmed before column mapping, so
    /// `SUB`, `Sub` and `sub` are equivalent. The `sub` and `question`
    /// columns are mandatory; everything else is optional.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut csv = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let col = |name: &str| headers.iter().position(|h| h == name);

        let idx_subject = col(COL_SUBJECT).ok_or(DataLoadError::MissingColumn(COL_SUBJECT))?;
        let idx_question = col(COL_QUESTION).ok_or(DataLoadError::MissingColumn(COL_QUESTION))?;
        let idx_year = col(COL_YEAR);
        let idx_exam_type = col(COL_EXAM_TYPE);
        let idx_question_type = col(COL_QUESTION_TYPE);
        let idx_difficulty = col(COL_DIFFICULTY);
        let idx_topic = col(COL_TOPIC);
        let idx_repeat = col(COL_REPEAT);

        let mut records = Vec::new();
        for row in csv.records() {
            let row = row?;
            let cell = |idx: Option<usize>| -> Option<String> {
                let v = row.get(idx?)?.trim();
                if v.is_empty() { None } else { Some(v.to_string()) }
            };

            records.push(QuestionRecord {
                year: cell(idx_year),
                subject: cell(Some(idx_subject)).unwrap_or_default(),
                exam_type: cell(idx_exam_type),
                question_type: cell(idx_question_type),
                difficulty: cell(idx_difficulty),
                topic: cell(idx_topic),
                // Lenient numeric parse: junk counts as absent.
                repeat_count: cell(idx_repeat).and_then(|v| v.parse::<f64>().ok()),
                question_text: cell(Some(idx_question)).unwrap_or_default(),
            });
        }

        Ok(Self {
            records,
            topic_in_schema: idx_topic.is_some(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Applies the query's predicates conjunctively and returns the first
    /// `limit` survivors in original load order.
    ///
    /// When `repeated_only` is set the limit is forced to exactly 1. A chain
    /// that eliminates every record yields [`FilterOutcome::NoMatch`] with
    /// the filters that were supplied.
    pub fn filter(&self, query: &FilterQuery) -> FilterOutcome<'_> {
        let mut rows: Vec<&QuestionRecord> = self.records.iter().collect();

        if let Some(year) = trimmed(&query.year) {
            rows.retain(|r| r.year.as_deref().map(str::trim) == Some(year));
        }
        if let Some(exam_type) = trimmed(&query.exam_type) {
            rows.retain(|r| contains_ci(r.exam_type.as_deref(), exam_type));
        }
        if let Some(subject) = trimmed(&query.subject) {
            rows.retain(|r| contains_ci(Some(&r.subject), subject));
        }
        if let Some(question_type) = trimmed(&query.question_type) {
            rows.retain(|r| contains_ci(r.question_type.as_deref(), question_type));
        }
        if let Some(difficulty) = trimmed(&query.difficulty) {
            rows.retain(|r| contains_ci(r.difficulty.as_deref(), difficulty));
        }

        let mut limit = query.limit.max(1);
        if query.repeated_only {
            rows.retain(|r| matches!(r.repeat_count, Some(n) if n > 1.0));
            limit = 1;
        }

        if let Some(raw) = trimmed(&query.search_terms) {
            // Without a topic column the keyword predicate is a no-op.
            if self.topic_in_schema {
                let matchers = keyword_matchers(raw);
                if !matchers.is_empty() {
                    rows.retain(|r| match r.topic.as_deref() {
                        Some(topic) => matchers.iter().any(|m| m.is_match(topic)),
                        None => false,
                    });
                }
            }
        }

        if rows.is_empty() {
            return FilterOutcome::NoMatch(query.applied_filters());
        }
        rows.truncate(limit);
        FilterOutcome::Matches(rows)
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    let v = value.as_deref()?.trim();
    if v.is_empty() { None } else { Some(v) }
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(h) => h.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

/// Splits raw keyword text into tokens and compiles one case-insensitive
/// matcher per token. The split treats the standalone word "or" (any case)
/// as a separator, alongside whitespace; empty tokens are dropped. Tokens
/// are escaped so user text can never inject pattern syntax.
fn keyword_matchers(raw: &str) -> Vec<regex::Regex> {
    raw.split_whitespace()
        .filter(|t| !t.eq_ignore_ascii_case("or"))
        .map(|t| {
            RegexBuilder::new(&regex::escape(t))
                .case_insensitive(true)
                .build()
                .expect("escaped literal is a valid pattern")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DEFAULT_LIMIT;

    const BANK: &str = "\
Year,Sub,ExamType,QuestionType,Difficulty,Topic,Repeatation,Question
2023,Math,Final,MCQ,Easy,Algebra,3,What is 2+2?
2022,Physics,Final,Long,Hard,Mechanics,1,Define force.
2023,Math,Midterm,Short,Medium,Geometry,abc,State Pythagoras' theorem.
2021,Chemistry,Final,MCQ,Medium,Organic Chemistry,2,Name an alkane.
";

    fn store() -> QuestionStore {
        QuestionStore::from_reader(BANK.as_bytes()).expect("test bank parses")
    }

    fn matches<'a>(outcome: FilterOutcome<'a>) -> Vec<&'a QuestionRecord> {
        match outcome {
            FilterOutcome::Matches(rows) => rows,
            FilterOutcome::NoMatch(filters) => panic!("expected matches, got NoMatch({filters:?})"),
        }
    }

    #[test]
    fn empty_query_returns_first_limit_rows_in_load_order() {
        let store = store();
        let rows = matches(store.filter(&FilterQuery::default()));
        assert_eq!(rows.len(), DEFAULT_LIMIT);
        assert_eq!(rows[0].question_text, "What is 2+2?");
        assert_eq!(rows[1].question_text, "Define force.");
    }

    #[test]
    fn subject_filter_is_case_insensitive_substring() {
        let store = store();
        let rows = matches(store.filter(&FilterQuery {
            subject: Some("math".into()),
            limit: 10,
            ..Default::default()
        }));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.subject == "Math"));
    }

    #[test]
    fn year_filter_is_exact() {
        let store = store();
        let rows = matches(store.filter(&FilterQuery {
            year: Some("2022".into()),
            limit: 10,
            ..Default::default()
        }));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject, "Physics");

        // Substrings of a year must not match.
        let outcome = store.filter(&FilterQuery {
            year: Some("202".into()),
            ..Default::default()
        });
        assert!(matches!(outcome, FilterOutcome::NoMatch(_)));
    }

    #[test]
    fn repeated_only_keeps_counts_above_one_and_caps_at_one_row() {
        let store = store();
        let rows = matches(store.filter(&FilterQuery {
            repeated_only: true,
            limit: 50,
            ..Default::default()
        }));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].repeat_count.is_some_and(|n| n > 1.0));
        // The "abc" repeat count parses as absent, so the Geometry row never
        // qualifies even though it sits before the Chemistry row.
        assert_eq!(rows[0].question_text, "What is 2+2?");
    }

    #[test]
    fn no_match_reports_exactly_the_supplied_filters() {
        let store = store();
        let outcome = store.filter(&FilterQuery {
            year: Some("1999".into()),
            subject: Some("Math".into()),
            limit: 7,
            ..Default::default()
        });
        let filters = match outcome {
            FilterOutcome::NoMatch(filters) => filters,
            other => panic!("expected NoMatch, got {other:?}"),
        };
        let pairs: Vec<(&str, &str)> = filters
            .iter()
            .map(|f| (f.field, f.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("year", "1999"), ("subject", "Math")]);
    }

    #[test]
    fn keyword_search_splits_on_or_and_matches_any_token() {
        let store = store();
        let rows = matches(store.filter(&FilterQuery {
            search_terms: Some("algebra or MECHANICS".into()),
            limit: 10,
            ..Default::default()
        }));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].topic.as_deref(), Some("Algebra"));
        assert_eq!(rows[1].topic.as_deref(), Some("Mechanics"));
    }

    #[test]
    fn keyword_tokens_are_escaped_not_pattern_syntax() {
        let store = store();
        // ".*" would match every topic if it were interpreted as a pattern;
        // escaped, it matches nothing.
        let outcome = store.filter(&FilterQuery {
            search_terms: Some(".*".into()),
            ..Default::default()
        });
        assert!(matches!(outcome, FilterOutcome::NoMatch(_)));
    }

    #[test]
    fn keyword_search_is_skipped_when_schema_has_no_topic_column() {
        let csv = "Sub,Question\nMath,What is 2+2?\n";
        let store = QuestionStore::from_reader(csv.as_bytes()).expect("parses");
        let rows = matches(store.filter(&FilterQuery {
            search_terms: Some("anything".into()),
            ..Default::default()
        }));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn missing_required_column_is_a_load_error() {
        let csv = "Year,Topic\n2023,Algebra\n";
        let err = QuestionStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("sub")));
    }

    #[test]
    fn load_of_missing_file_degrades_to_empty_store() {
        let store = QuestionStore::load("/definitely/not/here.csv");
        assert!(store.is_empty());
        let outcome = store.filter(&FilterQuery::default());
        assert!(matches!(outcome, FilterOutcome::NoMatch(_)));
    }

    #[test]
    fn conjunctive_scenario_from_two_row_bank() {
        let csv = "\
year,sub,examtype,question
2023,Math,Final,What is 2+2?
2022,Physics,Final,Define force.
";
        let store = QuestionStore::from_reader(csv.as_bytes()).expect("parses");
        let rows = matches(store.filter(&FilterQuery {
            subject: Some("math".into()),
            ..Default::default()
        }));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].question_text, "What is 2+2?");
    }
}
