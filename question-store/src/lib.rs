//! Read-only store for the exam question bank.
//!
//! The bank is a flat CSV file loaded once at process start. After load the
//! store is immutable and safe to share across request handlers without
//! locking. Queries are conjunctive multi-predicate filters over the row set;
//! an empty store (failed or missing CSV) is a normal state that simply
//! matches nothing.

pub mod error_handler;
pub mod format;
pub mod query;
pub mod record;
pub mod store;

pub use error_handler::DataLoadError;
pub use format::format_questions;
pub use query::{AppliedFilter, FilterOutcome, FilterQuery};
pub use record::QuestionRecord;
pub use store::QuestionStore;
