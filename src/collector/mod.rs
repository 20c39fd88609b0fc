//! Response collection and completeness checking.
//!
//! Answers are read through the [`ResponseSource`] trait so the collector does
//! not care where the current selections live: a parsed response sheet, an
//! in-memory form model or anything else the presentation layer owns.

mod completeness;
mod source;

pub use completeness::{check_completeness, collect, missing_fields, CollectedResponses, Completeness};
pub use source::ResponseSource;
