//! **Quality Design Score (QDS) questionnaire engine.**
//!
//! `qds-tools` turns a software design self-assessment into a single score.
//! For each of ten quality attributes (modularity, security, portability and
//! so on) a respondent picks an importance weight and answers two Likert
//! questions. The engine checks the answers are complete, converts each pair
//! of answers to a 0–10 attribute score, combines them by normalized weight
//! into the overall QDS, and picks the strongest and weakest attributes along
//! with improvement suggestions.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the fixed attribute catalog and response types. A
//!   [`ResponseSheet`] is the raw, possibly incomplete form state.
//! - **[`collector`]**: completeness checking over any [`ResponseSource`].
//! - **[`scoring`]**: weighted aggregation ([`compute_scores`]) and insight
//!   selection ([`select_insights`]). Everything here is pure.
//! - **[`pipeline`]**: the collect → aggregate → select flow ([`evaluate`]),
//!   the interactive [`Session`], file loading and replay scripts.
//! - **[`reports`]**: summary, JSON and Markdown renderers.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use qds_tools::config::ScoringConfig;
//! use qds_tools::model::{AttributeKey, LikertRating, ResponseSheet};
//! use qds_tools::pipeline::{evaluate, Outcome};
//!
//! let top = LikertRating::MAX;
//! let low = LikertRating::MIN;
//! let sheet = AttributeKey::ALL.iter().fold(ResponseSheet::new(), |sheet, key| {
//!     if *key == AttributeKey::Security {
//!         sheet.with_attribute(*key, 3, low, low)
//!     } else {
//!         sheet.with_attribute(*key, 3, top, top)
//!     }
//! });
//!
//! match evaluate(&sheet, &ScoringConfig::default()) {
//!     Outcome::Evaluated(evaluation) => {
//!         assert_eq!(evaluation.result.display_score(), "9.00");
//!         assert_eq!(evaluation.insights.standing.weakest_text(), "Security");
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `qds-tools` binary scores response sheets from disk:
//!
//! ```sh
//! qds-tools template -O answers.yaml
//! qds-tools score answers.yaml --min-score 6
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `min`/`max` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use collector::{check_completeness, missing_fields, Completeness, ResponseSource};
pub use config::{AppConfig, AppConfigBuilder, CliOverrides, ScoringConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, QdsError, Result};
pub use model::{
    AttributeKey, FieldId, LikertRating, RatingPair, RatingSelection, ResponseSheet,
    WeightSelection,
};
pub use pipeline::{evaluate, Evaluation, Outcome, Session, SessionEvent};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{compute_scores, select_insights, AggregateResult, Insights, SuggestionPolicy};
