//! Report generation for QDS evaluations.
//!
//! This module provides multiple output formats for a scored questionnaire:
//! - Summary: Compact terminal output with a gradient indicator
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//!
//! # Security
//!
//! The `escape` module provides utilities for safe Markdown output.
//! Labels and suggestion texts are escaped before being embedded.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::collector::Completeness;
use crate::pipeline::Evaluation;
use std::fmt::Write as _;
use std::io::Write;
use thiserror::Error;

/// Shown when generation is requested before every field is answered
pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields to generate the design score.";

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from an evaluation
    fn generate(&self, evaluation: &Evaluation, config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_to(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(evaluation, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator.
///
/// `compact` renders single-line JSON and drops the Markdown metadata block.
/// The summary ignores it.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    compact: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(!compact)),
        ReportFormat::Markdown if compact => {
            Box::new(MarkdownReporter::new().without_metadata())
        }
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// List every unanswered field, one per line, in catalog order.
#[must_use]
pub fn format_missing_fields(completeness: &Completeness) -> String {
    let mut out = String::from(INCOMPLETE_MESSAGE);
    let _ = write!(out, " Missing {} field(s):", completeness.missing_count());
    for field in completeness.missing_fields() {
        let _ = write!(out, "\n  - {field} ({})", field.attribute.label());
    }
    out
}
