//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod attributes;
mod check;
mod replay;
mod score;
mod template;

pub use attributes::run_attributes;
pub use check::run_check;
pub use replay::run_replay_script;
pub use score::run_score;
pub use template::{run_template, template_yaml};

use crate::config::AppConfig;
use crate::pipeline::{Evaluation, OutputTarget, PipelineError};
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;
use std::path::Path;

/// Render an evaluation in the configured format for `target`.
pub(crate) fn render_evaluation(
    evaluation: &Evaluation,
    config: &AppConfig,
    target: &OutputTarget,
    source: Option<&Path>,
) -> Result<String> {
    let format = target.resolve_format(config.output.format);
    let reporter = create_reporter_with_options(
        format,
        target.wants_color(config.output.no_color),
        config.output.compact,
    );

    let mut report_config = ReportConfig::default();
    if let Some(path) = source {
        report_config = report_config.with_source(path.display().to_string());
    }

    reporter
        .generate(evaluation, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() }.into())
}
