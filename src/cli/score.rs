//! Score command handler.
//!
//! Implements the `score` subcommand: load a response sheet, compute the QDS
//! and report it.

use super::render_evaluation;
use crate::config::{AppConfig, Validatable};
use crate::pipeline::{
    evaluate, exit_codes, load_response_sheet, write_output, Outcome, OutputTarget, PipelineError,
};
use crate::reports::format_missing_fields;
use anyhow::{bail, Result};
use std::path::Path;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(sheet_path: &Path, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }

    let sheet = load_response_sheet(sheet_path).map_err(|source| PipelineError::LoadFailed {
        path: sheet_path.display().to_string(),
        source,
    })?;

    if !config.behavior.quiet {
        tracing::info!(
            "Scoring {} with {} suggestions",
            sheet_path.display(),
            config.scoring.suggestion_policy
        );
    }

    let evaluation = match evaluate(&sheet, &config.scoring) {
        Outcome::Evaluated(evaluation) => evaluation,
        Outcome::Incomplete(completeness) => {
            eprintln!("{}", format_missing_fields(&completeness));
            return Ok(exit_codes::INCOMPLETE);
        }
        Outcome::NoResult => {
            eprintln!("Total weight is zero: select a non-zero importance for at least one attribute.");
            return Ok(exit_codes::ERROR);
        }
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    let report = render_evaluation(&evaluation, config, &target, Some(sheet_path))?;
    write_output(&report, &target, config.behavior.quiet)?;

    if let Some(threshold) = config.behavior.min_score {
        if evaluation.overall_score() < threshold {
            tracing::error!(
                "QDS {} is below minimum threshold {:.2}",
                evaluation.result.display_score(),
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}
