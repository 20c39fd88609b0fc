//! Check command handler.
//!
//! Reports which questionnaire fields are still unanswered, without scoring.

use crate::collector::check_completeness;
use crate::model::FieldId;
use crate::pipeline::{exit_codes, load_response_sheet, PipelineError};
use crate::reports::format_missing_fields;
use anyhow::Result;
use std::path::Path;

/// Run the check command, returning the desired exit code.
pub fn run_check(sheet_path: &Path, quiet: bool) -> Result<i32> {
    let sheet = load_response_sheet(sheet_path).map_err(|source| PipelineError::LoadFailed {
        path: sheet_path.display().to_string(),
        source,
    })?;

    let completeness = check_completeness(&sheet);
    if completeness.is_complete() {
        if !quiet {
            let total = crate::model::AttributeKey::ALL.len() * FieldId::PER_ATTRIBUTE;
            println!("All {total} fields answered.");
        }
        return Ok(exit_codes::SUCCESS);
    }

    tracing::debug!(
        attributes = completeness.incomplete_attributes().count(),
        "incomplete attributes"
    );
    eprintln!("{}", format_missing_fields(&completeness));
    Ok(exit_codes::INCOMPLETE)
}
