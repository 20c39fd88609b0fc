//! Replay command handler.
//!
//! Runs a scripted session and renders every step that would change the
//! screen.

use super::render_evaluation;
use crate::config::AppConfig;
use crate::pipeline::{
    exit_codes, run_replay, write_output, OutputTarget, PipelineError, ReplayEvent, ReplayScript,
    ReplayStep, SessionEvent,
};
use crate::reports::format_missing_fields;
use anyhow::Result;
use std::path::Path;

/// Run a replay script, returning the desired exit code.
///
/// Exits with the incomplete code when the last step was a rejected
/// generate request.
pub fn run_replay_script(script_path: &Path, config: &AppConfig) -> Result<i32> {
    let script = ReplayScript::load(script_path).map_err(|source| PipelineError::LoadFailed {
        path: script_path.display().to_string(),
        source,
    })?;

    if !config.behavior.quiet {
        tracing::info!(
            "Replaying {} event(s) from {}",
            script.events.len(),
            script_path.display()
        );
    }

    let steps = run_replay(&script, &config.scoring)?;
    let target = OutputTarget::from_option(config.output.file.clone());

    let mut sections = Vec::with_capacity(steps.len());
    for step in &steps {
        sections.push(render_step(step, config, &target)?);
    }
    write_output(&sections.join("\n\n"), &target, config.behavior.quiet)?;

    let code = match steps.last().map(|s| &s.outcome) {
        Some(SessionEvent::Rejected(_)) => exit_codes::INCOMPLETE,
        Some(SessionEvent::NoResult) => exit_codes::ERROR,
        _ => exit_codes::SUCCESS,
    };
    Ok(code)
}

fn describe(event: &ReplayEvent) -> String {
    match event {
        ReplayEvent::Set { field, value } => format!("set {field} = {value}"),
        ReplayEvent::Clear { field } => format!("clear {field}"),
        ReplayEvent::Generate => "generate".to_string(),
    }
}

fn render_step(step: &ReplayStep, config: &AppConfig, target: &OutputTarget) -> Result<String> {
    let header = format!("[{}] {}", step.index + 1, describe(&step.event));
    let body = match &step.outcome {
        SessionEvent::Idle => "(no refresh)".to_string(),
        SessionEvent::Rejected(completeness) => format_missing_fields(completeness),
        SessionEvent::NoResult => "Total weight is zero, no score computed.".to_string(),
        SessionEvent::Rendered(evaluation) => render_evaluation(evaluation, config, target, None)?,
    };
    Ok(format!("{header}\n{body}"))
}
