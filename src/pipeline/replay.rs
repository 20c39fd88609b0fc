//! Scripted sessions.
//!
//! A replay script stands in for a user clicking through the questionnaire:
//! each event edits the in-memory sheet or requests generation, and every
//! step records what the session would show.
//!
//! ```yaml
//! initial:
//!   security: { weight: 5, q1: 2, q2: 2 }
//! events:
//!   - event: set
//!     field: usability_q1
//!     value: 4
//!   - event: generate
//! ```

use super::load::load_script;
use super::session::{Session, SessionEvent};
use crate::config::ScoringConfig;
use crate::error::{ErrorContext, Result};
use crate::model::{FieldId, ResponseSheet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Select a value for a field
    Set { field: FieldId, value: i64 },
    /// Deselect a field
    Clear { field: FieldId },
    /// Press the generate button
    Generate,
}

/// A starting sheet plus the actions applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayScript {
    pub initial: ResponseSheet,
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    /// Load a script, choosing JSON or YAML by extension.
    pub fn load(path: &Path) -> Result<Self> {
        load_script(path)
    }
}

/// The session's response to one scripted event.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStep {
    /// Zero-based position in the script
    pub index: usize,
    pub event: ReplayEvent,
    pub outcome: SessionEvent,
}

/// Drive a fresh [`Session`] through every event of `script`.
///
/// Stops at the first event carrying an invalid value.
pub fn run_replay(script: &ReplayScript, config: &ScoringConfig) -> Result<Vec<ReplayStep>> {
    let mut sheet = script.initial.clone();
    let mut session = Session::new(config.clone());
    let mut steps = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        let outcome = match event {
            ReplayEvent::Set { field, value } => {
                sheet
                    .set_field(*field, *value)
                    .with_context(|| format!("event {index}"))?;
                session.on_value_changed(&sheet)
            }
            ReplayEvent::Clear { field } => {
                sheet.clear_field(*field);
                session.on_value_changed(&sheet)
            }
            ReplayEvent::Generate => session.generate(&sheet),
        };
        tracing::debug!(index, ?event, "replayed event");
        steps.push(ReplayStep {
            index,
            event: event.clone(),
            outcome,
        });
    }

    Ok(steps)
}
