//! Interactive session state.
//!
//! A questionnaire front-end generates results once on request, then keeps
//! them live as answers change. [`Session`] tracks whether that first request
//! has happened and which fields were missing on the last rejected attempt.

use super::evaluate::{evaluate, Evaluation, Outcome};
use crate::collector::{check_completeness, Completeness, ResponseSource};
use crate::config::ScoringConfig;
use crate::model::FieldId;
use std::collections::BTreeSet;

/// What the presentation layer should do after a trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Nothing to refresh
    Idle,
    /// Generation was requested but fields are missing
    Rejected(Completeness),
    /// Complete, but every weight is zero
    NoResult,
    /// Fresh results to display
    Rendered(Evaluation),
}

/// Caller-owned replacement for a global "results shown" flag.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ScoringConfig,
    has_generated: bool,
    last_missing: BTreeSet<FieldId>,
}

impl Session {
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            has_generated: false,
            last_missing: BTreeSet::new(),
        }
    }

    /// Whether results have been generated at least once. Never resets.
    #[must_use]
    pub const fn has_generated(&self) -> bool {
        self.has_generated
    }

    /// Fields reported missing by the most recent rejected `generate`.
    #[must_use]
    pub const fn last_missing(&self) -> &BTreeSet<FieldId> {
        &self.last_missing
    }

    /// Explicit request to show results.
    pub fn generate<S: ResponseSource + ?Sized>(&mut self, source: &S) -> SessionEvent {
        match evaluate(source, &self.config) {
            Outcome::Incomplete(completeness) => {
                tracing::debug!(
                    missing = completeness.missing_count(),
                    "generate rejected, responses incomplete"
                );
                self.last_missing = completeness.missing_fields().clone();
                SessionEvent::Rejected(completeness)
            }
            outcome => {
                self.has_generated = true;
                self.last_missing.clear();
                Self::event_for(outcome)
            }
        }
    }

    /// Any field changed. Refreshes silently once results have been shown.
    pub fn on_value_changed<S: ResponseSource + ?Sized>(&mut self, source: &S) -> SessionEvent {
        if !self.has_generated {
            return SessionEvent::Idle;
        }
        if !check_completeness(source).is_complete() {
            return SessionEvent::Idle;
        }
        Self::event_for(evaluate(source, &self.config))
    }

    fn event_for(outcome: Outcome) -> SessionEvent {
        match outcome {
            Outcome::Evaluated(evaluation) => SessionEvent::Rendered(evaluation),
            Outcome::NoResult => SessionEvent::NoResult,
            Outcome::Incomplete(_) => SessionEvent::Idle,
        }
    }
}
