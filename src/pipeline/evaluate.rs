//! Collect → aggregate → select in one call.

use crate::collector::{collect, Completeness, ResponseSource};
use crate::config::ScoringConfig;
use crate::scoring::{compute_scores, select_insights, AggregateResult, Insights};
use serde::Serialize;

/// A fully scored questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub result: AggregateResult,
    pub insights: Insights,
    /// Score reached the celebration threshold
    pub celebrate: bool,
}

impl Evaluation {
    #[must_use]
    pub fn overall_score(&self) -> f64 {
        self.result.overall_score
    }
}

/// What a single evaluation attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Some fields are unanswered; nothing was computed
    Incomplete(Completeness),
    /// All fields answered but every weight is zero
    NoResult,
    Evaluated(Evaluation),
}

impl Outcome {
    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            Self::Evaluated(evaluation) => Some(evaluation),
            Self::Incomplete(_) | Self::NoResult => None,
        }
    }
}

/// Run the scoring flow over the current state of `source`.
pub fn evaluate<S: ResponseSource + ?Sized>(source: &S, config: &ScoringConfig) -> Outcome {
    let collected = match collect(source) {
        Ok(collected) => collected,
        Err(completeness) => return Outcome::Incomplete(completeness),
    };

    let Some(result) = compute_scores(&collected.weights, &collected.ratings) else {
        tracing::debug!("total weight is zero, no score computed");
        return Outcome::NoResult;
    };

    let insights = select_insights(
        &result.attribute_scores,
        &collected.ratings,
        config.suggestion_policy,
    );
    let celebrate = result.overall_score >= config.celebration_threshold;

    Outcome::Evaluated(Evaluation {
        result,
        insights,
        celebrate,
    })
}
