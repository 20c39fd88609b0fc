//! Pipeline orchestration for questionnaire scoring.
//!
//! Ties the collector, aggregator and insight selector into the
//! collect → aggregate → select flow, and provides the session, loading and
//! output helpers shared by CLI command handlers.

mod evaluate;
mod load;
mod output;
mod replay;
mod session;

pub use evaluate::{evaluate, Evaluation, Outcome};
pub use load::{load_response_sheet, parse_str, InputFormat};
pub use output::{write_output, OutputTarget};
pub use replay::{run_replay, ReplayEvent, ReplayScript, ReplayStep};
pub use session::{Session, SessionEvent};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input file
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: crate::error::QdsError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Score is below the requested minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// Some questionnaire fields are unanswered
    pub const INCOMPLETE: i32 = 2;
    /// Every weight is zero, or an error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_MIN_SCORE, 1);
        assert_eq!(exit_codes::INCOMPLETE, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::LoadFailed {
            path: "sheet.yaml".to_string(),
            source: crate::error::QdsError::validation("empty"),
        };
        assert!(err.to_string().starts_with("Load failed for sheet.yaml"));
    }
}
