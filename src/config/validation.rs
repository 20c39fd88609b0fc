//! Configuration validation for qds-tools.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig};
use crate::scoring::{MAX_SCORE, MIN_SCORE};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn check_score_range(field: &str, value: f64) -> Option<ConfigError> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        None
    } else {
        Some(ConfigError {
            field: field.to_string(),
            message: format!("Must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"),
        })
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        check_score_range("scoring.celebration_threshold", self.celebration_threshold)
            .into_iter()
            .collect()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_ref().and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.min_score
            .and_then(|score| check_score_range("behavior.min_score", score))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = AppConfig::builder().celebration_threshold(11.0).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.celebration_threshold");
    }

    #[test]
    fn test_threshold_nan_rejected() {
        let config = AppConfig::builder().celebration_threshold(f64::NAN).build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_min_score_out_of_range() {
        let config = AppConfig::builder().min_score(Some(-0.5)).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "behavior.min_score");
    }

    #[test]
    fn test_output_file_parent_missing() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("/nonexistent/dir/report.json")))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");
    }

    #[test]
    fn test_output_file_in_cwd_ok() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("report.json")))
            .build();
        assert!(config.is_valid());
    }
}
