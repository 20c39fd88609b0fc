//! Configuration types for qds-tools.

use super::defaults::DEFAULT_CELEBRATION_THRESHOLD;
use crate::reports::ReportFormat;
use crate::scoring::SuggestionPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI values are layered over file values with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring and suggestion settings
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the suggestion policy.
    pub const fn suggestion_policy(mut self, policy: SuggestionPolicy) -> Self {
        self.config.scoring.suggestion_policy = policy;
        self
    }

    /// Set the score at or above which a result is celebrated.
    pub const fn celebration_threshold(mut self, threshold: f64) -> Self {
        self.config.scoring.celebration_threshold = threshold;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Fail when the score is below this value.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configs
// ============================================================================

/// Scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Which attributes receive improvement suggestions
    pub suggestion_policy: SuggestionPolicy,
    /// Scores at or above this value are celebrated (0-10)
    pub celebration_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            suggestion_policy: SuggestionPolicy::default(),
            celebration_threshold: DEFAULT_CELEBRATION_THRESHOLD,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Single-line JSON, Markdown without the metadata block
    pub compact: bool,
}

/// Values given on the command line.
///
/// `None` leaves the file value in place, so an explicit flag always wins,
/// even when it names the default. Switch flags can only turn a setting on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub suggestion_policy: Option<SuggestionPolicy>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub compact: bool,
    pub quiet: bool,
    pub min_score: Option<f64>,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when the QDS is below this value (0-10)
    pub min_score: Option<f64>,
}
