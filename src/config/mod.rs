//! Configuration module for qds-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use qds_tools::config::{AppConfig, CliOverrides};
//! use qds_tools::scoring::SuggestionPolicy;
//!
//! let mut config = AppConfig::builder()
//!     .suggestion_policy(SuggestionPolicy::WeakestOnly)
//!     .min_score(Some(5.0))
//!     .build();
//!
//! // `--policy below-best` on the command line
//! config.apply_overrides(&CliOverrides {
//!     suggestion_policy: Some(SuggestionPolicy::BelowBest),
//!     ..CliOverrides::default()
//! });
//! assert_eq!(config.scoring.suggestion_policy, SuggestionPolicy::BelowBest);
//! assert_eq!(config.behavior.min_score, Some(5.0));
//! ```
//!
//! # Configuration File
//!
//! Place a `.qds-tools.yaml` file in your project root or `~/.config/qds-tools/`:
//!
//! ```yaml
//! scoring:
//!   suggestion_policy: weakest-only
//! behavior:
//!   min_score: 6.0
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::DEFAULT_CELEBRATION_THRESHOLD;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CliOverrides, OutputConfig, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, search_paths, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate `.qds-tools.yaml` files.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
