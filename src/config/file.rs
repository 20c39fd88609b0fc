//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, CliOverrides};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".qds-tools.yaml",
    ".qds-tools.yml",
    "qds-tools.yaml",
    "qds-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/qds-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_paths()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched during discovery, in order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|d| d.join("qds-tools")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-Line Overrides
// ============================================================================

impl AppConfig {
    /// Layer command-line values over this config. Every value the user
    /// actually passed replaces the file value.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(policy) = overrides.suggestion_policy {
            self.scoring.suggestion_policy = policy;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.min_score.is_some() {
            self.behavior.min_score = overrides.min_score;
        }
        self.output.no_color |= overrides.no_color;
        self.output.compact |= overrides.compact;
        self.behavior.quiet |= overrides.quiet;
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &CliOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# QDS Tools Configuration
# Place this file at .qds-tools.yaml in your project root or ~/.config/qds-tools/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# QDS Tools Configuration File
# =============================
#
# Place it at:
#   - .qds-tools.yaml in your project root
#   - ~/.config/qds-tools/qds-tools.yaml for global config
#
# CLI arguments always override file settings.

# Scoring configuration
scoring:
  # Which attributes get improvement suggestions:
  #   below-best   - every attribute scoring below the best one
  #   weakest-only - only the attributes tied for the lowest score
  suggestion_policy: below-best
  # Scores at or above this value (0-10) are celebrated
  celebration_threshold: 7.0

# Output configuration
output:
  # Format: auto, summary, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: qds-report.json
  # Disable colored output
  no_color: false
  # Single-line JSON, Markdown without the metadata block
  compact: false

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 1 when the score is below this value (0-10)
  # min_score: 6.0
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
