//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary if TTY, JSON otherwise
    #[default]
    Auto,
    /// Human-readable terminal summary
    Summary,
    /// Structured JSON output
    Json,
    /// Markdown document
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Include the per-attribute score table
    pub include_attribute_scores: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            include_attribute_scores: true,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Title to print, falling back to the default heading.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Quality Design Score")
    }

    /// Record the response sheet the report was built from.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>) -> Self {
        self.metadata.source_path = Some(path.into());
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Response sheet path
    pub source_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_serde() {
        for format in [
            ReportFormat::Auto,
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
        ] {
            let yaml = serde_yaml::to_string(&format).unwrap();
            assert_eq!(yaml.trim(), format.to_string());
        }
    }

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default().with_source("sheet.yaml");
        assert_eq!(config.title_or_default(), "Quality Design Score");
        assert!(config.include_attribute_scores);
        assert_eq!(config.metadata.source_path.as_deref(), Some("sheet.yaml"));
        assert_eq!(config.metadata.tool_version, env!("CARGO_PKG_VERSION"));
    }
}
