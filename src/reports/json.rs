//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::AttributeKey;
use crate::pipeline::Evaluation;
use crate::scoring::{Guidance, Standing};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let result = &evaluation.result;
        let report = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "qds-tools".to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: Utc::now().to_rfc3339(),
                source: config.metadata.source_path.clone(),
            },
            score: result.overall_score,
            display_score: result.display_score(),
            percentage: result.percentage(),
            attribute_scores: config.include_attribute_scores.then(|| {
                result
                    .attribute_scores
                    .iter()
                    .map(|s| JsonAttributeScore {
                        key: s.key,
                        label: s.label(),
                        score: s.score,
                    })
                    .collect()
            }),
            standing: &evaluation.insights.standing,
            guidance: &evaluation.insights.guidance,
            message: evaluation.insights.guidance.global_message(),
            celebrate: evaluation.celebrate,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    score: f64,
    display_score: String,
    percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_scores: Option<Vec<JsonAttributeScore>>,
    standing: &'a Standing,
    guidance: &'a Guidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    celebrate: bool,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonAttributeScore {
    key: AttributeKey,
    label: &'static str,
    score: f64,
}
