//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::Evaluation;
use crate::scoring::Guidance;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the response sheet path and tool version
    include_metadata: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_metadata: true,
        }
    }

    /// Omit the metadata block
    #[must_use]
    pub const fn without_metadata(mut self) -> Self {
        self.include_metadata = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let result = &evaluation.result;
        let mut md = String::new();

        writeln!(md, "# {}", escape_markdown_inline(config.title_or_default()))?;
        writeln!(md)?;

        if self.include_metadata {
            if let Some(source) = &config.metadata.source_path {
                writeln!(md, "- **Responses:** `{}`", source.replace('`', "'"))?;
            }
            writeln!(md, "- **Tool:** qds-tools {}", config.metadata.tool_version)?;
            writeln!(md)?;
        }

        writeln!(
            md,
            "**QDS: {} / 10** ({:.0}% of scale)",
            result.display_score(),
            result.percentage()
        )?;
        writeln!(md)?;

        if config.include_attribute_scores {
            writeln!(md, "## Attribute Scores")?;
            writeln!(md)?;
            writeln!(md, "| Attribute | Score |")?;
            writeln!(md, "|-----------|------:|")?;
            for score in &result.attribute_scores {
                writeln!(
                    md,
                    "| {} | {:.2} |",
                    escape_markdown_table(score.label()),
                    score.score
                )?;
            }
            writeln!(md)?;
        }

        let standing = &evaluation.insights.standing;
        writeln!(md, "## Standing")?;
        writeln!(md)?;
        writeln!(
            md,
            "- **Strongest:** {}",
            escape_markdown_inline(&standing.strongest_text())
        )?;
        writeln!(
            md,
            "- **Weakest:** {}",
            escape_markdown_inline(&standing.weakest_text())
        )?;

        match &evaluation.insights.guidance {
            Guidance::Suggestions(suggestions) => {
                writeln!(md)?;
                writeln!(md, "## Recommendations")?;
                writeln!(md)?;
                for suggestion in suggestions {
                    writeln!(
                        md,
                        "- **{}:** {}",
                        escape_markdown_inline(suggestion.label),
                        escape_markdown_inline(suggestion.text)
                    )?;
                }
            }
            guidance => {
                if let Some(message) = guidance.global_message() {
                    writeln!(md)?;
                    writeln!(md, "> {}", escape_markdown_inline(message))?;
                }
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
