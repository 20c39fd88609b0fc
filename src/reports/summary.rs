//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::Evaluation;
use crate::scoring::{Guidance, Standing, MAX_SCORE};
use unicode_width::UnicodeWidthStr;

/// Cells in the gradient bar
const GRADIENT_WIDTH: usize = 40;
/// Cells in a per-attribute score bar
const ATTRIBUTE_BAR_WIDTH: usize = 10;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color band for a position on the red → yellow → green scale.
fn band_color(fraction: f64) -> &'static str {
    if fraction < 0.4 {
        "red"
    } else if fraction < 0.7 {
        "yellow"
    } else {
        "green"
    }
}

/// Pad `text` to `width` terminal columns.
fn pad_display(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Index of the indicator cell for a 0–100 percentage.
fn indicator_cell(percentage: f64, width: usize) -> usize {
    let last = width.saturating_sub(1);
    let fraction = (percentage / 100.0).clamp(0.0, 1.0);
    // fraction is clamped, so the product fits in [0, last]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cell = (fraction * last as f64).round() as usize;
    cell.min(last)
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Gradient scale from 0 to 10 with a marker at the score.
    fn gradient_bar(&self, percentage: f64) -> String {
        let marker = indicator_cell(percentage, GRADIENT_WIDTH);
        let mut bar = String::new();
        for cell in 0..GRADIENT_WIDTH {
            #[allow(clippy::cast_precision_loss)]
            let fraction = cell as f64 / (GRADIENT_WIDTH - 1) as f64;
            let glyph = if cell == marker { "▼" } else { "━" };
            bar.push_str(&self.color(glyph, band_color(fraction)));
        }
        format!("0 {bar} 10")
    }

    fn score_bar(&self, score: f64) -> String {
        let fraction = (score / MAX_SCORE).clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = ((fraction * ATTRIBUTE_BAR_WIDTH as f64).round() as usize).min(ATTRIBUTE_BAR_WIDTH);
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(ATTRIBUTE_BAR_WIDTH - filled)
        );
        self.color(&bar, band_color(fraction))
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let result = &evaluation.result;
        let mut lines = Vec::new();

        // Header
        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(GRADIENT_WIDTH + 5).as_str(), "dim"));

        if let Some(source) = &config.metadata.source_path {
            lines.push(format!("{}  {source}", self.color("Responses:", "cyan")));
        }

        let score_text = format!("{} / 10", result.display_score());
        lines.push(format!(
            "{}  {}",
            self.color("QDS:", "cyan"),
            self.color(&score_text, band_color(result.percentage() / 100.0))
        ));
        lines.push(self.gradient_bar(result.percentage()));

        if config.include_attribute_scores {
            lines.push(String::new());
            lines.push(self.color("Attribute scores:", "bold"));
            let label_width = result
                .attribute_scores
                .iter()
                .map(|s| UnicodeWidthStr::width(s.label()))
                .max()
                .unwrap_or(0);
            for score in &result.attribute_scores {
                lines.push(format!(
                    "  {}  {:>5.2}  {}",
                    pad_display(score.label(), label_width),
                    score.score,
                    self.score_bar(score.score)
                ));
            }
        }

        // Standing
        lines.push(String::new());
        let standing = &evaluation.insights.standing;
        let (strong_color, weak_color) = match standing {
            Standing::Tied => ("dim", "dim"),
            Standing::Ranked { .. } => ("green", "red"),
        };
        lines.push(format!(
            "{}  {}",
            self.color("Strongest:", "cyan"),
            self.color(&standing.strongest_text(), strong_color)
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Weakest:  ", "cyan"),
            self.color(&standing.weakest_text(), weak_color)
        ));

        // Guidance
        match &evaluation.insights.guidance {
            Guidance::AllHighest | Guidance::AllLowest => {
                if let Some(message) = evaluation.insights.guidance.global_message() {
                    lines.push(String::new());
                    lines.push(message.to_string());
                }
            }
            Guidance::NoSuggestions => {}
            Guidance::Suggestions(suggestions) => {
                lines.push(String::new());
                lines.push(self.color("Recommendations:", "bold"));
                for suggestion in suggestions {
                    lines.push(format!(
                        "  {} {}",
                        self.color(&format!("{}:", suggestion.label), "yellow"),
                        suggestion.text
                    ));
                }
            }
        }

        if evaluation.celebrate {
            lines.push(String::new());
            lines.push(self.color("Excellent design quality. Keep it up!", "green"));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
