//! Where rendered reports go.
//!
//! The target decides the concrete format for `auto` and whether ANSI colour
//! is allowed.

use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Destination of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Resolve `auto` to the summary on a terminal, JSON anywhere else.
    #[must_use]
    pub fn resolve_format(&self, format: ReportFormat) -> ReportFormat {
        match format {
            ReportFormat::Auto if self.is_terminal() => ReportFormat::Summary,
            ReportFormat::Auto => ReportFormat::Json,
            other => other,
        }
    }

    /// Colour is used on terminals unless disabled by flag or `NO_COLOR`.
    #[must_use]
    pub fn wants_color(&self, no_color_flag: bool) -> bool {
        !no_color_flag && std::env::var_os("NO_COLOR").is_none() && self.is_terminal()
    }
}

/// Write a rendered report. Files always end with a newline.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    let OutputTarget::File(path) = target else {
        println!("{content}");
        return Ok(());
    };

    let mut body = content.to_string();
    if !body.ends_with('\n') {
        body.push('\n');
    }
    std::fs::write(path, body)
        .with_context(|| format!("cannot write report to {}", path.display()))?;
    if !quiet {
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}
