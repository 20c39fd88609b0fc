//! Attributes command handler.
//!
//! Lists the quality attribute catalog.

use crate::model::{catalog, FieldId};
use crate::pipeline::exit_codes;
use anyhow::Result;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

/// Print the catalog as a text table, or as JSON when `as_json` is set.
pub fn run_attributes(as_json: bool) -> Result<i32> {
    let output = if as_json {
        format_attributes_json()?
    } else {
        format_attributes_table()
    };
    println!("{output}");
    Ok(exit_codes::SUCCESS)
}

fn format_attributes_json() -> Result<String> {
    let attributes: Vec<_> = catalog()
        .map(|attr| {
            json!({
                "key": attr.key,
                "label": attr.label,
                "fields": FieldId::all_for(attr.key),
                "suggestion": attr.suggestion,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&attributes)?)
}

fn format_attributes_table() -> String {
    let key_width = catalog()
        .map(|attr| attr.key.as_str().len())
        .max()
        .unwrap_or(0);
    let label_width = catalog()
        .map(|attr| UnicodeWidthStr::width(attr.label))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for attr in catalog() {
        let padding = label_width.saturating_sub(UnicodeWidthStr::width(attr.label));
        lines.push(format!(
            "{:<key_width$}  {}{}  {}",
            attr.key.as_str(),
            attr.label,
            " ".repeat(padding),
            attr.suggestion
        ));
    }
    lines.join("\n")
}
