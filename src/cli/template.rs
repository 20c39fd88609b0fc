//! Template command handler.
//!
//! Writes an empty response sheet listing every attribute and field.

use crate::model::ResponseSheet;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Empty response sheet as commented YAML.
pub fn template_yaml() -> Result<String> {
    let body = ResponseSheet::template()
        .to_yaml()
        .context("failed to serialize response template")?;
    Ok(format!(
        "# QDS response sheet\n\
         # weight: importance of the attribute (1-5, 0 to ignore it)\n\
         # q1, q2: agreement with each statement (1 = strongly disagree, 5 = strongly agree)\n\
         {body}"
    ))
}

/// Write the template to `output_file`, or stdout.
pub fn run_template(output_file: Option<PathBuf>, quiet: bool) -> Result<i32> {
    let target = OutputTarget::from_option(output_file);
    write_output(&template_yaml()?, &target, quiet)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::check_completeness;
    use crate::model::AttributeKey;

    #[test]
    fn test_template_parses_back_empty() {
        let yaml = template_yaml().unwrap();
        let sheet = ResponseSheet::from_yaml_str(&yaml).unwrap();
        assert_eq!(sheet, ResponseSheet::template());
        assert_eq!(
            check_completeness(&sheet).missing_count(),
            AttributeKey::ALL.len() * 3
        );
    }

    #[test]
    fn test_template_mentions_every_attribute() {
        let yaml = template_yaml().unwrap();
        for key in AttributeKey::ALL {
            assert!(yaml.contains(&format!("{key}:")));
        }
    }
}
