//! Reading response sheets and replay scripts from disk.

use crate::error::{ErrorContext, QdsError, Result};
use crate::model::ResponseSheet;
use serde::de::DeserializeOwned;
use std::path::Path;

/// On-disk encoding of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    /// Unknown extension: JSON is tried first, then YAML
    Unknown,
}

impl InputFormat {
    /// Pick the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Unknown,
        }
    }
}

/// Deserialize `content` according to `format`.
pub fn parse_str<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        InputFormat::Unknown => serde_json::from_str(content).or_else(|json_err| {
            tracing::debug!("not valid JSON ({json_err}), trying YAML");
            serde_yaml::from_str(content).map_err(QdsError::from)
        }),
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| QdsError::io(path, e))?;
    parse_str(&content, InputFormat::from_path(path))
        .with_context(|| format!("loading {}", path.display()))
}

/// Load a response sheet, choosing JSON or YAML by extension.
pub fn load_response_sheet(path: &Path) -> Result<ResponseSheet> {
    tracing::debug!("loading response sheet {}", path.display());
    load_file(path)
}

pub(crate) fn load_script<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!("loading replay script {}", path.display());
    load_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeKey, Question};
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("answers")), InputFormat::Unknown);
    }

    #[test]
    fn test_unknown_extension_falls_back_to_yaml() {
        let sheet: ResponseSheet = parse_str("security:\n  q1: 2\n", InputFormat::Unknown).unwrap();
        let security = sheet.get(AttributeKey::Security).unwrap();
        assert_eq!(security.answer(Question::First).map(|r| r.value()), Some(2));
    }

    #[test]
    fn test_unknown_extension_reads_json() {
        let sheet: ResponseSheet =
            parse_str(r#"{"usability": {"weight": 4}}"#, InputFormat::Unknown).unwrap();
        assert_eq!(sheet.get(AttributeKey::Usability).unwrap().weight, Some(4));
    }

    #[test]
    fn test_load_response_sheet_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("answers.yaml");
        std::fs::write(&path, "reliability:\n  weight: 2\n  q1: 5\n  q2: 4\n").unwrap();

        let sheet = load_response_sheet(&path).unwrap();
        assert_eq!(sheet.get(AttributeKey::Reliability).unwrap().weight, Some(2));
    }

    #[test]
    fn test_load_errors_carry_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"security": {"q1": 9}}"#).unwrap();

        let err = load_response_sheet(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_response_sheet(Path::new("/nonexistent/sheet.yaml")).unwrap_err();
        assert!(matches!(err, QdsError::Io { .. }));
    }
}
