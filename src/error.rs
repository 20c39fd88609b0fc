//! Unified error types for qds-tools.
//!
//! The scoring core itself never fails: incompleteness and zero total weight
//! are ordinary outcomes. Errors here cover everything around it, such as
//! malformed response sheets, unreadable files and invalid field edits.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qds-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QdsError {
    /// Errors while reading or interpreting questionnaire responses
    #[error("Invalid responses: {context}")]
    Response {
        context: String,
        #[source]
        source: ResponseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific response error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResponseErrorKind {
    #[error("Likert rating {value} is outside 1..=5")]
    RatingOutOfRange { value: i64 },

    #[error("Unknown attribute key: {0}")]
    UnknownAttribute(String),

    #[error("Unknown field '{field}' (expected weight, q1 or q2)")]
    UnknownField { field: String },

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Convenient Result type for qds-tools operations
pub type Result<T> = std::result::Result<T, QdsError>;

impl QdsError {
    /// Create a response error with context
    pub fn response(context: impl Into<String>, source: ResponseErrorKind) -> Self {
        Self::Response {
            context: context.into(),
            source,
        }
    }

    /// Create an out-of-range rating error
    pub fn rating_out_of_range(value: i64) -> Self {
        Self::response(
            "rating must be a Likert value",
            ResponseErrorKind::RatingOutOfRange { value },
        )
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(key: impl Into<String>) -> Self {
        Self::response(
            "attribute is not in the catalog",
            ResponseErrorKind::UnknownAttribute(key.into()),
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for QdsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for QdsError {
    fn from(err: serde_json::Error) -> Self {
        Self::response(
            "JSON deserialization",
            ResponseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for QdsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::response(
            "YAML deserialization",
            ResponseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension traits
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first, so a failure deep inside a
/// sheet load reads like `loading sheet.yaml: YAML deserialization`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<QdsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: QdsError, new_ctx: &str) -> QdsError {
    match err {
        QdsError::Response {
            context: existing,
            source,
        } => QdsError::Response {
            context: chain_context(new_ctx, &existing),
            source,
        },
        QdsError::Io {
            path,
            message,
            source,
        } => QdsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        QdsError::Validation(msg) => QdsError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing is chained yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QdsError::rating_out_of_range(7);
        let msg = err.to_string();
        assert!(msg.contains("Invalid responses"));
        assert!(msg.contains("Likert value"));
    }

    #[test]
    fn test_context_chaining() {
        let result: Result<()> = Err(QdsError::unknown_attribute("elegance"));
        let err = result.context("loading sheet.yaml").unwrap_err();
        match err {
            QdsError::Response { context, source } => {
                assert_eq!(context, "loading sheet.yaml: attribute is not in the catalog");
                assert!(matches!(source, ResponseErrorKind::UnknownAttribute(ref k) if k == "elegance"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy() {
        let ok: Result<u8> = Ok(3);
        let value = ok
            .with_context(|| -> String { panic!("closure must not run on success") })
            .unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = QdsError::io("responses.yaml", io);
        assert!(matches!(err, QdsError::Io { path: Some(ref p), .. } if p.ends_with("responses.yaml")));
    }
}
