// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Folding failures are kept in their own type so that library callers
//! who only fold documents never see I/O or template concerns.

use std::fmt;
use thiserror::Error;

/// Which kind of turn marker a label was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    /// Even-indexed marker opening a White move.
    Zero,
    /// Odd-indexed marker continuing a line in progress.
    One,
}

impl fmt::Display for TurnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero turn"),
            Self::One => write!(f, "one turn"),
        }
    }
}

/// Failure of a single fold call.
///
/// Any of these aborts the whole fold; no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    #[error("Malformed {turn} label '{label}': {source}")]
    MalformedLabel {
        label: String,
        turn: TurnKind,
        source: std::num::ParseIntError,
    },

    #[error("Ply numbered by {turn} label '{label}' is out of range")]
    PlyOutOfRange { label: String, turn: TurnKind },
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fold(#[from] FoldError),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedDocument(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_label_message_names_the_label() {
        let source = "x1".parse::<u32>().unwrap_err();
        let err = FoldError::MalformedLabel {
            label: "x1".to_string(),
            turn: TurnKind::One,
            source,
        };
        let message = err.to_string();
        assert!(message.contains("one turn"));
        assert!(message.contains("'x1'"));
    }

    #[test]
    fn fold_error_converts_transparently() {
        let source = "".parse::<u32>().unwrap_err();
        let fold = FoldError::MalformedLabel {
            label: String::new(),
            turn: TurnKind::Zero,
            source,
        };
        let expected = fold.to_string();
        let app: AppError = fold.into();
        assert_eq!(app.to_string(), expected);
    }

    #[test]
    fn out_of_range_message_names_the_label() {
        let err = FoldError::PlyOutOfRange {
            label: "4294967296".to_string(),
            turn: TurnKind::Zero,
        };
        assert!(err.to_string().contains("'4294967296'"));
    }
}
