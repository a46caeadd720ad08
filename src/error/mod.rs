//! Error handling for alerta.
//!
//! This module provides:
//! - [`AlertaError`]: The main error enum for all alerta operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Error with code, suggestion and context for JSON output

mod codes;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for alerta operations.
#[derive(Error, Debug)]
pub enum AlertaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Required field is empty at step {}: {label}", .step + 1)]
    Validation { step: usize, label: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Interactive terminal required: {0}")]
    TerminalRequired(String),
}

impl AlertaError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::Export { .. } => ErrorCode::ExportFailed,
            Self::Clipboard(_) => ErrorCode::ClipboardUnavailable,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::TerminalRequired(_) => ErrorCode::TerminalRequired,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Validation { step, label } => {
                Some(serde_json::json!({ "step": step, "label": label }))
            }
            Self::Export { path, .. } => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Whether this is a required-field validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_alerta_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "VALIDATION_FAILED")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 801)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether the operator can retry after fixing the cause
    pub recoverable: bool,

    /// Error category (e.g., "validation", "output")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            numeric_code: code.numeric(),
            message: message.into(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    #[must_use]
    pub fn from_alerta_error(err: &AlertaError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&AlertaError> for StructuredError {
    fn from(err: &AlertaError) -> Self {
        Self::from_alerta_error(err)
    }
}

/// Result type alias using `AlertaError`.
pub type Result<T> = std::result::Result<T, AlertaError>;
