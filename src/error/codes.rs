//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 3xx: Config errors
//! - 6xx: Output errors (files, clipboard)
//! - 7xx: Terminal errors
//! - 8xx: Validation errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine mode output.
///
/// Each variant maps to a numeric code (e.g., `ValidationFailed` -> E801).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Output errors (6xx)
    // ========================================
    /// E601: Generic filesystem failure
    IoError,
    /// E602: Failed to write the alert file
    ExportFailed,
    /// E603: System clipboard could not be reached
    ClipboardUnavailable,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Terminal errors (7xx)
    // ========================================
    /// E701: Interactive wizard needs a TTY
    TerminalRequired,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: Required field was left empty
    ValidationFailed,
}

impl ErrorCode {
    /// Numeric form used in `E<nnn>` identifiers.
    #[must_use]
    pub const fn numeric(self) -> u16 {
        match self {
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,
            Self::IoError => 601,
            Self::ExportFailed => 602,
            Self::ClipboardUnavailable => 603,
            Self::SerializationError => 605,
            Self::TerminalRequired => 701,
            Self::ValidationFailed => 801,
        }
    }

    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::ConfigInvalid | Self::ConfigMissingRequired => "config",
            Self::IoError
            | Self::ExportFailed
            | Self::ClipboardUnavailable
            | Self::SerializationError => "output",
            Self::TerminalRequired => "terminal",
            Self::ValidationFailed => "validation",
        }
    }

    /// Whether the operator can fix the problem and retry the same action.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::ConfigInvalid => "Check the config file syntax (TOML) and value types",
            Self::ConfigMissingRequired => "Pass --config or set ALERTA_CONFIG to an existing file",
            Self::IoError => "Check file permissions and available disk space",
            Self::ExportFailed => {
                "Check that the output directory exists and is writable, then save again"
            }
            Self::ClipboardUnavailable => {
                "No clipboard provider found; save the message to a file instead"
            }
            Self::SerializationError => "Report this as a bug",
            Self::TerminalRequired => {
                "Run the wizard from an interactive terminal, or use `alerta compose`"
            }
            Self::ValidationFailed => "Fill in the field, or skip it explicitly",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}
