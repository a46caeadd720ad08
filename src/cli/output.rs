use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{AlertaError, Result, StructuredError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Error payload printed on stdout in machine mode.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: bool,
    #[serde(flatten)]
    pub details: StructuredError,
}

impl From<&AlertaError> for ErrorResponse {
    fn from(err: &AlertaError) -> Self {
        Self {
            error: true,
            details: err.to_structured(),
        }
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    colors: bool,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
            colors: true,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
            colors: false,
        }
    }

    #[must_use]
    pub const fn for_format(format: OutputFormat) -> Self {
        if format.use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        let line = if self.colors {
            style(text).bold().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        let line = if self.colors {
            style(text).bold().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self.lines.push("-".repeat(text.chars().count().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key = if self.colors {
            style(key).dim().to_string()
        } else {
            key.to_string()
        };
        self.lines
            .push(format!("{key:width$} {value}", width = self.key_width));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn output_format_default_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }

    #[test]
    fn output_format_flags() {
        assert!(OutputFormat::Human.use_colors());
        assert!(!OutputFormat::Plain.use_colors());
        assert!(!OutputFormat::Json.use_colors());
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(!OutputFormat::Plain.is_machine_readable());
    }

    #[test]
    fn plain_layout_has_no_escape_codes() {
        let mut layout = HumanLayout::plain();
        layout
            .title("Alerta formatado")
            .section("Sugestão")
            .kv("Time", "Produção")
            .bullet("reason");
        let out = layout.build();
        assert!(!out.contains('\u{1b}'));
        assert!(out.starts_with("Alerta formatado\n\nSugestão\n--------\n"));
        assert!(out.contains("- reason"));
    }

    #[test]
    fn error_response_flattens_structured_error() {
        let err = AlertaError::Validation {
            step: 0,
            label: "id".into(),
        };
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["numeric_code"], ErrorCode::ValidationFailed.numeric());
    }
}
