//! Per-step field configuration.

use serde::Serialize;

/// Input control a step accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

impl FieldKind {
    /// Normalize raw input read from the control.
    ///
    /// Single-line values are trimmed on both ends. Multi-line values only
    /// lose trailing line breaks; indentation and internal blank lines stay.
    #[must_use]
    pub fn normalize(self, raw: &str) -> String {
        match self {
            Self::SingleLine => raw.trim().to_string(),
            Self::MultiLine => raw.trim_end_matches(['\n', '\r']).to_string(),
        }
    }
}

/// Configuration for one wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(label: &'static str, required: bool, kind: FieldKind) -> Self {
        Self {
            label,
            required,
            kind,
        }
    }
}

pub const IDENTIFIER_STEP: usize = 0;
pub const DESCRIPTION_STEP: usize = 1;
pub const LINK_STEP: usize = 2;

/// The three alert fields, in collection order.
pub const ALERT_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("Colar o NÚMERO do alerta", true, FieldKind::SingleLine),
    FieldSpec::new(
        "Colar a DESCRIÇÃO (pode ser múltiplas linhas)",
        true,
        FieldKind::MultiLine,
    ),
    FieldSpec::new(
        "Colar o LINK do Dynatrace (opcional; use PULAR se não houver)",
        false,
        FieldKind::SingleLine,
    ),
];
