//! Collected alert, its formatted message and the team suggestion.

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationResult, suggest_team};
use crate::wizard::{DESCRIPTION_STEP, IDENTIFIER_STEP, LINK_STEP};

/// Join the non-empty values with newlines, in step order.
///
/// Values are trimmed; blank ones are dropped entirely.
#[must_use]
pub fn format_message<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub identifier: String,
    pub description: String,
    pub link: String,
}

impl Alert {
    /// Build from wizard slots. Missing trailing slots read as empty.
    #[must_use]
    pub fn from_values(values: &[String]) -> Self {
        let slot = |idx: usize| values.get(idx).cloned().unwrap_or_default();
        Self {
            identifier: slot(IDENTIFIER_STEP),
            description: slot(DESCRIPTION_STEP),
            link: slot(LINK_STEP),
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        format_message(&[&self.identifier, &self.description, &self.link])
    }

    #[must_use]
    pub fn classify(&self) -> ClassificationResult {
        suggest_team(&self.description, &self.link)
    }

    #[must_use]
    pub fn report(&self) -> AlertReport {
        AlertReport {
            message: self.message(),
            classification: self.classify(),
        }
    }
}

/// Everything shown to the operator once an alert is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    pub message: String,
    pub classification: ClassificationResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::NO_SUGGESTION;

    #[test]
    fn format_drops_trailing_empty_field() {
        assert_eq!(format_message(&["A123", "desc", ""]), "A123\ndesc");
    }

    #[test]
    fn format_drops_skipped_middle_field() {
        assert_eq!(
            format_message(&["A123", "  ", "https://x"]),
            "A123\nhttps://x"
        );
    }

    #[test]
    fn format_keeps_internal_description_lines() {
        assert_eq!(
            format_message(&["A1", "line one\n  line two\n", "l"]),
            "A1\nline one\n  line two\nl"
        );
    }

    #[test]
    fn format_all_empty_is_empty() {
        assert_eq!(format_message::<&str>(&[]), "");
        assert_eq!(format_message(&["", "", ""]), "");
    }

    #[test]
    fn from_values_tolerates_short_input() {
        let alert = Alert::from_values(&["A1".to_string()]);
        assert_eq!(alert.identifier, "A1");
        assert!(alert.description.is_empty());
        assert!(alert.link.is_empty());
    }

    #[test]
    fn report_combines_message_and_classification() {
        let alert = Alert::from_values(&[
            "P-1001".to_string(),
            "Lentidão no banco cgmp25".to_string(),
            String::new(),
        ]);
        let report = alert.report();
        assert_eq!(report.message, "P-1001\nLentidão no banco cgmp25");
        assert_eq!(report.classification.team, "Banco de Dados");
    }

    #[test]
    fn identifier_is_not_classified() {
        let alert = Alert {
            identifier: "platcom-42".into(),
            description: "disk full".into(),
            link: String::new(),
        };
        assert_eq!(alert.classify().team, NO_SUGGESTION);
    }

    #[test]
    fn report_serializes_for_machine_output() {
        let report = Alert::from_values(&["A".into(), "osb down".into(), String::new()]).report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["message"], "A\nosb down");
        assert_eq!(json["classification"]["team"], "V8 Whatsapp");
        assert_eq!(json["classification"]["reasons"].as_array().unwrap().len(), 1);
    }
}
