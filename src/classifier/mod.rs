//! Team suggestion for a collected alert.
//!
//! Every rule in [`RULES`] is evaluated against the description and link.
//! The first match names the primary team; all matches are kept as reasons
//! so the operator can see why.

mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use rules::{RULES, Rule, RuleInput};

/// Team reported when no rule matches.
pub const NO_SUGGESTION: &str = "Sem sugestão automática — verificar manualmente";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Primary team, or [`NO_SUGGESTION`].
    pub team: String,
    /// Reasons for every matched rule, in rule order.
    pub reasons: Vec<String>,
}

impl ClassificationResult {
    #[must_use]
    pub fn no_suggestion() -> Self {
        Self {
            team: NO_SUGGESTION.to_string(),
            reasons: Vec::new(),
        }
    }

    /// Whether any rule matched.
    #[must_use]
    pub fn has_suggestion(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// Suggest the owning team for an alert.
#[must_use]
pub fn suggest_team(description: &str, link: &str) -> ClassificationResult {
    let input = RuleInput::new(description, link);
    let reasons: Vec<String> = RULES
        .iter()
        .filter(|rule| rule.matches(&input))
        .map(|rule| {
            debug!(team = rule.team, detail = rule.detail, "rule matched");
            rule.reason()
        })
        .collect();

    match reasons.first() {
        Some(first) => ClassificationResult {
            team: team_of(first).to_string(),
            reasons,
        },
        None => ClassificationResult::no_suggestion(),
    }
}

/// Team label of a reason string: the text before the first `" ("`.
#[must_use]
pub fn team_of(reason: &str) -> &str {
    reason.split_once(" (").map_or(reason, |(team, _)| team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platcom_routes_to_database_or_production() {
        let result = suggest_team("contains platcom text", "");
        assert_eq!(result.team, "Banco de Dados ou Produção");
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("verificar manualmente"));
    }

    #[test]
    fn query_webhook_rule_wins_over_generic_webhook() {
        let result = suggest_team("some query here", "https://x/webhook");
        assert_eq!(result.team, "Gestão de Crises");
        assert_eq!(result.reasons.len(), 2);
        assert_eq!(result.reasons[0], RULES[3].reason());
        assert_eq!(result.reasons[1], RULES[4].reason());
    }

    #[test]
    fn nothing_matches_gives_sentinel() {
        let result = suggest_team("nothing special", "");
        assert_eq!(result.team, NO_SUGGESTION);
        assert!(result.reasons.is_empty());
        assert!(!result.has_suggestion());
    }

    #[test]
    fn cgmp6_is_production_unless_platcom_present() {
        let result = suggest_team("CGMP6 system", "");
        assert_eq!(result.team, "Produção");
        assert_eq!(result.reasons, vec![RULES[2].reason()]);

        let result = suggest_team("CGMP6 and Platcom", "");
        assert_eq!(result.team, "Banco de Dados ou Produção");
        assert!(!result.reasons.contains(&RULES[2].reason()));
        assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn first_match_wins_but_all_matches_are_reported() {
        let result = suggest_team("cgmp25 via weblogic", "https://host.prd/webhook");
        assert_eq!(result.team, "Banco de Dados");
        let teams: Vec<&str> = result.reasons.iter().map(|r| team_of(r)).collect();
        assert_eq!(
            teams,
            vec!["Banco de Dados", "Gestão de Crises", "V8 Whatsapp", "Produção"]
        );
    }

    #[test]
    fn case_sensitive_rules_use_raw_description() {
        assert_eq!(suggest_team("falha no GoldenGate", "").team, "Time de BI");
        assert_eq!(suggest_team("falha no goldengate", "").team, NO_SUGGESTION);
        assert_eq!(suggest_team("VINDT", "").team, "Time de Telecom");
        assert_eq!(suggest_team("ERP Protheus", "").team, "Time de produção");
    }

    #[test]
    fn team_of_splits_on_first_paren() {
        assert_eq!(team_of("Produção (a (b))"), "Produção");
        assert_eq!(team_of("no detail"), "no detail");
    }
}
