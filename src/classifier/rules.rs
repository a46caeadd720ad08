//! The fixed team routing table.
//!
//! Order is priority: the first matching rule names the primary team.

use std::sync::LazyLock;

use regex::Regex;

/// Text a rule looks at, precomputed once per classification.
#[derive(Debug)]
pub struct RuleInput<'a> {
    /// Description as typed, for case-sensitive rules.
    pub description: &'a str,
    pub description_lower: String,
    pub link_lower: String,
}

impl<'a> RuleInput<'a> {
    #[must_use]
    pub fn new(description: &'a str, link: &str) -> Self {
        Self {
            description,
            description_lower: description.to_lowercase(),
            link_lower: link.to_lowercase(),
        }
    }
}

/// One routing rule: predicate, owning team and the explanation shown to
/// the operator.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub team: &'static str,
    pub detail: &'static str,
    matches: fn(&RuleInput<'_>) -> bool,
}

impl Rule {
    const fn new(
        team: &'static str,
        detail: &'static str,
        matches: fn(&RuleInput<'_>) -> bool,
    ) -> Self {
        Self {
            team,
            detail,
            matches,
        }
    }

    #[must_use]
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        (self.matches)(input)
    }

    /// Reason string in the form `"<team> (<detail>)"`.
    #[must_use]
    pub fn reason(&self) -> String {
        format!("{} ({})", self.team, self.detail)
    }
}

static PRD_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\.prd\b").expect("valid regex"));

pub static RULES: [Rule; 12] = [
    Rule::new(
        "Banco de Dados ou Produção",
        "descrição contém 'platcom' — verificar manualmente",
        |i| i.description_lower.contains("platcom"),
    ),
    Rule::new(
        "Banco de Dados",
        "descrição contém 'cgmp25'",
        |i| i.description_lower.contains("cgmp25"),
    ),
    Rule::new(
        "Produção",
        "descrição contém 'cgmp6' sem 'platcom'",
        |i| i.description_lower.contains("cgmp6") && !i.description_lower.contains("platcom"),
    ),
    Rule::new(
        "Gestão de Crises",
        "descrição contém 'query' e link contém 'webhook'",
        |i| i.description_lower.contains("query") && i.link_lower.contains("webhook"),
    ),
    Rule::new(
        "Gestão de Crises",
        "link contém 'webhook'",
        |i| i.link_lower.contains("webhook"),
    ),
    Rule::new(
        "V8 Whatsapp",
        "descrição contém 'osb'",
        |i| i.description_lower.contains("osb"),
    ),
    Rule::new(
        "V8 Whatsapp",
        "descrição contém 'weblogic'",
        |i| i.description_lower.contains("weblogic"),
    ),
    Rule::new(
        "V8 Whatsapp",
        "descrição contém 'gto'",
        |i| i.description_lower.contains("gto"),
    ),
    // Case-sensitive: matched against the description as typed.
    Rule::new(
        "Time de BI",
        "descrição contém 'GoldenGate'",
        |i| i.description.contains("GoldenGate"),
    ),
    Rule::new(
        "Time de Telecom",
        "descrição contém 'VINDT'",
        |i| i.description.contains("VINDT"),
    ),
    Rule::new(
        "Time de produção",
        "descrição contém 'Protheus'",
        |i| i.description.contains("Protheus"),
    ),
    Rule::new(
        "Produção",
        "padrão '.prd' na descrição ou no link",
        |i| PRD_HOST.is_match(&i.description_lower) || PRD_HOST.is_match(&i.link_lower),
    ),
];
