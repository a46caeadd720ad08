use proptest::prelude::*;

use alerta::classifier::{suggest_team, team_of};

proptest! {
    #[test]
    fn classifier_never_panics(description in ".{0,80}", link in ".{0,40}") {
        let _ = suggest_team(&description, &link);
    }

    #[test]
    fn team_comes_from_first_reason(description in "[a-zA-Z0-9 .]{0,60}", link in "[a-z:/.]{0,30}") {
        let result = suggest_team(&description, &link);
        match result.reasons.first() {
            Some(first) => prop_assert_eq!(result.team.as_str(), team_of(first)),
            None => prop_assert!(!result.has_suggestion()),
        }
    }

    #[test]
    fn matching_ignores_case_for_lowercase_rules(prefix in "[xyz ]{0,10}", upper in any::<bool>()) {
        let keyword = if upper { "CGMP6" } else { "cgmp6" };
        let result = suggest_team(&format!("{prefix} {keyword}"), "");
        prop_assert_eq!(result.team.as_str(), "Produção");
    }
}
