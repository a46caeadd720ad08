use proptest::prelude::*;

use alerta::alert::format_message;
use alerta::wizard::{Transition, WizardState};

fn non_blank() -> impl Strategy<Value = String> {
    r"[ \t]{0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,20}[ \t]{0,3}"
}

fn blank() -> impl Strategy<Value = String> {
    r"[ \t\n]{0,6}"
}

proptest! {
    #[test]
    fn submit_non_blank_identifier_stores_trimmed(raw in non_blank()) {
        let mut wizard = WizardState::for_alert();
        let transition = wizard.submit(&raw).unwrap();
        prop_assert_eq!(transition, Transition::Advanced(1));
        prop_assert_eq!(wizard.value(0).unwrap(), raw.trim());
    }

    #[test]
    fn submit_blank_required_field_leaves_state_untouched(raw in blank(), on_description in any::<bool>()) {
        let mut wizard = WizardState::for_alert();
        if on_description {
            wizard.submit("A1").unwrap();
        }
        let before_step = wizard.step();
        let before: Vec<String> = wizard.values().to_vec();

        prop_assert!(wizard.submit(&raw).is_err());
        prop_assert_eq!(wizard.step(), before_step);
        prop_assert_eq!(wizard.values(), before.as_slice());
        prop_assert!(!wizard.is_completed());
    }

    #[test]
    fn skip_always_advances_with_empty_slot(prefill in non_blank()) {
        let mut wizard = WizardState::for_alert();
        wizard.submit(&prefill).unwrap();
        prop_assert!(wizard.back(""));

        for step in 0..wizard.len() {
            let transition = wizard.skip();
            prop_assert_eq!(wizard.value(step).unwrap(), "");
            if step + 1 == wizard.len() {
                prop_assert!(matches!(transition, Transition::Completed(_)));
            } else {
                prop_assert_eq!(transition, Transition::Advanced(step + 1));
            }
        }
        prop_assert!(wizard.is_completed());
    }

    #[test]
    fn back_preserves_earlier_values(id in non_blank(), desc in non_blank(), typed in ".{0,20}") {
        let mut wizard = WizardState::for_alert();
        wizard.submit(&id).unwrap();
        wizard.submit(&desc).unwrap();

        prop_assert!(wizard.back(&typed));
        prop_assert_eq!(wizard.step(), 1);
        prop_assert_eq!(wizard.current_value(), desc.trim_end_matches(['\n', '\r']));
        prop_assert_eq!(wizard.value(0).unwrap(), id.trim());
    }

    #[test]
    fn back_at_first_step_is_noop(typed in ".{0,20}") {
        let mut wizard = WizardState::for_alert();
        prop_assert!(!wizard.back(&typed));
        prop_assert_eq!(wizard.step(), 0);
        prop_assert_eq!(wizard.current_value(), "");
    }

    #[test]
    fn formatted_message_has_no_blank_lines(values in prop::collection::vec("[ a-z]{0,8}", 0..6)) {
        let message = format_message(&values);
        prop_assert!(message.split('\n').all(|line| !line.trim().is_empty()) || message.is_empty());
        let kept = values.iter().filter(|v| !v.trim().is_empty()).count();
        if kept > 0 {
            prop_assert_eq!(message.split('\n').count(), kept);
        }
    }
}
