//! Property-based tests for the wizard, message formatting and classifier.

mod classifier_tests;
mod wizard_tests;
