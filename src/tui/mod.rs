//! TUI components for alerta.
//!
//! This module provides the interactive wizard using ratatui.

pub mod wizard_tui;

pub use wizard_tui::{WizardTui, WizardTuiOptions, run_wizard_tui};
