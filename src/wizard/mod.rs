//! Step wizard state machine.
//!
//! [`WizardState`] holds only business data: one slot per field and the
//! current step. Rendering layers read from it and feed raw input back in;
//! they never keep field values of their own.

mod fields;

use tracing::debug;

use crate::error::{AlertaError, Result};

pub use fields::{
    ALERT_FIELDS, DESCRIPTION_STEP, FieldKind, FieldSpec, IDENTIFIER_STEP, LINK_STEP,
};

/// Outcome of a forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the given step.
    Advanced(usize),
    /// Left the last step; carries the final slot values in step order.
    Completed(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct WizardState {
    fields: &'static [FieldSpec],
    slots: Vec<String>,
    step: usize,
    completed: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::for_alert()
    }
}

impl WizardState {
    /// Create a wizard over `fields`.
    ///
    /// # Panics
    ///
    /// Panics if `fields` is empty.
    #[must_use]
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        assert!(!fields.is_empty(), "wizard needs at least one field");
        Self {
            fields,
            slots: vec![String::new(); fields.len()],
            step: 0,
            completed: false,
        }
    }

    /// Wizard over the identifier / description / link fields.
    #[must_use]
    pub fn for_alert() -> Self {
        Self::new(&ALERT_FIELDS)
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn field(&self) -> &FieldSpec {
        &self.fields[self.step]
    }

    /// Stored value for the current step, used to pre-populate the input.
    #[must_use]
    pub fn current_value(&self) -> &str {
        &self.slots[self.step]
    }

    #[must_use]
    pub fn value(&self, step: usize) -> Option<&str> {
        self.slots.get(step).map(String::as_str)
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.slots
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.step > 0
    }

    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.step + 1 == self.fields.len()
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Store `raw` into the current slot and move forward.
    ///
    /// Fails without touching any state when the field is required and the
    /// normalized value is blank.
    pub fn submit(&mut self, raw: &str) -> Result<Transition> {
        let field = self.field();
        let value = field.kind.normalize(raw);
        if field.required && value.trim().is_empty() {
            debug!(step = self.step, label = field.label, "rejected empty required field");
            return Err(AlertaError::Validation {
                step: self.step,
                label: field.label.to_string(),
            });
        }
        self.slots[self.step] = value;
        Ok(self.advance())
    }

    /// Clear the current slot and move forward. Never fails, even on
    /// required fields.
    pub fn skip(&mut self) -> Transition {
        debug!(step = self.step, "skipping field");
        self.slots[self.step].clear();
        self.advance()
    }

    /// Save `raw` into the current slot and step back.
    ///
    /// Returns `false` (and saves nothing) at the first step.
    pub fn back(&mut self, raw: &str) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.slots[self.step] = self.field().kind.normalize(raw);
        self.step -= 1;
        self.completed = false;
        debug!(step = self.step, "moved back");
        true
    }

    /// Clear every slot and return to the first step.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.step = 0;
        self.completed = false;
    }

    fn advance(&mut self) -> Transition {
        if self.is_last_step() {
            self.completed = true;
            debug!("wizard completed");
            Transition::Completed(self.slots.clone())
        } else {
            self.step += 1;
            debug!(step = self.step, "advanced");
            Transition::Advanced(self.step)
        }
    }
}
