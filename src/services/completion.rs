//! Completion gate
//!
//! Decides whether the applicant may move forward from the current screen.
//! Everything here is a pure function of the step and the answers, so callers
//! recompute it after every change instead of caching a flag.

use crate::models::{FormField, FormState, Position, StepDefinition};

/// Whether every field the step requires holds a non-empty value
pub fn is_step_complete(step: &StepDefinition, form: &FormState) -> bool {
    let required = step.required_fields();
    !required.is_empty() && required.iter().all(|&field| form.is_filled(field))
}

/// Whether Next is enabled at the given position
///
/// Branch screens have no Next button, so this is always false there.
pub fn is_next_enabled(position: Position, form: &FormState) -> bool {
    position
        .step()
        .is_some_and(|step| is_step_complete(step, form))
}

/// Required fields the applicant has not filled in yet
pub fn missing_fields(step: &StepDefinition, form: &FormState) -> Vec<FormField> {
    step.required_fields()
        .iter()
        .copied()
        .filter(|&field| !form.is_filled(field))
        .collect()
}
