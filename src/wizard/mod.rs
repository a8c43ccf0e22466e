//! The questionnaire wizard
//!
//! A [`WizardSession`] holds one applicant's position and answers. The
//! [`PromptWizard`] drives a session over plain text input; the TUI drives
//! the same session from key events.

pub mod prompt;
pub mod session;

pub use prompt::{PromptResult, PromptWizard};
pub use session::{NextOutcome, WizardSession};
