//! Core data models for the loan wizard
//!
//! This module contains the data structures of the questionnaire: the step
//! catalog, the applicant's position, the collected answers, and submissions.

pub mod form;
pub mod position;
pub mod step;
pub mod submission;

pub use form::{FormField, FormState};
pub use position::{BranchScreen, Position};
pub use step::{StepDefinition, StepKind, LAST_STEP, MONTHS, STEPS, STEP_COUNT};
pub use submission::Submission;
