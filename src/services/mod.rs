//! Service layer for the loan wizard
//!
//! Navigation rules, the completion gate, and the submission collaborators.

pub mod completion;
pub mod flow;
pub mod submission;

pub use completion::{is_next_enabled, is_step_complete, missing_fields};
pub use flow::{can_go_back, next_label, Clock, FixedClock, FlowController, SystemClock, Transition};
pub use submission::{MemorySubmitter, OutboxSubmitter, Submitter};
