//! Display formatting for terminal output
//!
//! Plain-text tables and summaries used by the CLI commands and prompt mode.

pub mod form;
pub mod steps;

pub use form::{format_form_summary, format_submission_list};
pub use steps::format_step_list;
