//! CLI command handlers
//!
//! This module contains the non-interactive commands, bridging the clap
//! argument parsing with the display and export layers.

pub mod audit;
pub mod steps;
pub mod submissions;

use clap::ValueEnum;

pub use audit::handle_audit_command;
pub use steps::handle_steps_command;
pub use submissions::handle_submissions_command;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML with a header comment
    Yaml,
}
