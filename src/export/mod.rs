//! Export module for the loan wizard
//!
//! Writes the step catalog and submissions in machine-readable formats:
//! - JSON: compact or pretty
//! - YAML: human-readable, with a header comment

pub mod json;
pub mod yaml;

pub use json::export_json;
pub use yaml::export_yaml;
