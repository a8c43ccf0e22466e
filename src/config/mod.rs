//! Configuration module for the loan wizard
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WizardPaths;
pub use settings::{InvalidYearPolicy, Settings};
