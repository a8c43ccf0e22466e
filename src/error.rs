//! Custom error types for the loan wizard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wizard operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// The business start year could not be read as a whole number
    #[error("Invalid start year: '{0}' is not a whole number")]
    InvalidStartYear(String),

    /// The submission collaborator failed to accept the application
    #[error("Submission error: {0}")]
    Submission(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl WizardError {
    /// Check if this error came from user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidStartYear(_))
    }
}

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for WizardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WizardError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_start_year_display() {
        let err = WizardError::InvalidStartYear("20x4".into());
        assert_eq!(
            err.to_string(),
            "Invalid start year: '20x4' is not a whole number"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let wizard_err: WizardError = io_err.into();
        assert!(matches!(wizard_err, WizardError::Io(_)));
        assert!(!wizard_err.is_input_error());
    }

    #[test]
    fn test_tui_error_display() {
        let err = WizardError::Tui("terminal event stream closed".into());
        assert_eq!(err.to_string(), "TUI error: terminal event stream closed");
        assert!(!err.is_input_error());
    }
}
