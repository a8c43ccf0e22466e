//! Path management for the loan wizard
//!
//! Provides XDG-compliant path resolution for configuration, the audit log,
//! and the submission outbox.
//!
//! ## Path Resolution Order
//!
//! 1. `LOAN_WIZARD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/loan-wizard` or `~/.config/loan-wizard`
//! 3. Windows: `%APPDATA%\loan-wizard`

use std::path::PathBuf;

use crate::error::WizardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "LOAN_WIZARD_DATA_DIR";

/// Manages all paths used by the wizard
#[derive(Debug, Clone)]
pub struct WizardPaths {
    /// Base directory for all wizard files
    base_dir: PathBuf,
}

impl WizardPaths {
    /// Create a new WizardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WizardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WizardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/loan-wizard/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the submission outbox
    pub fn outbox_file(&self) -> PathBuf {
        self.base_dir.join("submissions.jsonl")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), WizardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WizardError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WizardError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("loan-wizard"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| WizardError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("loan-wizard"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WizardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WizardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("loan-wizard"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.outbox_file(),
            temp_dir.path().join("submissions.jsonl")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("wizard");
        let paths = WizardPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
