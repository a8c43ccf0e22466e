//! User settings for the loan wizard
//!
//! Controls branching thresholds, how a malformed start year is handled,
//! audit logging, and TUI timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::WizardPaths;
use crate::error::WizardError;

/// What to do when the business start year is not a whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvalidYearPolicy {
    /// Refuse to advance and report the bad input (default)
    #[default]
    Reject,
    /// Read the leading digits ("2026.5" is 2026); continue to the next
    /// step when there are none
    PassThrough,
    /// Treat the business as too young and show the credit card screen
    Branch,
}

/// Lowest accepted TUI tick rate; smaller values are raised to this
pub const MIN_TICK_RATE_MS: u64 = 50;

/// User settings for the loan wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Businesses younger than this many years are sent to the credit card screen
    #[serde(default = "default_minimum_business_age_years")]
    pub minimum_business_age_years: i32,

    /// Handling of a non-numeric start year
    #[serde(default)]
    pub invalid_year_policy: InvalidYearPolicy,

    /// Whether wizard events are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Name shown in the wizard header
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_minimum_business_age_years() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_brand_name() -> String {
    "SBG Funding".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            minimum_business_age_years: default_minimum_business_age_years(),
            invalid_year_policy: InvalidYearPolicy::default(),
            audit_enabled: default_true(),
            tick_rate_ms: default_tick_rate_ms(),
            brand_name: default_brand_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WizardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WizardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.tick_rate_ms = settings.tick_rate_ms.max(MIN_TICK_RATE_MS);

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Interval between TUI ticks, never below `MIN_TICK_RATE_MS`
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WizardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WizardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            WizardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
