//! YAML export functionality
//!
//! Human-readable export of the catalog or of submissions.

use serde::Serialize;
use std::io::Write;

use crate::error::{WizardError, WizardResult};

/// Write any serializable value as YAML with a short header comment
pub fn export_yaml<T: Serialize, W: Write>(
    value: &T,
    writer: &mut W,
    title: &str,
) -> WizardResult<()> {
    writeln!(writer, "# {}", title).map_err(|e| WizardError::Io(e.to_string()))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())
        .map_err(|e| WizardError::Io(e.to_string()))?;

    serde_yaml::to_writer(writer, value)?;

    Ok(())
}
