//! `audit` command: show recent wizard events

use std::io::Write;

use crate::audit::AuditLogger;
use crate::error::WizardResult;

/// Print the last `limit` audit entries, oldest first
pub fn handle_audit_command<W: Write>(
    out: &mut W,
    logger: &AuditLogger,
    limit: usize,
) -> WizardResult<()> {
    if !logger.exists() {
        writeln!(out, "No audit log at {}", logger.path().display())?;
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        writeln!(out, "Audit log is empty.")?;
    }
    for entry in entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}
