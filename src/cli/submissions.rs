//! `submissions` command: list what has been delivered to the outbox

use std::io::Write;

use crate::display::format_submission_list;
use crate::error::WizardResult;
use crate::export::{export_json, export_yaml};
use crate::services::OutboxSubmitter;

use super::OutputFormat;

/// Print the most recent `limit` submissions, newest first
pub fn handle_submissions_command<W: Write>(
    out: &mut W,
    outbox: &OutboxSubmitter,
    limit: usize,
    format: OutputFormat,
) -> WizardResult<()> {
    let mut submissions = outbox.read_recent(limit)?;
    submissions.reverse();

    match format {
        OutputFormat::Text => writeln!(out, "{}", format_submission_list(&submissions))?,
        OutputFormat::Json => export_json(&submissions, out, true)?,
        OutputFormat::Yaml => export_yaml(&submissions, out, "Loan applications")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormField, FormState, Submission};
    use crate::services::Submitter;
    use tempfile::TempDir;

    fn submit(outbox: &mut OutboxSubmitter, first_name: &str) {
        let mut form = FormState::new();
        form.set(FormField::FirstName, first_name);
        form.set(FormField::Email, format!("{}@example.com", first_name.to_lowercase()));
        outbox.submit(&Submission::new(form)).unwrap();
    }

    #[test]
    fn test_empty_outbox() {
        let temp_dir = TempDir::new().unwrap();
        let outbox = OutboxSubmitter::new(temp_dir.path().join("submissions.jsonl"));

        let mut out = Vec::new();
        handle_submissions_command(&mut out, &outbox, 10, OutputFormat::Text).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No submissions found."));
    }

    #[test]
    fn test_limit_and_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut outbox = OutboxSubmitter::new(temp_dir.path().join("submissions.jsonl"));
        submit(&mut outbox, "Ada");
        submit(&mut outbox, "Grace");
        submit(&mut outbox, "Katherine");

        let mut out = Vec::new();
        handle_submissions_command(&mut out, &outbox, 2, OutputFormat::Json).unwrap();
        let parsed: Vec<Submission> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].form.get(FormField::FirstName), Some("Katherine"));
    }
}
