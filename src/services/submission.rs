//! Submission collaborators
//!
//! The wizard hands a completed application to a [`Submitter`] once per
//! Submit press and does not look at any response. The outbox writes each
//! submission as one JSON line so another process can pick it up.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{WizardError, WizardResult};
use crate::models::Submission;

/// Receives completed applications
pub trait Submitter {
    fn submit(&mut self, submission: &Submission) -> WizardResult<()>;
}

/// Appends submissions to a JSONL outbox file
pub struct OutboxSubmitter {
    outbox_path: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(outbox_path: PathBuf) -> Self {
        Self { outbox_path }
    }

    /// Read every submission in the outbox, oldest first
    pub fn read_all(&self) -> WizardResult<Vec<Submission>> {
        if !self.outbox_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.outbox_path)
            .map_err(|e| WizardError::Io(format!("Failed to open outbox: {}", e)))?;

        let mut submissions = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                WizardError::Io(format!("Failed to read outbox line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let submission: Submission = serde_json::from_str(&line).map_err(|e| {
                WizardError::Json(format!(
                    "Failed to parse submission at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            submissions.push(submission);
        }

        Ok(submissions)
    }

    /// Read the most recent N submissions
    pub fn read_recent(&self, count: usize) -> WizardResult<Vec<Submission>> {
        let all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all[start..].to_vec())
    }

    pub fn path(&self) -> &PathBuf {
        &self.outbox_path
    }
}

impl Submitter for OutboxSubmitter {
    fn submit(&mut self, submission: &Submission) -> WizardResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.outbox_path)
            .map_err(|e| WizardError::Submission(format!("Failed to open outbox: {}", e)))?;

        let json = serde_json::to_string(submission)
            .map_err(|e| WizardError::Json(format!("Failed to serialize submission: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| WizardError::Submission(format!("Failed to write submission: {}", e)))?;

        file.flush()
            .map_err(|e| WizardError::Submission(format!("Failed to flush outbox: {}", e)))?;

        Ok(())
    }
}

/// Keeps submissions in memory (dry runs and tests)
#[derive(Debug, Default)]
pub struct MemorySubmitter {
    pub submissions: Vec<Submission>,
}

impl MemorySubmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Submitter for MemorySubmitter {
    fn submit(&mut self, submission: &Submission) -> WizardResult<()> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}

impl<S: Submitter + ?Sized> Submitter for Box<S> {
    fn submit(&mut self, submission: &Submission) -> WizardResult<()> {
        (**self).submit(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormField, FormState};
    use tempfile::TempDir;

    fn sample_submission(email: &str) -> Submission {
        let mut form = FormState::new();
        form.set(FormField::Email, email);
        Submission::new(form)
    }

    #[test]
    fn test_outbox_appends_one_line_per_submit() {
        let temp = TempDir::new().unwrap();
        let mut outbox = OutboxSubmitter::new(temp.path().join("submissions.jsonl"));

        outbox.submit(&sample_submission("a@example.com")).unwrap();
        outbox.submit(&sample_submission("b@example.com")).unwrap();

        let contents = std::fs::read_to_string(outbox.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);

        let all = outbox.read_all().unwrap();
        assert_eq!(all[0].form.get(FormField::Email), Some("a@example.com"));
        assert_eq!(all[1].form.get(FormField::Email), Some("b@example.com"));
    }

    #[test]
    fn test_outbox_line_uses_submission_keys() {
        let temp = TempDir::new().unwrap();
        let mut outbox = OutboxSubmitter::new(temp.path().join("submissions.jsonl"));
        outbox.submit(&sample_submission("a@example.com")).unwrap();

        let line = std::fs::read_to_string(outbox.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["form"]["Email"], "a@example.com");
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_read_recent() {
        let temp = TempDir::new().unwrap();
        let mut outbox = OutboxSubmitter::new(temp.path().join("submissions.jsonl"));
        for i in 0..5 {
            outbox
                .submit(&sample_submission(&format!("{}@example.com", i)))
                .unwrap();
        }

        let recent = outbox.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].form.get(FormField::Email), Some("4@example.com"));
    }

    #[test]
    fn test_missing_outbox_is_empty() {
        let temp = TempDir::new().unwrap();
        let outbox = OutboxSubmitter::new(temp.path().join("none.jsonl"));
        assert!(outbox.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_memory_submitter_keeps_copies() {
        let mut memory = MemorySubmitter::new();
        memory.submit(&sample_submission("a@example.com")).unwrap();
        assert_eq!(memory.submissions.len(), 1);
    }
}
