//! JSON export functionality

use serde::Serialize;
use std::io::Write;

use crate::error::{WizardError, WizardResult};

/// Write any serializable value as JSON, followed by a newline
pub fn export_json<T: Serialize, W: Write>(
    value: &T,
    writer: &mut W,
    pretty: bool,
) -> WizardResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer).map_err(|e| WizardError::Io(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormField, FormState, Submission};

    #[test]
    fn test_export_submission_json() {
        let mut form = FormState::new();
        form.set(FormField::Industry, "Healthcare");
        let submission = Submission::new(form);

        let mut buf = Vec::new();
        export_json(&submission, &mut buf, true).unwrap();

        let parsed: Submission = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.id, submission.id);
        assert_eq!(parsed.form.get(FormField::Industry), Some("Healthcare"));
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let mut buf = Vec::new();
        export_json(&FormState::new(), &mut buf, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{}\n");
    }
}
