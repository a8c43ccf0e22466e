//! Answer display formatting
//!
//! Formats collected answers for terminal output.

use crate::models::{FormState, Submission};

/// Format the answers as aligned `label: value` lines in question order
pub fn format_form_summary(form: &FormState) -> String {
    let entries = form.entries();
    if entries.is_empty() {
        return "No answers yet.".to_string();
    }

    let label_width = entries
        .iter()
        .map(|(field, _)| field.label().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (field, value) in entries {
        output.push_str(&format!(
            "  {:<label_width$}  {}\n",
            format!("{}:", field.label()),
            value,
            label_width = label_width + 1,
        ));
    }
    output
}

/// Format a list of submissions as a table
pub fn format_submission_list(submissions: &[Submission]) -> String {
    if submissions.is_empty() {
        return "No submissions found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<19}  {:<24}  {}\n",
        "ID", "Submitted", "Name", "Email"
    ));
    output.push_str(&format!("{:-<8}  {:-<19}  {:-<24}  {:-<20}\n", "", "", "", ""));

    for submission in submissions {
        let form = &submission.form;
        let name = format!(
            "{} {}",
            form.first_name.as_deref().unwrap_or_default(),
            form.last_name.as_deref().unwrap_or_default()
        );
        output.push_str(&format!(
            "{:<8}  {:<19}  {:<24}  {}\n",
            submission.short_id(),
            submission.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            name.trim(),
            form.email.as_deref().unwrap_or_default(),
        ));
    }

    output
}
