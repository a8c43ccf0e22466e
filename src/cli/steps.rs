//! `steps` command: print the question catalog

use std::io::Write;

use crate::display::format_step_list;
use crate::error::WizardResult;
use crate::export::{export_json, export_yaml};
use crate::models::STEPS;

use super::OutputFormat;

/// Print the catalog in the requested format
pub fn handle_steps_command<W: Write>(out: &mut W, format: OutputFormat) -> WizardResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", format_step_list(&STEPS))?,
        OutputFormat::Json => export_json(&STEPS, out, true)?,
        OutputFormat::Yaml => export_yaml(&STEPS, out, "Loan application steps")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(format: OutputFormat) -> String {
        let mut out = Vec::new();
        handle_steps_command(&mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_lists_every_step() {
        let text = run(OutputFormat::Text);
        for step in STEPS.iter() {
            assert!(text.contains(step.title), "missing {}", step.title);
        }
    }

    #[test]
    fn test_json_catalog() {
        let parsed: serde_json::Value = serde_json::from_str(&run(OutputFormat::Json)).unwrap();
        let steps = parsed.as_array().unwrap();
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[4]["kind"], "fico");
        assert_eq!(steps[4]["options"][0], "499 or below");
        assert!(steps[8].get("options").is_none());
    }
}
