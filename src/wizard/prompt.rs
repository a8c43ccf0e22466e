//! Line-based wizard
//!
//! Walks a session through the questionnaire on plain stdin/stdout, one
//! question at a time. Used when a full-screen terminal is not available.

use std::io::{BufRead, Write};

use crate::display::format_form_summary;
use crate::error::WizardResult;
use crate::models::{
    BranchScreen, FormField, Position, StepDefinition, StepKind, Submission, MONTHS, STEP_COUNT,
};
use crate::services::{Clock, Submitter};

use super::session::{NextOutcome, WizardSession};

/// Result of a prompt run
#[derive(Debug)]
pub struct PromptResult {
    /// The submission, if the applicant reached Submit
    pub submission: Option<Submission>,
}

/// What the applicant asked for after answering a step
enum StepAction {
    Next,
    Back,
    Quit,
}

/// Drives a session over a reader and writer
pub struct PromptWizard<R, W> {
    input: R,
    output: W,
    brand_name: String,
}

impl<R: BufRead, W: Write> PromptWizard<R, W> {
    pub fn new(input: R, output: W, brand_name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            brand_name: brand_name.into(),
        }
    }

    /// Run until the applicant submits, quits, or input ends
    pub fn run<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
    ) -> WizardResult<PromptResult> {
        self.print_header()?;

        loop {
            self.print_audit_warning(session)?;

            if let Some(screen) = session.position().branch() {
                match self.branch_screen(session, screen)? {
                    StepAction::Quit => return self.cancelled(),
                    StepAction::Back | StepAction::Next => continue,
                }
            }

            let Some(step) = session.current_step() else {
                return self.cancelled();
            };

            self.print_step(session, step)?;

            let action = match step.kind {
                StepKind::Select | StepKind::Fico => self.ask_choice(session, step)?,
                StepKind::Date => self.ask_date(session, step)?,
                StepKind::Contact => self.ask_contact(session, step)?,
            };

            match action {
                StepAction::Quit => return self.cancelled(),
                StepAction::Back => {
                    session.back();
                }
                StepAction::Next => {
                    if let Some(submission) = self.press_next(session)? {
                        self.print_submitted(&submission)?;
                        return Ok(PromptResult {
                            submission: Some(submission),
                        });
                    }
                }
            }
        }
    }

    fn print_header(&mut self) -> WizardResult<()> {
        let rule = "=".repeat(43);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "  {}", self.brand_name)?;
        writeln!(self.output, "  See how much your business is eligible for.")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Find out in minutes with our simplified application."
        )?;
        writeln!(
            self.output,
            "Type 'b' to go back, '?' for why we ask, 'q' to quit."
        )?;
        Ok(())
    }

    fn print_step<S: Submitter, C: Clock>(
        &mut self,
        session: &WizardSession<S, C>,
        step: &StepDefinition,
    ) -> WizardResult<()> {
        let index = match session.position() {
            Position::Step(i) => i,
            Position::Branch(_) => 0,
        };
        let heading = format!("Step {} of {}: {}", index + 1, STEP_COUNT, step.title);

        writeln!(self.output)?;
        writeln!(self.output, "{}", heading)?;
        writeln!(self.output, "{}", "-".repeat(heading.len()))?;
        writeln!(self.output, "{}", step.question)?;

        if let Some(field) = step.field {
            let current = session.form().get(field);
            for (i, option) in step.choices().iter().enumerate() {
                let marker = if current == Some(*option) { "*" } else { " " };
                writeln!(self.output, " {} {}. {}", marker, i + 1, option)?;
            }
        }
        Ok(())
    }

    fn ask_choice<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
        step: &StepDefinition,
    ) -> WizardResult<StepAction> {
        let Some(field) = step.field else {
            return Ok(StepAction::Next);
        };
        let options = step.choices();
        let prompt = format!("Select option [1-{}]: ", options.len());

        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(StepAction::Quit);
            };

            match answer.trim() {
                "q" | "Q" => return Ok(StepAction::Quit),
                "b" | "B" => return Ok(StepAction::Back),
                "?" => self.print_explanation(step)?,
                "" => return Ok(StepAction::Next),
                other => match pick_option(options, other) {
                    Some(option) => {
                        session.set_field(field, option);
                        return Ok(StepAction::Next);
                    }
                    None => writeln!(
                        self.output,
                        "Please enter a number between 1 and {}.",
                        options.len()
                    )?,
                },
            }
        }
    }

    fn ask_date<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
        step: &StepDefinition,
    ) -> WizardResult<StepAction> {
        loop {
            let prompt = with_current("Month (1-12 or name)", session.form().get(FormField::StartMonth));
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(StepAction::Quit);
            };

            match answer.trim() {
                "q" | "Q" => return Ok(StepAction::Quit),
                "b" | "B" => return Ok(StepAction::Back),
                "?" => {
                    self.print_explanation(step)?;
                    continue;
                }
                "" => {}
                other => match pick_option(&MONTHS, other) {
                    Some(month) => session.set_field(FormField::StartMonth, month),
                    None => {
                        writeln!(self.output, "Please enter a month name or a number from 1 to 12.")?;
                        continue;
                    }
                },
            }
            break;
        }

        loop {
            let prompt = with_current("Year", session.form().get(FormField::StartYear));
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(StepAction::Quit);
            };

            match answer.trim() {
                "q" | "Q" => return Ok(StepAction::Quit),
                "b" | "B" => return Ok(StepAction::Back),
                "?" => self.print_explanation(step)?,
                "" => return Ok(StepAction::Next),
                _ => {
                    session.set_field(FormField::StartYear, &answer);
                    return Ok(StepAction::Next);
                }
            }
        }
    }

    fn ask_contact<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
        step: &StepDefinition,
    ) -> WizardResult<StepAction> {
        let mut fields = step.required_fields().iter().copied().peekable();

        while let Some(&field) = fields.peek() {
            let prompt = with_current(field.label(), session.form().get(field));
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(StepAction::Quit);
            };

            match answer.trim() {
                "q" | "Q" => return Ok(StepAction::Quit),
                "b" | "B" => return Ok(StepAction::Back),
                "?" => {
                    self.print_explanation(step)?;
                    continue;
                }
                "" => {}
                _ => session.set_field(field, &answer),
            }
            fields.next();
        }

        Ok(StepAction::Next)
    }

    fn branch_screen<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
        screen: BranchScreen,
    ) -> WizardResult<StepAction> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", screen.heading())?;
        writeln!(self.output, "{}", "-".repeat(screen.heading().len()))?;
        writeln!(self.output, "{}", screen.body())?;
        writeln!(self.output)?;
        writeln!(self.output, "  l. {}", screen.action_label())?;
        writeln!(self.output, "  b. Back")?;

        loop {
            let Some(answer) = self.read_line("Choose [l/b/q]: ")? else {
                return Ok(StepAction::Quit);
            };

            match answer.trim() {
                "l" | "L" => {
                    session.branch_action();
                    writeln!(self.output, "Redirecting to {}...", screen.action_target())?;
                }
                "b" | "B" | "" => {
                    session.back();
                    return Ok(StepAction::Back);
                }
                "q" | "Q" => return Ok(StepAction::Quit),
                _ => writeln!(self.output, "Please enter l, b or q.")?,
            }
        }
    }

    fn press_next<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
    ) -> WizardResult<Option<Submission>> {
        match session.next() {
            Ok(NextOutcome::Moved(_)) => Ok(None),
            Ok(NextOutcome::Blocked) => {
                let missing: Vec<&str> = session.missing_fields().iter().map(|f| f.label()).collect();
                writeln!(self.output, "Please answer before continuing: {}", missing.join(", "))?;
                Ok(None)
            }
            Ok(NextOutcome::Submitted(submission)) => Ok(Some(submission)),
            Err(e) if e.is_input_error() => {
                writeln!(self.output, "{}", e)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn print_submitted(&mut self, submission: &Submission) -> WizardResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Application submitted (reference {}).", submission.short_id())?;
        writeln!(self.output)?;
        write!(self.output, "{}", format_form_summary(&submission.form))?;
        writeln!(self.output)?;
        writeln!(self.output, "Applying is free and won't impact your credit score.")?;
        Ok(())
    }

    fn print_explanation(&mut self, step: &StepDefinition) -> WizardResult<()> {
        writeln!(self.output, "Why we ask: {}", step.explanation)?;
        Ok(())
    }

    fn print_audit_warning<S: Submitter, C: Clock>(
        &mut self,
        session: &mut WizardSession<S, C>,
    ) -> WizardResult<()> {
        if let Some(warning) = session.take_audit_warning() {
            writeln!(self.output, "Warning: {}", warning)?;
        }
        Ok(())
    }

    fn cancelled(&mut self) -> WizardResult<PromptResult> {
        writeln!(self.output)?;
        writeln!(self.output, "Application cancelled. Nothing was submitted.")?;
        Ok(PromptResult { submission: None })
    }

    /// Read a line without its line ending; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> WizardResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }
}

/// Prompt text showing the current value in brackets
fn with_current(label: &str, current: Option<&str>) -> String {
    match current {
        Some(value) if !value.is_empty() => format!("{} [{}]: ", label, value),
        _ => format!("{}: ", label),
    }
}

/// Match a 1-based number or a case-insensitive option name
fn pick_option(options: &[&'static str], answer: &str) -> Option<&'static str> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(answer))
        .copied()
}
