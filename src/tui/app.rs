//! Application state for the TUI
//!
//! The App struct wraps a wizard session and holds the purely visual state
//! around it: which option is highlighted, which input has focus, and the
//! text being typed. Answers themselves live only in the session.

use crate::config::Settings;
use crate::models::{FormField, Position, StepKind, Submission, MONTHS};
use crate::services::Submitter;
use crate::wizard::{NextOutcome, WizardSession};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Session type driven by the TUI
pub type TuiSession = WizardSession<Box<dyn Submitter>>;

/// Main application state
pub struct App<'a> {
    /// The questionnaire being filled in
    pub session: TuiSession,

    /// Settings, for branding
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Highlighted row in the option list
    pub choice_index: usize,

    /// Focus slot on the current screen (option list first, then inputs)
    pub focus: usize,

    /// Text inputs for the current step
    pub inputs: Vec<TextInput>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Pending toast notifications
    pub notifications: NotificationQueue,

    /// Most recent submission, if any
    pub submitted: Option<Submission>,

    /// Position the visual state was last built for
    shown: Position,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, session: TuiSession) -> Self {
        let shown = session.position();
        let mut app = Self {
            session,
            settings,
            should_quit: false,
            show_help: false,
            choice_index: 0,
            focus: 0,
            inputs: Vec::new(),
            status_message: None,
            notifications: NotificationQueue::new(),
            submitted: None,
            shown,
        };
        app.reset_screen();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Expire old notifications
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Options shown in the list on this screen
    pub fn list_options(&self) -> &'static [&'static str] {
        match self.session.current_step() {
            Some(step) if step.kind == StepKind::Date => &MONTHS,
            Some(step) => step.choices(),
            None => &[],
        }
    }

    /// Field the option list writes to
    pub fn list_field(&self) -> Option<FormField> {
        let step = self.session.current_step()?;
        match step.kind {
            StepKind::Select | StepKind::Fico => step.field,
            StepKind::Date => Some(FormField::StartMonth),
            StepKind::Contact => None,
        }
    }

    /// Fields edited through text inputs on this screen
    pub fn text_fields(&self) -> &'static [FormField] {
        match self.session.current_step() {
            Some(step) => match step.kind {
                StepKind::Date => &step.required_fields()[1..],
                StepKind::Contact => step.required_fields(),
                StepKind::Select | StepKind::Fico => &[],
            },
            None => &[],
        }
    }

    fn has_list(&self) -> bool {
        self.list_field().is_some()
    }

    fn focus_slots(&self) -> usize {
        usize::from(self.has_list()) + self.text_fields().len()
    }

    /// Whether the option list has focus
    pub fn list_focused(&self) -> bool {
        self.has_list() && self.focus == 0
    }

    /// Index into `inputs` of the focused text input
    pub fn focused_input(&self) -> Option<usize> {
        let index = self.focus.checked_sub(usize::from(self.has_list()))?;
        (index < self.inputs.len()).then_some(index)
    }

    /// Whether keystrokes go to a text input
    pub fn is_editing(&self) -> bool {
        self.focused_input().is_some()
    }

    pub fn focus_next(&mut self) {
        let slots = self.focus_slots();
        if slots > 0 {
            self.focus = (self.focus + 1) % slots;
            self.apply_focus();
        }
    }

    pub fn focus_prev(&mut self) {
        let slots = self.focus_slots();
        if slots > 0 {
            self.focus = (self.focus + slots - 1) % slots;
            self.apply_focus();
        }
    }

    fn apply_focus(&mut self) {
        let focused = self.focused_input();
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.focused = Some(i) == focused;
        }
    }

    /// Move the highlight up
    pub fn move_up(&mut self) {
        self.choice_index = self.choice_index.saturating_sub(1);
    }

    /// Move the highlight down
    pub fn move_down(&mut self) {
        let len = self.list_options().len();
        if self.choice_index + 1 < len {
            self.choice_index += 1;
        }
    }

    /// Store the highlighted option as the answer
    pub fn choose_highlighted(&mut self) {
        let Some(field) = self.list_field() else {
            return;
        };
        if let Some(option) = self.list_options().get(self.choice_index) {
            self.session.set_field(field, *option);
            self.surface_audit_warning();
        }
    }

    /// Highlight and choose option `number` (1-based)
    pub fn choose_number(&mut self, number: usize) {
        if number >= 1 && number <= self.list_options().len() {
            self.choice_index = number - 1;
            self.choose_highlighted();
        }
    }

    /// Apply an edit to the focused input and store its new value
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(index) = self.focused_input() else {
            return;
        };
        let Some(field) = self.text_fields().get(index).copied() else {
            return;
        };
        let Some(input) = self.inputs.get_mut(index) else {
            return;
        };

        let before = input.value().to_string();
        edit(input);
        if input.value() != before {
            let value = input.value().to_string();
            self.session.set_field(field, value);
            self.surface_audit_warning();
        }
    }

    /// Press Next
    pub fn press_next(&mut self) {
        self.clear_status();
        match self.session.next() {
            Ok(NextOutcome::Moved(position)) => {
                if let Some(screen) = position.branch() {
                    self.set_status(screen.heading());
                }
            }
            Ok(NextOutcome::Blocked) => {
                let missing: Vec<&str> = self
                    .session
                    .missing_fields()
                    .iter()
                    .map(|field| field.label())
                    .collect();
                if !missing.is_empty() {
                    self.set_status(format!("Please complete: {}", missing.join(", ")));
                }
            }
            Ok(NextOutcome::Submitted(submission)) => {
                self.notifications.push(Notification::success(format!(
                    "Application submitted. Reference {}",
                    submission.short_id()
                )));
                self.submitted = Some(submission);
            }
            Err(e) => {
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
        self.surface_audit_warning();
        self.sync_from_session();
    }

    /// Press Back
    pub fn press_back(&mut self) {
        self.clear_status();
        self.session.back();
        self.surface_audit_warning();
        self.sync_from_session();
    }

    /// Use the call-to-action on a branch screen
    pub fn branch_action(&mut self) {
        if let Some(screen) = self.session.branch_action() {
            self.notifications.push(Notification::info(format!(
                "Redirecting to {}...",
                screen.action_target()
            )));
        }
        self.surface_audit_warning();
    }

    /// Rebuild visual state if the session moved
    pub fn sync_from_session(&mut self) {
        if self.session.position() != self.shown {
            self.shown = self.session.position();
            self.reset_screen();
        }
    }

    fn reset_screen(&mut self) {
        self.focus = 0;

        let form = self.session.form();
        self.choice_index = self
            .list_field()
            .and_then(|field| form.get(field))
            .and_then(|value| self.list_options().iter().position(|o| *o == value))
            .unwrap_or(0);

        // The year input sits under its own "Year" title
        let labelled = !self.has_list();
        let label_width = self
            .text_fields()
            .iter()
            .map(|f| f.label().len())
            .max()
            .unwrap_or(0);
        self.inputs = self
            .text_fields()
            .iter()
            .map(|field| {
                let label = if labelled { field.label() } else { "" };
                let mut input = TextInput::new()
                    .label(label)
                    .label_width(label_width)
                    .placeholder(placeholder(*field));
                input.set_content(form.get(*field).unwrap_or_default());
                input
            })
            .collect();

        self.apply_focus();
    }

    fn surface_audit_warning(&mut self) {
        if let Some(warning) = self.session.take_audit_warning() {
            self.notifications.push(Notification::error(warning));
        }
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::StartYear => "YYYY",
        FormField::Email => "name@example.com",
        FormField::Phone => "(555) 555-0100",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BranchScreen;
    use crate::services::MemorySubmitter;

    fn app(settings: &Settings) -> App<'_> {
        let submitter: Box<dyn Submitter> = Box::new(MemorySubmitter::new());
        App::new(settings, WizardSession::new(settings, submitter))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit_input(|input| input.insert(c));
        }
    }

    #[test]
    fn test_choice_step_is_not_editing() {
        let settings = Settings::default();
        let app = app(&settings);
        assert!(app.list_focused());
        assert!(!app.is_editing());
        assert_eq!(app.list_options().len(), 4);
    }

    #[test]
    fn test_choose_and_advance() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.press_next();
        assert_eq!(app.session.position(), Position::Step(0));
        assert!(app.status_message.as_deref().unwrap_or("").contains("Loan Amount"));

        app.move_down();
        app.choose_highlighted();
        assert_eq!(
            app.session.form().get(FormField::LoanAmount),
            Some("$50,001 - $100,000")
        );

        app.press_next();
        assert_eq!(app.session.position(), Position::Step(1));
        assert_eq!(app.choice_index, 0);
        assert_eq!(app.inputs.len(), 1);
    }

    #[test]
    fn test_date_step_focus_and_typing() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.choose_number(1);
        app.press_next();

        app.choose_number(3);
        assert_eq!(app.session.form().get(FormField::StartMonth), Some("March"));

        app.focus_next();
        assert!(app.is_editing());
        type_text(&mut app, "2015");
        assert_eq!(app.session.form().get(FormField::StartYear), Some("2015"));

        app.press_next();
        assert_eq!(app.session.position(), Position::Step(2));
    }

    #[test]
    fn test_invalid_year_shows_error() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.choose_number(1);
        app.press_next();
        app.choose_number(1);
        app.focus_next();
        type_text(&mut app, "abcd");

        app.press_next();
        assert_eq!(app.session.position(), Position::Step(1));
        let shown = app.notifications.current().unwrap();
        assert!(shown.message.contains("abcd"));
    }

    fn reach_credit_score(app: &mut App) {
        app.choose_number(1);
        app.press_next();
        app.choose_number(1);
        app.focus_next();
        type_text(app, "2015");
        app.press_next();
        app.choose_number(1);
        app.press_next();
        app.choose_number(1);
        app.press_next();
        assert_eq!(app.session.position(), Position::Step(4));
    }

    #[test]
    fn test_back_restores_highlight() {
        let settings = Settings::default();
        let mut app = app(&settings);
        reach_credit_score(&mut app);

        app.choose_number(3);
        app.press_next();
        assert_eq!(app.session.position(), Position::Step(5));
        assert_eq!(app.choice_index, 0);

        app.press_back();
        assert_eq!(app.session.position(), Position::Step(4));
        assert_eq!(app.choice_index, 2);
    }

    #[test]
    fn test_credit_repair_branch() {
        let settings = Settings::default();
        let mut app = app(&settings);
        reach_credit_score(&mut app);

        app.choose_number(1);
        app.press_next();
        assert_eq!(
            app.session.position(),
            Position::Branch(BranchScreen::CreditRepair)
        );
        assert!(app.list_options().is_empty());

        app.branch_action();
        assert!(app
            .notifications
            .current()
            .unwrap()
            .message
            .contains("credit repair services"));

        app.press_back();
        assert_eq!(app.session.position(), Position::Step(4));
        assert_eq!(app.choice_index, 0);
    }

    #[test]
    fn test_contact_step_and_submit() {
        let settings = Settings::default();
        let mut app = app(&settings);
        reach_credit_score(&mut app);
        for _ in 4..8 {
            app.choose_number(2);
            app.press_next();
        }
        assert_eq!(app.session.position(), Position::Step(8));
        assert!(!app.list_focused());
        assert!(app.is_editing());
        assert_eq!(app.inputs.len(), 4);
        assert!(app.inputs[0].focused);

        for value in ["Ada", "Lovelace", "ada@example.com"] {
            type_text(&mut app, value);
            app.focus_next();
        }
        app.press_next();
        assert!(app.submitted.is_none());
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or("")
            .contains("Phone Number"));

        type_text(&mut app, "555-0100");
        app.press_next();
        let submission = app.submitted.as_ref().unwrap();
        assert_eq!(submission.form.get(FormField::Email), Some("ada@example.com"));
        assert_eq!(app.session.position(), Position::Step(8));
    }
}
