//! Wizard session
//!
//! Owns one applicant's position and answers for the lifetime of a run and
//! applies the flow controller's decisions to them. Both front ends (the TUI
//! and the line prompt) drive a session; neither touches the state directly.

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{WizardError, WizardResult};
use crate::models::{BranchScreen, FormField, FormState, Position, StepDefinition, Submission};
use crate::services::completion;
use crate::services::flow::{self, Clock, FlowController, SystemClock, Transition};
use crate::services::Submitter;

/// What happened when Next was pressed
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// Now at a new position
    Moved(Position),
    /// Next was unavailable; nothing changed
    Blocked,
    /// The answers were delivered to the submitter; position unchanged
    Submitted(Submission),
}

/// One run of the questionnaire
pub struct WizardSession<S: Submitter, C: Clock = SystemClock> {
    position: Position,
    form: FormState,
    flow: FlowController<C>,
    submitter: S,
    audit: Option<AuditLogger>,
    audit_warning: Option<String>,
}

impl<S: Submitter> WizardSession<S, SystemClock> {
    /// Start a session at the first step with no answers
    pub fn new(settings: &Settings, submitter: S) -> Self {
        Self::with_clock(settings, SystemClock, submitter)
    }
}

impl<S: Submitter, C: Clock> WizardSession<S, C> {
    /// Start a session with an explicit clock
    pub fn with_clock(settings: &Settings, clock: C, submitter: S) -> Self {
        Self {
            position: Position::default(),
            form: FormState::new(),
            flow: FlowController::with_clock(settings, clock),
            submitter,
            audit: None,
            audit_warning: None,
        }
    }

    /// Record events to an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// The step being shown, or `None` on a branch screen
    pub fn current_step(&self) -> Option<&'static StepDefinition> {
        self.position.step()
    }

    /// Current value of the completion gate
    pub fn is_next_enabled(&self) -> bool {
        completion::is_next_enabled(self.position, &self.form)
    }

    /// Required fields still empty on the current step
    pub fn missing_fields(&self) -> Vec<FormField> {
        self.current_step()
            .map(|step| completion::missing_fields(step, &self.form))
            .unwrap_or_default()
    }

    pub fn can_go_back(&self) -> bool {
        flow::can_go_back(self.position)
    }

    pub fn next_label(&self) -> &'static str {
        flow::next_label(self.position)
    }

    /// Enter or change an answer
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.record(AuditEntry::field_set(self.position, field));
    }

    /// Press Next
    ///
    /// On the last step this delivers the answers to the submitter exactly
    /// once and leaves the position unchanged.
    pub fn next(&mut self) -> WizardResult<NextOutcome> {
        let from = self.position;

        let transition = match self.flow.next(from, &self.form) {
            Ok(transition) => transition,
            Err(err) => {
                self.record(AuditEntry::rejected(from, err.to_string()));
                return Err(err);
            }
        };

        match transition {
            Transition::Moved(to) => {
                self.position = to;
                self.record(AuditEntry::navigated(from, to));
                Ok(NextOutcome::Moved(to))
            }
            Transition::Blocked => {
                self.record(AuditEntry::blocked(from));
                Ok(NextOutcome::Blocked)
            }
            Transition::Submit => {
                let submission = Submission::new(self.form.clone());
                self.submitter.submit(&submission)?;
                self.record(AuditEntry::submitted(from, submission.id.to_string()));
                Ok(NextOutcome::Submitted(submission))
            }
        }
    }

    /// Press Back
    pub fn back(&mut self) -> Position {
        let from = self.position;
        let to = self.flow.back(from);
        if to != from {
            self.position = to;
            self.record(AuditEntry::navigated(from, to));
        }
        to
    }

    /// Use the call-to-action on the current branch screen
    pub fn branch_action(&mut self) -> Option<BranchScreen> {
        let screen = self.position.branch()?;
        self.record(AuditEntry::branch_action(screen));
        Some(screen)
    }

    /// Take the most recent audit write failure, if any
    pub fn take_audit_warning(&mut self) -> Option<String> {
        self.audit_warning.take()
    }

    fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                self.audit_warning = Some(audit_warning(&e));
            }
        }
    }
}

fn audit_warning(err: &WizardError) -> String {
    format!("Audit log unavailable: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EventKind;
    use crate::services::{FixedClock, MemorySubmitter};
    use tempfile::TempDir;

    type TestSession = WizardSession<MemorySubmitter, FixedClock>;

    fn session() -> TestSession {
        WizardSession::with_clock(&Settings::default(), FixedClock(2026), MemorySubmitter::new())
    }

    fn advance(session: &mut TestSession) -> Position {
        match session.next().unwrap() {
            NextOutcome::Moved(to) => to,
            other => panic!("expected a move, got {:?}", other),
        }
    }

    fn fill_to_contact(session: &mut TestSession) {
        session.set_field(FormField::LoanAmount, "$50,001 - $100,000");
        advance(session);
        session.set_field(FormField::StartMonth, "April");
        session.set_field(FormField::StartYear, "2018");
        advance(session);
        session.set_field(FormField::MonthlyRevenue, "$20K - $49K");
        advance(session);
        session.set_field(FormField::ImportantFactor, "Speed of Funds");
        advance(session);
        session.set_field(FormField::CreditScore, "680 - 719");
        advance(session);
        session.set_field(FormField::BusinessType, "LLC");
        advance(session);
        session.set_field(FormField::Industry, "Services");
        advance(session);
        session.set_field(FormField::UseOfFunds, "Inventory");
        assert_eq!(advance(session), Position::Step(8));
    }

    fn fill_contact(session: &mut TestSession) {
        session.set_field(FormField::FirstName, "Ada");
        session.set_field(FormField::LastName, "Lovelace");
        session.set_field(FormField::Email, "ada@example.com");
        session.set_field(FormField::Phone, "555-0100");
    }

    #[test]
    fn test_starts_empty_at_first_step() {
        let session = session();
        assert_eq!(session.position(), Position::Step(0));
        assert!(session.form().is_empty());
        assert!(!session.is_next_enabled());
        assert!(!session.can_go_back());
        assert_eq!(session.next_label(), "Next");
    }

    #[test]
    fn test_gate_follows_answers() {
        let mut session = session();
        session.set_field(FormField::LoanAmount, "$250,001+");
        assert!(session.is_next_enabled());
        session.set_field(FormField::LoanAmount, "");
        assert!(!session.is_next_enabled());
        assert_eq!(session.missing_fields(), vec![FormField::LoanAmount]);
    }

    #[test]
    fn test_blocked_next_changes_nothing() {
        let mut session = session();
        assert_eq!(session.next().unwrap(), NextOutcome::Blocked);
        assert_eq!(session.position(), Position::Step(0));
    }

    #[test]
    fn test_full_run_submits_once_and_stays_on_last_step() {
        let mut session = session();
        fill_to_contact(&mut session);
        assert_eq!(session.next_label(), "Submit");
        assert_eq!(session.next().unwrap(), NextOutcome::Blocked);

        fill_contact(&mut session);
        let outcome = session.next().unwrap();

        let NextOutcome::Submitted(submission) = outcome else {
            panic!("expected a submission");
        };
        assert_eq!(session.position(), Position::Step(8));
        assert_eq!(session.submitter().submissions.len(), 1);
        assert_eq!(session.submitter().submissions[0], submission);
        assert_eq!(submission.form, *session.form());
        assert_eq!(submission.form.entries().len(), 13);
    }

    #[test]
    fn test_each_submit_press_delivers_once() {
        let mut session = session();
        fill_to_contact(&mut session);
        fill_contact(&mut session);
        session.next().unwrap();
        session.next().unwrap();
        assert_eq!(session.submitter().submissions.len(), 2);
    }

    #[test]
    fn test_young_business_detour_and_return() {
        let mut session = session();
        session.set_field(FormField::LoanAmount, "$10,000 - $50,000");
        advance(&mut session);
        session.set_field(FormField::StartMonth, "January");
        session.set_field(FormField::StartYear, "2026");

        assert_eq!(
            advance(&mut session),
            Position::Branch(BranchScreen::CreditCardIntro)
        );
        assert!(session.current_step().is_none());
        assert!(!session.is_next_enabled());
        assert_eq!(session.next().unwrap(), NextOutcome::Blocked);

        assert_eq!(session.back(), Position::Step(1));
        assert_eq!(session.form().get(FormField::StartYear), Some("2026"));

        session.set_field(FormField::StartYear, "2021");
        assert_eq!(advance(&mut session), Position::Step(2));
    }

    #[test]
    fn test_low_credit_detour_and_return() {
        let mut session = session();
        fill_to_contact(&mut session);
        for _ in 0..4 {
            session.back();
        }
        assert_eq!(session.position(), Position::Step(4));

        session.set_field(FormField::CreditScore, "499 or below");
        assert_eq!(
            advance(&mut session),
            Position::Branch(BranchScreen::CreditRepair)
        );
        assert_eq!(session.branch_action(), Some(BranchScreen::CreditRepair));
        assert_eq!(session.back(), Position::Step(4));
    }

    #[test]
    fn test_back_at_first_step_is_noop() {
        let mut session = session();
        assert_eq!(session.back(), Position::Step(0));
        assert_eq!(session.branch_action(), None);
    }

    #[test]
    fn test_invalid_year_is_rejected_in_place() {
        let mut session = session();
        session.set_field(FormField::LoanAmount, "$10,000 - $50,000");
        advance(&mut session);
        session.set_field(FormField::StartMonth, "May");
        session.set_field(FormField::StartYear, "nineteen");

        let err = session.next().unwrap_err();
        assert!(matches!(err, WizardError::InvalidStartYear(_)));
        assert_eq!(session.position(), Position::Step(1));
    }

    #[test]
    fn test_events_are_audited() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let mut session = session().with_audit(logger);

        session.next().unwrap();
        session.set_field(FormField::LoanAmount, "$250,001+");
        session.next().unwrap();
        session.back();

        let entries = AuditLogger::new(temp.path().join("audit.log"))
            .read_all()
            .unwrap();
        let kinds: Vec<EventKind> = entries.iter().map(|e| e.event).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Blocked,
                EventKind::FieldSet,
                EventKind::Navigated,
                EventKind::Navigated
            ]
        );
        assert!(session.take_audit_warning().is_none());
    }

    #[test]
    fn test_audit_failure_does_not_block() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("missing").join("audit.log"));
        let mut session = session().with_audit(logger);

        session.set_field(FormField::LoanAmount, "$250,001+");
        assert_eq!(session.next().unwrap(), NextOutcome::Moved(Position::Step(1)));
        assert!(session.take_audit_warning().is_some());
        assert!(session.take_audit_warning().is_none());
    }
}
