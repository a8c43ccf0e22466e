//! Flow controller
//!
//! Computes where Next and Back lead from the current position. The two
//! detours (young business, very low credit score) are decided here; the
//! session applies the result.

use chrono::Datelike;

use crate::config::{InvalidYearPolicy, Settings};
use crate::error::{WizardError, WizardResult};
use crate::models::step::{CREDIT_SCORE_STEP, LOWEST_CREDIT_SCORE, START_DATE_STEP};
use crate::models::{BranchScreen, FormField, FormState, Position, LAST_STEP};

use super::completion::is_step_complete;

/// Source of the current calendar year
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Result of pressing Next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The applicant moves to a new position
    Moved(Position),
    /// Next is not available here; nothing changes
    Blocked,
    /// The last step was completed; the answers should be submitted
    Submit,
}

/// Navigation rules for the questionnaire
#[derive(Debug, Clone)]
pub struct FlowController<C: Clock = SystemClock> {
    clock: C,
    minimum_business_age_years: i32,
    invalid_year_policy: InvalidYearPolicy,
}

impl FlowController<SystemClock> {
    /// Create a controller using the system clock
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> FlowController<C> {
    /// Create a controller with an explicit clock
    pub fn with_clock(settings: &Settings, clock: C) -> Self {
        Self {
            clock,
            minimum_business_age_years: settings.minimum_business_age_years,
            invalid_year_policy: settings.invalid_year_policy,
        }
    }

    /// Compute the result of pressing Next
    ///
    /// Returns `Blocked` when the current step is unanswered or when the
    /// applicant is on a branch screen.
    pub fn next(&self, position: Position, form: &FormState) -> WizardResult<Transition> {
        let index = match position {
            Position::Step(index) => index,
            Position::Branch(_) => return Ok(Transition::Blocked),
        };

        let Some(step) = position.step() else {
            return Ok(Transition::Blocked);
        };

        if !is_step_complete(step, form) {
            return Ok(Transition::Blocked);
        }

        if index == START_DATE_STEP && self.business_too_young(form)? {
            return Ok(Transition::Moved(Position::Branch(
                BranchScreen::CreditCardIntro,
            )));
        }

        if index == CREDIT_SCORE_STEP && form.get(FormField::CreditScore) == Some(LOWEST_CREDIT_SCORE)
        {
            return Ok(Transition::Moved(Position::Branch(BranchScreen::CreditRepair)));
        }

        if index < LAST_STEP {
            Ok(Transition::Moved(Position::Step(index + 1)))
        } else {
            Ok(Transition::Submit)
        }
    }

    /// Compute the result of pressing Back
    ///
    /// Branch screens return to the step that led to them; the first step stays put.
    pub fn back(&self, position: Position) -> Position {
        match position {
            Position::Branch(screen) => Position::Step(screen.origin_step()),
            Position::Step(0) => Position::Step(0),
            Position::Step(index) => Position::Step(index.min(LAST_STEP + 1) - 1),
        }
    }

    fn business_too_young(&self, form: &FormState) -> WizardResult<bool> {
        let raw = form.get(FormField::StartYear).unwrap_or_default();

        let start_year = match raw.trim().parse::<i64>() {
            Ok(year) => year,
            Err(_) => match self.invalid_year_policy {
                InvalidYearPolicy::Reject => {
                    return Err(WizardError::InvalidStartYear(raw.to_string()))
                }
                InvalidYearPolicy::PassThrough => match leading_integer(raw) {
                    Some(year) => year,
                    None => return Ok(false),
                },
                InvalidYearPolicy::Branch => return Ok(true),
            },
        };

        let age = i64::from(self.clock.current_year()).saturating_sub(start_year);
        Ok(age < i64::from(self.minimum_business_age_years))
    }
}

/// Lenient year reading: an optional sign followed by the leading digits,
/// so "2026.5" reads as 2026. `None` when no digits lead the value.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = match rest[..digits].parse::<i64>() {
        Ok(value) => value,
        Err(_) => i64::MAX,
    };
    Some(if negative { value.saturating_neg() } else { value })
}

/// Whether the Back control is shown at this position
pub fn can_go_back(position: Position) -> bool {
    !position.is_first()
}

/// Label of the forward button
pub fn next_label(position: Position) -> &'static str {
    if position.is_last() {
        "Submit"
    } else {
        "Next"
    }
}
