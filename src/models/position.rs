//! Wizard position
//!
//! Where the applicant currently is: one of the numbered steps, or one of the
//! informational screens reached by branching off a step.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::step::{self, StepDefinition, CREDIT_SCORE_STEP, START_DATE_STEP};

/// Informational detour screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BranchScreen {
    /// Business is too young for a loan
    CreditCardIntro,
    /// Credit score is too low for a loan
    CreditRepair,
}

impl BranchScreen {
    /// Step the applicant came from, and returns to on Back
    pub fn origin_step(&self) -> usize {
        match self {
            Self::CreditCardIntro => START_DATE_STEP,
            Self::CreditRepair => CREDIT_SCORE_STEP,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::CreditCardIntro => "Business Credit Cards",
            Self::CreditRepair => "Credit Repair Services",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Self::CreditCardIntro => "Since your business is less than a year old, we recommend looking into business credit cards. They can help you build credit and manage expenses as your business grows.",
            Self::CreditRepair => "It looks like your credit score is below 500. We recommend working with a credit repair service to improve your score before applying for a business loan.",
        }
    }

    /// Label of the single call-to-action
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::CreditCardIntro => "Learn More About Credit Cards",
            Self::CreditRepair => "Learn More About Credit Repair",
        }
    }

    /// Where the call-to-action sends the applicant
    pub fn action_target(&self) -> &'static str {
        match self {
            Self::CreditCardIntro => "credit card offers",
            Self::CreditRepair => "credit repair services",
        }
    }
}

impl fmt::Display for BranchScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCardIntro => write!(f, "creditCardIntro"),
            Self::CreditRepair => write!(f, "creditRepair"),
        }
    }
}

/// Current location in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Index into the step catalog
    Step(usize),
    /// One of the detour screens
    Branch(BranchScreen),
}

impl Default for Position {
    fn default() -> Self {
        Self::Step(0)
    }
}

impl Position {
    /// The step definition at this position, if it is a step
    pub fn step(&self) -> Option<&'static StepDefinition> {
        match self {
            Self::Step(index) => step::step(*index),
            Self::Branch(_) => None,
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::Step(0))
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Step(i) if *i == step::LAST_STEP)
    }

    pub fn branch(&self) -> Option<BranchScreen> {
        match self {
            Self::Branch(b) => Some(*b),
            Self::Step(_) => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(i) => write!(f, "step {}", i),
            Self::Branch(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_origins() {
        assert_eq!(BranchScreen::CreditCardIntro.origin_step(), 1);
        assert_eq!(BranchScreen::CreditRepair.origin_step(), 4);
    }

    #[test]
    fn test_position_helpers() {
        assert!(Position::default().is_first());
        assert!(Position::Step(8).is_last());
        assert!(!Position::Branch(BranchScreen::CreditRepair).is_last());
        assert!(Position::Branch(BranchScreen::CreditRepair).step().is_none());
        assert_eq!(Position::Step(2).step().unwrap().title, "Monthly Revenue");
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::Step(3).to_string(), "step 3");
        assert_eq!(
            Position::Branch(BranchScreen::CreditCardIntro).to_string(),
            "creditCardIntro"
        );
    }
}
