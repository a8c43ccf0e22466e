//! Step catalog
//!
//! The nine questions of the loan application, in the order they are asked.

use serde::Serialize;
use std::fmt;

use super::form::FormField;

/// How a step collects its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Pick one of a list of options
    Select,
    /// Business start month and year
    Date,
    /// Pick an estimated FICO range
    Fico,
    /// Name, email and phone
    Contact,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Date => write!(f, "date"),
            Self::Fico => write!(f, "fico"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

/// A single question screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub title: &'static str,
    pub question: &'static str,
    pub kind: StepKind,
    /// Choices for select and fico steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    pub explanation: &'static str,
    /// Answer key for select and fico steps
    #[serde(skip)]
    pub field: Option<FormField>,
}

impl StepDefinition {
    /// Fields that must be non-empty before the step counts as answered
    pub fn required_fields(&self) -> &[FormField] {
        match self.kind {
            StepKind::Select | StepKind::Fico => {
                self.field.as_ref().map(std::slice::from_ref).unwrap_or(&[])
            }
            StepKind::Date => &[FormField::StartMonth, FormField::StartYear],
            StepKind::Contact => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::Email,
                FormField::Phone,
            ],
        }
    }

    /// Options to choose from, empty for free-form steps
    pub fn choices(&self) -> &'static [&'static str] {
        self.options.unwrap_or(&[])
    }
}

/// Months offered by the start date selector
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Credit score answer that sends the applicant to the credit repair screen
pub const LOWEST_CREDIT_SCORE: &str = "499 or below";

/// Index of the business start date step
pub const START_DATE_STEP: usize = 1;

/// Index of the credit score step
pub const CREDIT_SCORE_STEP: usize = 4;

/// Number of steps in the questionnaire
pub const STEP_COUNT: usize = 9;

/// The questionnaire, in order
pub static STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        title: "Loan Amount",
        question: "How much funding are you looking for?",
        kind: StepKind::Select,
        options: Some(&[
            "$10,000 - $50,000",
            "$50,001 - $100,000",
            "$100,001 - $250,000",
            "$250,001+",
        ]),
        explanation: "Select the range that best fits your funding needs. This helps us determine the most suitable loan options for your business.",
        field: Some(FormField::LoanAmount),
    },
    StepDefinition {
        title: "Business Start Date",
        question: "When did you start your business?",
        kind: StepKind::Date,
        options: None,
        explanation: "The age of your business helps us assess its stability and growth potential, which are factors in determining loan eligibility.",
        field: None,
    },
    StepDefinition {
        title: "Monthly Revenue",
        question: "On average, how much revenue does your business currently generate each month?",
        kind: StepKind::Select,
        options: Some(&[
            "$0",
            "$1 - $4K",
            "$5K - $7K",
            "$8K - $14K",
            "$15K - $19K",
            "$20K - $49K",
            "$50K - $79K",
            "$80K - $199K",
            "$200K+",
        ]),
        explanation: "Your monthly revenue gives us insight into your business's cash flow and ability to repay the loan.",
        field: Some(FormField::MonthlyRevenue),
    },
    StepDefinition {
        title: "Important Factor",
        question: "Which is most important to you?",
        kind: StepKind::Select,
        options: Some(&["Amount of Funds", "Speed of Funds", "Cost of Funds"]),
        explanation: "Understanding your priority helps us tailor the loan options to better meet your needs.",
        field: Some(FormField::ImportantFactor),
    },
    StepDefinition {
        title: "Credit Score",
        question: "What's your estimated FICO score?",
        kind: StepKind::Fico,
        options: Some(&[
            LOWEST_CREDIT_SCORE,
            "500 - 599",
            "600 - 649",
            "650 - 679",
            "680 - 719",
            "720 or above",
        ]),
        explanation: "Your credit score is one factor we consider in assessing your loan application. Don't worry if it's not perfect - we look at the overall picture of your business.",
        field: Some(FormField::CreditScore),
    },
    StepDefinition {
        title: "Business Type",
        question: "What type of entity is your business?",
        kind: StepKind::Select,
        options: Some(&["LLC", "Corporation", "Sole Proprietor", "Legal Partnership"]),
        explanation: "Your business structure can affect the types of loans you're eligible for and the application process.",
        field: Some(FormField::BusinessType),
    },
    StepDefinition {
        title: "Industry",
        question: "What industry is your business in?",
        kind: StepKind::Select,
        options: Some(&[
            "Retail",
            "Services",
            "Manufacturing",
            "Technology",
            "Healthcare",
            "Construction",
            "Other",
        ]),
        explanation: "Different industries have different financial characteristics. This helps us understand your business's specific needs and challenges.",
        field: Some(FormField::Industry),
    },
    StepDefinition {
        title: "Use of Funds",
        question: "How do you plan to use the funds?",
        kind: StepKind::Select,
        options: Some(&[
            "Expansion",
            "Equipment Purchase",
            "Working Capital",
            "Debt Refinancing",
            "Inventory",
            "Marketing",
            "Other",
        ]),
        explanation: "Understanding how you plan to use the funds helps us recommend the most appropriate financing options for your needs.",
        field: Some(FormField::UseOfFunds),
    },
    StepDefinition {
        title: "Contact Information",
        question: "Please provide your contact details",
        kind: StepKind::Contact,
        options: None,
        explanation: "We'll use this information to contact you about your loan application and potential offers.",
        field: None,
    },
];

/// Index of the final (submit) step
pub const LAST_STEP: usize = STEP_COUNT - 1;

/// Get a step by index
pub fn step(index: usize) -> Option<&'static StepDefinition> {
    STEPS.get(index)
}
