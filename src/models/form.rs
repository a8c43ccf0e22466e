//! Form state model
//!
//! The answers collected by the wizard, keyed by a closed set of fields.
//! Values are stored exactly as entered; nothing is trimmed or coerced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every answer the wizard can collect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    LoanAmount,
    StartMonth,
    StartYear,
    MonthlyRevenue,
    ImportantFactor,
    CreditScore,
    BusinessType,
    Industry,
    UseOfFunds,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl FormField {
    /// All fields in the order they are asked
    pub const ALL: [FormField; 13] = [
        FormField::LoanAmount,
        FormField::StartMonth,
        FormField::StartYear,
        FormField::MonthlyRevenue,
        FormField::ImportantFactor,
        FormField::CreditScore,
        FormField::BusinessType,
        FormField::Industry,
        FormField::UseOfFunds,
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
    ];

    /// Key used when the answers are handed to a submitter
    pub fn key(&self) -> &'static str {
        match self {
            Self::LoanAmount => "Loan Amount",
            Self::StartMonth => "StartMonth",
            Self::StartYear => "StartYear",
            Self::MonthlyRevenue => "Monthly Revenue",
            Self::ImportantFactor => "Important Factor",
            Self::CreditScore => "Credit Score",
            Self::BusinessType => "Business Type",
            Self::Industry => "Industry",
            Self::UseOfFunds => "Use of Funds",
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    /// Human-readable label for inputs and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartMonth => "Month",
            Self::StartYear => "Year",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            other => other.key(),
        }
    }

    /// Look up a field by its submission key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Accumulated answers
///
/// Serializes as a flat map using [`FormField::key`] names; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(rename = "Loan Amount", default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<String>,

    #[serde(rename = "StartMonth", default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<String>,

    #[serde(rename = "StartYear", default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,

    #[serde(rename = "Monthly Revenue", default, skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<String>,

    #[serde(rename = "Important Factor", default, skip_serializing_if = "Option::is_none")]
    pub important_factor: Option<String>,

    #[serde(rename = "Credit Score", default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<String>,

    #[serde(rename = "Business Type", default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(rename = "Industry", default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(rename = "Use of Funds", default, skip_serializing_if = "Option::is_none")]
    pub use_of_funds: Option<String>,

    #[serde(rename = "FirstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(rename = "LastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "Phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::LoanAmount => &self.loan_amount,
            FormField::StartMonth => &self.start_month,
            FormField::StartYear => &self.start_year,
            FormField::MonthlyRevenue => &self.monthly_revenue,
            FormField::ImportantFactor => &self.important_factor,
            FormField::CreditScore => &self.credit_score,
            FormField::BusinessType => &self.business_type,
            FormField::Industry => &self.industry,
            FormField::UseOfFunds => &self.use_of_funds,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::LoanAmount => &mut self.loan_amount,
            FormField::StartMonth => &mut self.start_month,
            FormField::StartYear => &mut self.start_year,
            FormField::MonthlyRevenue => &mut self.monthly_revenue,
            FormField::ImportantFactor => &mut self.important_factor,
            FormField::CreditScore => &mut self.credit_score,
            FormField::BusinessType => &mut self.business_type,
            FormField::Industry => &mut self.industry,
            FormField::UseOfFunds => &mut self.use_of_funds,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        }
    }

    /// Get the value entered for a field
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field, overwriting any previous value and leaving the others untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Whether a field holds a non-empty value
    pub fn is_filled(&self, field: FormField) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// Fields that currently hold a value, in question order
    pub fn entries(&self) -> Vec<(FormField, &str)> {
        FormField::ALL
            .iter()
            .filter_map(|&f| self.get(f).map(|v| (f, v)))
            .collect()
    }

    /// Check if no field has been set
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|&f| self.get(f).is_none())
    }
}
