//! Loan Wizard - terminal small business loan application
//!
//! This library provides the core of a nine-step loan questionnaire: the
//! step catalog, the flow controller that decides where Next and Back go,
//! the completion gate, and the session that ties them to a submitter.
//! Applicants whose business is too young or whose credit score is too low
//! are routed to one of two recommendation screens instead.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Step catalog, answers, positions and submissions
//! - `services`: Flow controller, completion gate and submitters
//! - `wizard`: The session, and the line-based prompt front end
//! - `tui`: The full-screen front end
//! - `audit`: Audit logging of wizard events
//! - `cli`, `display`, `export`: Non-interactive commands and their output
//!
//! # Example
//!
//! ```rust,ignore
//! use loan_wizard::config::Settings;
//! use loan_wizard::models::FormField;
//! use loan_wizard::services::MemorySubmitter;
//! use loan_wizard::wizard::WizardSession;
//!
//! let settings = Settings::default();
//! let mut session = WizardSession::new(&settings, MemorySubmitter::new());
//! session.set_field(FormField::LoanAmount, "$10,000 - $50,000");
//! session.next()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;
pub mod wizard;

pub use error::WizardError;
