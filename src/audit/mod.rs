//! Audit logging for the loan wizard
//!
//! Records navigation, answer changes and submissions in an append-only
//! line-delimited JSON log (JSONL).
//!
//! - `AuditEntry`: one event with a timestamp, the position it happened at,
//!   and optional destination, field key and detail.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use loan_wizard::audit::{AuditEntry, AuditLogger};
//! use loan_wizard::models::Position;
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::navigated(Position::Step(0), Position::Step(1)))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EventKind};
pub use logger::AuditLogger;
