//! Audit entry data structures
//!
//! Defines the wizard events recorded in the audit log. Entries name the
//! field that changed but never carry the entered value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BranchScreen, FormField, Position};

/// Kinds of wizard events that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An answer was entered or changed
    FieldSet,
    /// Moved between steps
    Navigated,
    /// Detoured to a branch screen
    Branched,
    /// Next was pressed while unavailable
    Blocked,
    /// Next was refused because of bad input
    Rejected,
    /// The application was handed to the submitter
    Submitted,
    /// The call-to-action on a branch screen was used
    BranchAction,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::FieldSet => write!(f, "FIELD_SET"),
            EventKind::Navigated => write!(f, "NAVIGATED"),
            EventKind::Branched => write!(f, "BRANCHED"),
            EventKind::Blocked => write!(f, "BLOCKED"),
            EventKind::Rejected => write!(f, "REJECTED"),
            EventKind::Submitted => write!(f, "SUBMITTED"),
            EventKind::BranchAction => write!(f, "BRANCH_ACTION"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub event: EventKind,

    /// Position when the event happened
    pub position: Position,

    /// Destination for navigation events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Position>,

    /// Field key for field events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Free-form detail (submission id, rejection reason, redirect target)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    fn at(event: EventKind, position: Position) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            position,
            to: None,
            field: None,
            detail: None,
        }
    }

    /// An answer was set
    pub fn field_set(position: Position, field: FormField) -> Self {
        Self {
            field: Some(field.key().to_string()),
            ..Self::at(EventKind::FieldSet, position)
        }
    }

    /// The applicant moved; recorded as `Branched` when the destination is a branch screen
    pub fn navigated(from: Position, to: Position) -> Self {
        let event = match to {
            Position::Branch(_) => EventKind::Branched,
            Position::Step(_) => EventKind::Navigated,
        };
        Self {
            to: Some(to),
            ..Self::at(event, from)
        }
    }

    pub fn blocked(position: Position) -> Self {
        Self::at(EventKind::Blocked, position)
    }

    pub fn rejected(position: Position, reason: impl Into<String>) -> Self {
        Self {
            detail: Some(reason.into()),
            ..Self::at(EventKind::Rejected, position)
        }
    }

    pub fn submitted(position: Position, submission_id: impl Into<String>) -> Self {
        Self {
            detail: Some(submission_id.into()),
            ..Self::at(EventKind::Submitted, position)
        }
    }

    pub fn branch_action(screen: BranchScreen) -> Self {
        Self {
            detail: Some(screen.action_target().to_string()),
            ..Self::at(EventKind::BranchAction, Position::Branch(screen))
        }
    }

    /// Format entry for human-readable display
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} at {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.position
        );

        if let Some(to) = &self.to {
            output.push_str(&format!(" -> {}", to));
        }
        if let Some(field) = &self.field {
            output.push_str(&format!(" [{}]", field));
        }
        if let Some(detail) = &self.detail {
            output.push_str(&format!(": {}", detail));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_set_records_key_only() {
        let entry = AuditEntry::field_set(Position::Step(8), FormField::Email);
        assert_eq!(entry.event, EventKind::FieldSet);
        assert_eq!(entry.field.as_deref(), Some("Email"));
        assert!(entry.detail.is_none());
    }

    #[test]
    fn test_navigation_to_branch_is_branched() {
        let entry = AuditEntry::navigated(
            Position::Step(4),
            Position::Branch(BranchScreen::CreditRepair),
        );
        assert_eq!(entry.event, EventKind::Branched);

        let entry = AuditEntry::navigated(Position::Step(4), Position::Step(5));
        assert_eq!(entry.event, EventKind::Navigated);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::blocked(Position::Step(0));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"], "blocked");
        assert!(json.get("to").is_none());
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::navigated(Position::Step(1), Position::Step(2));
        let text = entry.format_human_readable();
        assert!(text.contains("NAVIGATED at step 1 -> step 2"));

        let entry = AuditEntry::branch_action(BranchScreen::CreditCardIntro);
        assert!(entry
            .format_human_readable()
            .ends_with("BRANCH_ACTION at creditCardIntro: credit card offers"));
    }
}
