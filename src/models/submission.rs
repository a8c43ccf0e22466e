//! Submission model
//!
//! A completed application handed to the submission collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form::FormState;

/// A completed application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Unique identifier for this submit action
    pub id: Uuid,

    /// When Submit was pressed (UTC)
    pub submitted_at: DateTime<Utc>,

    /// Every answer collected, as entered
    pub form: FormState,
}

impl Submission {
    /// Create a submission from the current answers
    pub fn new(form: FormState) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
        }
    }

    /// Short identifier for display
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
