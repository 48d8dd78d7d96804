//! Typed payloads for the outgoing command boundary.
//!
//! # Responsibility
//! - Define the field patches the surrounding system sends to the store
//!   after a dashboard interaction (complete task, write entry).
//! - Format timestamps at the exact granularity the store expects.
//!
//! # Invariants
//! - The core never dispatches these itself; it only defines their shape.
//! - Timestamps are minute precision, no seconds, no offset.

use crate::model::record::TaskStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Field patch marking a task as completed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCompletionPatch {
    pub status: TaskStatus,
    /// `YYYY-MM-DDTHH:mm`, see [`minute_timestamp`].
    pub completed_at: String,
}

impl TaskCompletionPatch {
    /// Builds the done-patch for the given completion instant.
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            status: TaskStatus::Done,
            completed_at: minute_timestamp(instant),
        }
    }
}

/// Create-payload for a new journal entry written from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJournalEntry {
    pub title: String,
    pub text: String,
    /// `YYYY-MM-DDTHH:mm`, see [`minute_timestamp`].
    pub occurred_at: String,
    pub is_private: bool,
    pub source_type: String,
}

impl NewJournalEntry {
    /// Builds an entry payload occurring at the given instant.
    pub fn at(
        title: impl Into<String>,
        text: impl Into<String>,
        instant: NaiveDateTime,
        is_private: bool,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            occurred_at: minute_timestamp(instant),
            is_private,
            source_type: "dashboard".to_string(),
        }
    }
}

/// Formats an instant as `YYYY-MM-DDTHH:mm`.
///
/// The store rejects seconds and offsets, so this is the only timestamp
/// format the command boundary may produce.
pub fn minute_timestamp(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m-%dT%H:%M").to_string()
}
