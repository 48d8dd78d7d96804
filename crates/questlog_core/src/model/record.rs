//! Record envelope and entity field structs.
//!
//! # Responsibility
//! - Mirror the remote store's wire shape: an envelope with opaque id and
//!   timestamps, plus a nested `fields` mapping of optional attributes.
//! - Keep one generic envelope so every collection shares identity and
//!   lifecycle handling.
//!
//! # Invariants
//! - `record_id` is assigned by the external store and never changes.
//! - Every key inside `fields` is optional; `None` means "not set", not an
//!   error, and every consumer must handle absence explicitly.
//! - A journal entry with `deleted_at` set is a tombstone and participates
//!   in no temporal computation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier assigned by the external record store.
///
/// On the wire this is a 24-character hexadecimal run; the core treats it
/// as an opaque key and never inspects its structure outside the lookup
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generic record envelope shared by all collections.
///
/// `createdat`/`updatedat` keep their wire spelling; the core itself only
/// ever reads `record_id` and `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub record_id: RecordId,
    #[serde(rename = "createdat", default)]
    pub created_at: String,
    #[serde(rename = "updatedat", default)]
    pub updated_at: Option<String>,
    pub fields: F,
}

impl<F> Record<F> {
    /// Creates a snapshot record with empty envelope timestamps.
    ///
    /// Used by tests and import paths where only `record_id` and `fields`
    /// carry meaning.
    pub fn new(record_id: RecordId, fields: F) -> Self {
        Self {
            record_id,
            created_at: String::new(),
            updated_at: None,
            fields,
        }
    }
}

/// Task lifecycle state as stored by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Actionable and not yet completed.
    Open,
    /// Completed; `completed_at` records when.
    Done,
    /// No longer actionable; excluded from all dashboard buckets.
    Canceled,
}

/// Fields of a reusable task definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDefinitionFields {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Lookup reference to a category record.
    pub category_id: Option<String>,
    /// Overrides the category's base XP when present and non-zero.
    pub xp_override: Option<f64>,
}

/// Fields of a task category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFields {
    pub key: Option<String>,
    pub name: Option<String>,
    /// Default XP for tasks in this category.
    pub base_xp: Option<f64>,
}

/// Fields of a concrete task instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFields {
    /// Lookup reference to a task definition record.
    pub task_definition_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    /// `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// `YYYY-MM-DDTHH:mm`, minute precision, set when status becomes done.
    pub completed_at: Option<String>,
}

/// Fields of an earned-XP event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct XpEventFields {
    /// Calendar day the XP was earned on, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Absent counts as 0 in every aggregation.
    pub final_xp: Option<f64>,
    pub reason: Option<String>,
}

/// Fields of a journal entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalEntryFields {
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm`; the calendar day is the part
    /// before the literal `T`.
    pub occurred_at: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub is_private: Option<bool>,
    pub source_type: Option<String>,
    /// Soft delete tombstone; presence excludes the entry everywhere.
    pub deleted_at: Option<String>,
}

pub type TaskDefinition = Record<TaskDefinitionFields>;
pub type Category = Record<CategoryFields>;
pub type Task = Record<TaskFields>;
pub type XpEvent = Record<XpEventFields>;
pub type JournalEntry = Record<JournalEntryFields>;

impl JournalEntry {
    /// Returns whether this entry should be considered visible/active.
    pub fn is_active(&self) -> bool {
        self.fields.deleted_at.is_none()
    }
}
