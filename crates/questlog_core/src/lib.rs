//! Core derivation engine for the questlog dashboard.
//! This crate is the single source of truth for view-model computation.
//!
//! The engine turns raw record snapshots fetched from the remote store
//! (tasks, task definitions, categories, XP events, journal entries) into
//! the immutable [`DashboardModel`] the presentation layer renders. Every
//! derivation is a pure function of a [`Snapshot`] and an explicit
//! evaluation day; nothing in here reads the wall clock or mutates input.

pub mod derive;
pub mod logging;
pub mod model;
pub mod source;

pub use derive::dashboard::{derive_dashboard, DashboardModel};
pub use derive::enrich::{enrich_task, partition_by_status, EnrichedTask, TaskPartition};
pub use derive::lookup::{build_index, extract_record_id, resolve, RecordIndex};
pub use derive::reward::{xp_reward, FALLBACK_XP};
pub use derive::streak::current_streak;
pub use derive::xp::{sum_for_day, weekly_series, WeeklyXpPoint};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::calendar::{CalendarDay, DateError};
pub use model::patch::{minute_timestamp, NewJournalEntry, TaskCompletionPatch};
pub use model::record::{
    Category, CategoryFields, JournalEntry, JournalEntryFields, Record, RecordId, Task,
    TaskDefinition, TaskDefinitionFields, TaskFields, TaskStatus, XpEvent, XpEventFields,
};
pub use source::{
    decode_collection, load_snapshot, FileSnapshotSource, RecordSource, Snapshot, SourceError,
    SourceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
