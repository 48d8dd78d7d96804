//! Dashboard view-model assembly.
//!
//! # Responsibility
//! - Orchestrate lookup, enrichment, aggregation and streak derivation
//!   over one snapshot of the five input collections.
//!
//! # Invariants
//! - Pure and deterministic: same snapshot + same evaluation day, same
//!   model. No I/O, no clock reads, inputs never mutated.
//! - Recomputed from scratch on every refresh; stale models are discarded
//!   whole, never patched.

use crate::derive::enrich::{enrich_task, partition_by_status, EnrichedTask};
use crate::derive::lookup::build_index;
use crate::derive::streak::current_streak;
use crate::derive::xp::{sum_for_day, weekly_series, WeeklyXpPoint};
use crate::model::calendar::{CalendarDay, DateError};
use crate::model::record::JournalEntry;
use crate::source::Snapshot;
use log::debug;
use serde::Serialize;

/// How many journal entries the dashboard shows in its recency list.
const RECENT_ENTRY_LIMIT: usize = 5;

/// The fully derived, presentation-ready dashboard aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardModel {
    /// Enriched tasks with status `open`, in snapshot order.
    pub open_tasks: Vec<EnrichedTask>,
    /// XP earned on the evaluation day.
    pub today_xp: f64,
    /// Count of tasks completed on the evaluation day.
    pub tasks_completed_today: usize,
    /// Open plus completed-today count.
    pub total_tasks_today: usize,
    /// Current consecutive-day journaling streak.
    pub streak: u32,
    /// Fixed 7-point trailing XP series, oldest first.
    pub weekly_xp: Vec<WeeklyXpPoint>,
    /// The 5 most recent active entries, newest first.
    pub recent_entries: Vec<JournalEntry>,
}

/// Derives the dashboard model for one snapshot and evaluation day.
///
/// # Errors
/// Returns [`DateError::InvalidDateFormat`] when an active journal entry
/// carries an unparseable `occurred_at`; every other absent or malformed
/// optional field degrades gracefully.
pub fn derive_dashboard(snapshot: &Snapshot, today: CalendarDay) -> Result<DashboardModel, DateError> {
    let definitions = build_index(&snapshot.task_definitions);
    let categories = build_index(&snapshot.categories);

    let enriched: Vec<EnrichedTask> = snapshot
        .tasks
        .iter()
        .map(|task| enrich_task(task, &definitions, &categories))
        .collect();
    let partition = partition_by_status(enriched, today);

    let today_xp = sum_for_day(&snapshot.xp_events, today);
    let weekly_xp = weekly_series(&snapshot.xp_events, today);
    let streak = current_streak(&snapshot.journal_entries, today)?;
    let recent_entries = recent_entries(&snapshot.journal_entries);

    let tasks_completed_today = partition.completed_today.len();
    let model = DashboardModel {
        total_tasks_today: partition.open.len() + tasks_completed_today,
        open_tasks: partition.open,
        today_xp,
        tasks_completed_today,
        streak,
        weekly_xp,
        recent_entries,
    };

    debug!(
        "event=dashboard_derived module=derive status=ok day={} open={} completed_today={} streak={}",
        today,
        model.open_tasks.len(),
        model.tasks_completed_today,
        model.streak
    );

    Ok(model)
}

/// Active entries sorted by `occurred_at` descending, truncated to 5.
///
/// The sort is stable, so equal timestamps keep their snapshot order;
/// entries without `occurred_at` sort last.
fn recent_entries(entries: &[JournalEntry]) -> Vec<JournalEntry> {
    let mut recent: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| entry.is_active())
        .cloned()
        .collect();
    recent.sort_by(|a, b| {
        let a_at = a.fields.occurred_at.as_deref().unwrap_or("");
        let b_at = b.fields.occurred_at.as_deref().unwrap_or("");
        b_at.cmp(a_at)
    });
    recent.truncate(RECENT_ENTRY_LIMIT);
    recent
}
