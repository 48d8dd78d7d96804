//! Consecutive-day journaling streak.
//!
//! # Responsibility
//! - Derive the current streak from journal entry timestamps.
//!
//! # Invariants
//! - Tombstoned entries and entries without `occurred_at` never count.
//! - Multiple entries on the same day collapse to one.
//! - The streak anchors at today or yesterday; an older most-recent entry
//!   means the streak is already broken and the result is 0.

use crate::model::calendar::{CalendarDay, DateError};
use crate::model::record::JournalEntry;
use std::collections::BTreeSet;

/// Computes the current consecutive-day streak at the given evaluation day.
///
/// Greedy walk backward from the most recent journaled day: each exactly
/// adjacent earlier day extends the streak, the first gap ends it. A long
/// unbroken run further in the past does not count once broken.
///
/// # Errors
/// Returns [`DateError::InvalidDateFormat`] when an active entry carries an
/// `occurred_at` the calendar cannot parse.
pub fn current_streak(entries: &[JournalEntry], today: CalendarDay) -> Result<u32, DateError> {
    let mut days = BTreeSet::new();
    for entry in entries {
        if !entry.is_active() {
            continue;
        }
        if let Some(occurred_at) = entry.fields.occurred_at.as_deref() {
            days.insert(CalendarDay::from_timestamp(occurred_at)?);
        }
    }

    let mut recent_first = days.iter().rev().copied();
    let Some(anchor) = recent_first.next() else {
        return Ok(0);
    };
    if anchor != today && anchor != today.pred() {
        return Ok(0);
    }

    let mut streak = 1;
    let mut expected = anchor.pred();
    for day in recent_first {
        if day != expected {
            break;
        }
        streak += 1;
        expected = day.pred();
    }

    Ok(streak)
}
