//! Daily and weekly XP aggregation.
//!
//! # Responsibility
//! - Sum earned XP per calendar day from the XP event collection.
//! - Produce the fixed 7-day trailing series for the weekly chart.
//!
//! # Invariants
//! - Day matching is exact string equality on the `YYYY-MM-DD` form.
//! - An absent `final_xp` counts as 0, never an error.
//! - The weekly series always has exactly 7 points, oldest first.

use crate::model::calendar::CalendarDay;
use crate::model::record::XpEvent;
use serde::Serialize;

/// One point of the weekly XP chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyXpPoint {
    /// Short weekday label for the chart axis.
    pub day_label: &'static str,
    pub date: CalendarDay,
    pub xp: f64,
}

/// Sums `final_xp` over events dated exactly `day`.
pub fn sum_for_day(events: &[XpEvent], day: CalendarDay) -> f64 {
    let day = day.to_string();
    events
        .iter()
        .filter(|event| event.fields.date.as_deref() == Some(day.as_str()))
        .map(|event| event.fields.final_xp.unwrap_or(0.0))
        .sum()
}

/// Builds the 7-day trailing series `today-6 ..= today`, oldest first.
///
/// Days without events yield `xp = 0`; the length is 7 regardless of data
/// sparsity.
pub fn weekly_series(events: &[XpEvent], today: CalendarDay) -> Vec<WeeklyXpPoint> {
    (0..7u64)
        .rev()
        .map(|offset| {
            let date = today.minus_days(offset);
            WeeklyXpPoint {
                day_label: date.weekday_label(),
                date,
                xp: sum_for_day(events, date),
            }
        })
        .collect()
}
