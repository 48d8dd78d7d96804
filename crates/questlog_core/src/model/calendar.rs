//! Calendar-day value type and arithmetic.
//!
//! # Responsibility
//! - Parse the store's date strings (`YYYY-MM-DD`, optionally with a
//!   `THH:mm` time suffix) into a comparable day value.
//! - Provide the single-day stepping used by streak and weekly rollups.
//!
//! # Invariants
//! - Days carry no time-of-day and no timezone; "today" is always passed
//!   in explicitly by the caller.
//! - Malformed date strings surface [`DateError::InvalidDateFormat`]
//!   instead of silently defaulting.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Error for date strings the core cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input did not match `YYYY-MM-DD` (after stripping any time suffix).
    InvalidDateFormat { value: String },
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat { value } => {
                write!(f, "invalid date format `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for DateError {}

/// A date without time-of-day or timezone.
///
/// Ordering and equality follow the calendar; the `Display` form is the
/// store's wire spelling `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Parses a bare `YYYY-MM-DD` day string.
    pub fn parse(value: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(value, DAY_FORMAT)
            .map(Self)
            .map_err(|_| DateError::InvalidDateFormat {
                value: value.to_string(),
            })
    }

    /// Parses the calendar day of a timestamp string.
    ///
    /// Accepts either a bare day or `YYYY-MM-DDTHH:mm`; everything after
    /// the first literal `T` is ignored.
    pub fn from_timestamp(value: &str) -> Result<Self, DateError> {
        let day_part = value.split_once('T').map_or(value, |(day, _)| day);
        Self::parse(day_part).map_err(|_| DateError::InvalidDateFormat {
            value: value.to_string(),
        })
    }

    /// Returns the process-local calendar day.
    ///
    /// Boundary convenience only; core derivations take the evaluation day
    /// as a parameter.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// The previous calendar day. Saturates at the representable minimum.
    pub fn pred(self) -> Self {
        self.minus_days(1)
    }

    /// The next calendar day. Saturates at the representable maximum.
    pub fn succ(self) -> Self {
        self.0.succ_opt().map(Self).unwrap_or(self)
    }

    /// The day `n` days earlier. Saturates at the representable minimum.
    pub fn minus_days(self, n: u64) -> Self {
        self.0.checked_sub_days(Days::new(n)).map(Self).unwrap_or(self)
    }

    /// Short weekday label (de locale, matching the dashboard UI).
    pub fn weekday_label(self) -> &'static str {
        match self.0.weekday() {
            Weekday::Mon => "Mo",
            Weekday::Tue => "Di",
            Weekday::Wed => "Mi",
            Weekday::Thu => "Do",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
            Weekday::Sun => "So",
        }
    }
}

impl Display for CalendarDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
