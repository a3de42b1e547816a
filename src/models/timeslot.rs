//! Timeslot model.
//!
//! # Time Model
//! Start and end times are wall-clock strings in fixed `HH:MM` format.
//! Within a day they sort correctly by plain string comparison, so the
//! engine never parses them to order timeslots. Distinct timeslots are
//! assumed not to overlap.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Timeslot identifier.
pub type TimeslotId = u32;

/// Day of the week. Ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in week order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Full English day name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A teaching period on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    /// Unique timeslot identifier.
    pub id: TimeslotId,
    /// Day the period falls on.
    pub day_of_week: DayOfWeek,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
}

impl Timeslot {
    /// Creates a timeslot.
    pub fn new(
        id: TimeslotId,
        day_of_week: DayOfWeek,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            day_of_week,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Chronological order: (day, start time), then ID for a total order.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.day_of_week
            .cmp(&other.day_of_week)
            .then_with(|| self.start_time.cmp(&other.start_time))
            .then_with(|| self.id.cmp(&other.id))
    }

    /// Length of the period in minutes.
    ///
    /// Returns `None` if either time is malformed or the end is not after the start.
    pub fn duration_minutes(&self) -> Option<u32> {
        let start = parse_hhmm(&self.start_time)?;
        let end = parse_hhmm(&self.end_time)?;
        end.checked_sub(start).filter(|&d| d > 0)
    }

    /// Row label used by timetable views, e.g. `"09:00 - 11:00"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Whether `s` is a well-formed `HH:MM` wall-clock time (00:00 through 23:59).
pub fn is_valid_time(s: &str) -> bool {
    parse_hhmm(s).is_some()
}

/// Parses `HH:MM` into minutes after midnight.
fn parse_hhmm(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digit = |b: u8| b.is_ascii_digit().then(|| u32::from(b - b'0'));
    let hours = digit(bytes[0])? * 10 + digit(bytes[1])?;
    let minutes = digit(bytes[3])? * 10 + digit(bytes[4])?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}
