//! Time-of-day values and closed-open working intervals within a single day.
//!
//! All values are local wall-clock minutes since midnight. There is no date and
//! no time zone here; callers normalize both schedules to the same reference
//! frame before comparing them.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in one day. Valid as an interval end ("until midnight"), never as a
/// [`TimeOfDay`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time as minutes since midnight, in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from a raw minute count. Fails for values `>= 1440`.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidTime(format!(
                "{} minutes is past the end of the day",
                minutes
            )));
        }
        Ok(TimeOfDay(minutes))
    }

    /// Build from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(ScheduleError::InvalidTime(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    /// Parse an `HH:MM` (or `H:MM`) wall-clock string.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(trimmed.to_string()))?;
        Ok(TimeOfDay((time.hour() * 60 + time.minute()) as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl TryFrom<u16> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(minutes: u16) -> Result<Self> {
        TimeOfDay::from_minutes(minutes)
    }
}

impl From<TimeOfDay> for u16 {
    fn from(t: TimeOfDay) -> u16 {
        t.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A working interval `[start, end)` in minutes since midnight.
///
/// The fields are plain data so that records loaded from storage can be carried
/// around before validation. Every operation that relies on the invariant
/// `0 <= start < end <= 1440` checks it first; [`crate::WeeklySchedule`] checks
/// it once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: u16,
    pub end: u16,
}

impl TimeInterval {
    /// Checked constructor.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        let interval = TimeInterval { start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Build from two `HH:MM` strings. `"24:00"` is accepted as the end bound.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = TimeOfDay::parse(start)?.minutes();
        let end = match end.trim() {
            "24:00" => MINUTES_PER_DAY,
            other => TimeOfDay::parse(other)?.minutes(),
        };
        TimeInterval::new(start, end)
    }

    /// Zero-length and overnight-wrapping intervals are rejected, not normalized.
    pub fn validate(&self) -> Result<()> {
        if self.start < self.end && self.end <= MINUTES_PER_DAY {
            Ok(())
        } else {
            Err(ScheduleError::InvalidInterval {
                start: self.start,
                end: self.end,
            })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Intersection of two intervals, if their overlap has positive length.
    ///
    /// Touching intervals (one ends exactly when the other starts) do not
    /// overlap. Both operands must be valid.
    pub fn overlap_with(&self, other: &TimeInterval) -> Result<Option<TimeInterval>> {
        self.validate()?;
        other.validate()?;
        Ok(self.intersect(other))
    }

    /// Overlap arithmetic on operands already known to be valid.
    pub(crate) fn intersect(&self, other: &TimeInterval) -> Option<TimeInterval> {
        if self.start < other.end && other.start < self.end {
            Some(TimeInterval {
                start: self.start.max(other.start),
                end: self.end.min(other.end),
            })
        } else {
            None
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time.minutes() && time.minutes() < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
