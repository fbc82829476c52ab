//! Error types for shift-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A time interval violates `0 <= start < end <= 1440`.
    #[error("Invalid interval: {start}..{end} (expected 0 <= start < end <= 1440)")]
    InvalidInterval { start: u16, end: u16 },

    /// An enabled day slot carries no interval.
    #[error("Day {day} is enabled but has no working interval")]
    MissingInterval { day: u8 },

    /// A weekly schedule does not hold exactly one slot per day of week.
    #[error("Incomplete schedule: {0}")]
    IncompleteSchedule(String),

    /// A day index outside `0..=6`, or an unrecognised day name.
    #[error("Invalid day of week: {0}")]
    InvalidDay(String),

    /// A time-of-day string that is not `HH:MM`.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// Employment input that is not a JSON array at all.
    #[error("Employments input is not a JSON array: {0}")]
    InvalidEmployments(String),
}

impl ScheduleError {
    /// True for the errors that describe a bad time range rather than a
    /// structurally broken schedule.
    pub fn is_interval_error(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidInterval { .. }
                | ScheduleError::MissingInterval { .. }
                | ScheduleError::InvalidTime(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
