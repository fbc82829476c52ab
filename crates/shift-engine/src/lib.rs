//! # shift-engine
//!
//! Weekly work-schedule conflict detection.
//!
//! Given a person's existing weekly commitments across one or more employers and
//! a candidate weekly schedule (a job vacancy, a new assignment), the engine
//! finds every day of the week on which the two overlap in wall-clock time and
//! reports the exact overlapping intervals.
//!
//! Everything here is pure and synchronous: no I/O, no shared state. Times are
//! minutes since midnight in a single agreed reference frame, and days are
//! indexed 0 = Sunday .. 6 = Saturday.
//!
//! ## Quick start
//!
//! ```rust
//! use shift_engine::{detect_conflicts, DayOfWeek, Employment, TimeInterval, WeeklySchedule};
//!
//! let candidate = WeeklySchedule::from_active([
//!     (DayOfWeek::MONDAY, TimeInterval::parse("08:00", "16:00").unwrap()),
//! ])
//! .unwrap();
//! let cafe = WeeklySchedule::from_active([
//!     (DayOfWeek::MONDAY, TimeInterval::parse("14:00", "22:00").unwrap()),
//! ])
//! .unwrap();
//!
//! let report = detect_conflicts(&candidate, &[Employment::new("b-1", "Cafe", &cafe)]);
//! assert_eq!(report.total_conflicting_days, 1);
//! assert_eq!(report.conflicts[0].overlap_details[0].overlap_minutes(), 120);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `TimeOfDay` and `TimeInterval` overlap arithmetic
//! - [`schedule`] — `DayOfWeek`, `DaySlot`, validated `WeeklySchedule`
//! - [`hours`] — day-name-keyed hours with `HH:MM` strings
//! - [`employment`] — employer identity bound to weekly hours
//! - [`conflict`] — per-employment, per-day overlap detection
//! - [`report`] — severity tiers and summaries
//! - [`error`] — Error types

pub mod conflict;
pub mod employment;
pub mod error;
pub mod hours;
pub mod interval;
pub mod report;
pub mod schedule;

pub use conflict::{
    check_conflicts, detect_conflicts, detect_conflicts_json, ConflictDetail, ConflictReport,
    EmploymentConflict, SkippedEmployment,
};
pub use employment::{employments_from_json, Employment};
pub use error::ScheduleError;
pub use hours::{DayHours, WeeklyHours};
pub use interval::{TimeInterval, TimeOfDay, MINUTES_PER_DAY};
pub use report::{summarize, summarize_with, ConflictSummary, Severity, SeverityPolicy};
pub use schedule::{DayOfWeek, DaySlot, WeeklySchedule};
