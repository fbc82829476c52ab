//! Day-keyed weekly hours, the shape the host application stores.
//!
//! ```json
//! {
//!   "monday":  { "enabled": true,  "start": "09:00", "end": "17:00" },
//!   "tuesday": { "enabled": false }
//! }
//! ```
//!
//! Keys are English day names (full or three-letter, any case). Converting to a
//! [`WeeklySchedule`] applies the same validation as [`WeeklySchedule::new`];
//! days absent from the map are an error, not a day off.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::TimeInterval;
use crate::schedule::{DayOfWeek, DaySlot, WeeklySchedule};

/// Hours for a single day, with free-form `HH:MM` times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Weekly hours keyed by day name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyHours(pub BTreeMap<String, DayHours>);

const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

impl WeeklyHours {
    /// Convert to day slots ordered by day index.
    ///
    /// Times on disabled days are not parsed.
    pub fn to_day_slots(&self) -> Result<Vec<DaySlot>> {
        let mut slots = Vec::with_capacity(self.0.len());
        for (name, hours) in &self.0 {
            let weekday: Weekday = name
                .parse()
                .map_err(|_| ScheduleError::InvalidDay(name.clone()))?;
            let day = DayOfWeek::from(weekday);

            if !hours.enabled {
                slots.push(DaySlot::off(day));
                continue;
            }

            let (start, end) = match (&hours.start, &hours.end) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(ScheduleError::MissingInterval { day: day.index() }),
            };
            slots.push(DaySlot::active(day, TimeInterval::parse(start, end)?));
        }
        slots.sort_by_key(|slot| slot.day);
        Ok(slots)
    }

    pub fn to_schedule(&self) -> Result<WeeklySchedule> {
        WeeklySchedule::new(self.to_day_slots()?)
    }

    /// Render a schedule back into the day-keyed form, full lowercase names.
    pub fn from_schedule(schedule: &WeeklySchedule) -> Self {
        let map = schedule
            .slots()
            .iter()
            .map(|slot| {
                let hours = match slot.interval {
                    Some(interval) if slot.enabled => DayHours {
                        enabled: true,
                        start: Some(clock(interval.start)),
                        end: Some(clock(interval.end)),
                    },
                    _ => DayHours::default(),
                };
                (DAY_NAMES[slot.day as usize].to_string(), hours)
            })
            .collect();
        WeeklyHours(map)
    }
}

fn clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
