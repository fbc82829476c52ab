//! Recurring weekly schedules: seven day slots, each optionally active with one
//! working interval.
//!
//! A [`WeeklySchedule`] can only be obtained through validating constructors, so
//! once built it is guaranteed to hold exactly one slot per day and a valid
//! interval on every enabled day.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::TimeInterval;

/// Day index with 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: DayOfWeek = DayOfWeek(0);
    pub const MONDAY: DayOfWeek = DayOfWeek(1);
    pub const TUESDAY: DayOfWeek = DayOfWeek(2);
    pub const WEDNESDAY: DayOfWeek = DayOfWeek(3);
    pub const THURSDAY: DayOfWeek = DayOfWeek(4);
    pub const FRIDAY: DayOfWeek = DayOfWeek(5);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);

    pub fn new(index: u8) -> Result<Self> {
        if index <= 6 {
            Ok(DayOfWeek(index))
        } else {
            Err(ScheduleError::InvalidDay(format!(
                "index {} is outside 0..=6",
                index
            )))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// All seven days, Sunday first.
    pub fn all() -> impl Iterator<Item = DayOfWeek> {
        (0..7).map(DayOfWeek)
    }

    pub fn weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        DayOfWeek(weekday.num_days_from_sunday() as u8)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ScheduleError;

    fn try_from(index: u8) -> Result<Self> {
        DayOfWeek::new(index)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day.0
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One weekday's entry as delivered by the input supplier.
///
/// `interval` is required (and must be valid) when `enabled` is true, and is
/// ignored otherwise. Nothing here is checked until the slot goes through
/// [`WeeklySchedule::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub day: u8,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<TimeInterval>,
}

impl DaySlot {
    /// An enabled slot working `interval` on `day`.
    pub fn active(day: DayOfWeek, interval: TimeInterval) -> Self {
        DaySlot {
            day: day.index(),
            enabled: true,
            interval: Some(interval),
        }
    }

    /// A day off.
    pub fn off(day: DayOfWeek) -> Self {
        DaySlot {
            day: day.index(),
            enabled: false,
            interval: None,
        }
    }

    /// Check the slot and drop any interval carried by a disabled day.
    fn normalized(self) -> Result<DaySlot> {
        if !self.enabled {
            return Ok(DaySlot {
                interval: None,
                ..self
            });
        }
        let interval = self
            .interval
            .ok_or(ScheduleError::MissingInterval { day: self.day })?;
        interval.validate()?;
        Ok(self)
    }
}

/// Exactly seven validated day slots, indexed by [`DayOfWeek`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DaySlot>", into = "Vec<DaySlot>")]
pub struct WeeklySchedule {
    slots: [DaySlot; 7],
}

impl WeeklySchedule {
    /// Build a schedule from exactly seven slots, one per day index.
    ///
    /// Missing days are never filled in: guessing whether somebody works on a
    /// day is unsafe for a double-booking check.
    ///
    /// # Errors
    /// - `IncompleteSchedule` for a slot count other than seven, or a duplicated
    ///   or missing day index.
    /// - `InvalidDay` for an index above 6.
    /// - `MissingInterval` / `InvalidInterval` for an enabled slot without a
    ///   valid interval.
    pub fn new(slots: Vec<DaySlot>) -> Result<Self> {
        if slots.len() != 7 {
            return Err(ScheduleError::IncompleteSchedule(format!(
                "expected 7 day slots, got {}",
                slots.len()
            )));
        }

        let mut table: [Option<DaySlot>; 7] = [None; 7];
        for slot in slots {
            let day = DayOfWeek::new(slot.day)?;
            let entry = &mut table[day.index() as usize];
            if entry.is_some() {
                return Err(ScheduleError::IncompleteSchedule(format!(
                    "day {} appears more than once",
                    day
                )));
            }
            *entry = Some(slot.normalized()?);
        }

        let mut validated = [DaySlot::off(DayOfWeek::SUNDAY); 7];
        for (index, entry) in table.into_iter().enumerate() {
            validated[index] = entry.ok_or_else(|| {
                ScheduleError::IncompleteSchedule(format!("day {} is missing", index))
            })?;
        }

        Ok(WeeklySchedule { slots: validated })
    }

    /// Build a schedule from the days worked; every other day is a day off.
    ///
    /// Naming a day twice is an `IncompleteSchedule` error.
    pub fn from_active<I>(active: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DayOfWeek, TimeInterval)>,
    {
        let mut slots: Vec<Option<DaySlot>> = vec![None; 7];
        for (day, interval) in active {
            let entry = &mut slots[day.index() as usize];
            if entry.is_some() {
                return Err(ScheduleError::IncompleteSchedule(format!(
                    "day {} appears more than once",
                    day
                )));
            }
            *entry = Some(DaySlot::active(day, interval));
        }

        let slots = DayOfWeek::all()
            .zip(slots)
            .map(|(day, slot)| slot.unwrap_or_else(|| DaySlot::off(day)))
            .collect();
        WeeklySchedule::new(slots)
    }

    /// A schedule with no working days.
    pub fn empty() -> Self {
        let mut slots = [DaySlot::off(DayOfWeek::SUNDAY); 7];
        for day in DayOfWeek::all() {
            slots[day.index() as usize] = DaySlot::off(day);
        }
        WeeklySchedule { slots }
    }

    /// Enabled days and their intervals, keyed (and so iterated) by day index.
    pub fn active_day_intervals(&self) -> BTreeMap<DayOfWeek, TimeInterval> {
        self.slots
            .iter()
            .filter(|slot| slot.enabled)
            .filter_map(|slot| Some((DayOfWeek(slot.day), slot.interval?)))
            .collect()
    }

    pub fn slot(&self, day: DayOfWeek) -> &DaySlot {
        &self.slots[day.index() as usize]
    }

    /// All seven slots, Sunday first.
    pub fn slots(&self) -> &[DaySlot; 7] {
        &self.slots
    }

    pub fn active_days(&self) -> Vec<DayOfWeek> {
        self.active_day_intervals().into_keys().collect()
    }

    pub fn total_weekly_minutes(&self) -> u32 {
        self.active_day_intervals()
            .values()
            .map(|interval| u32::from(interval.duration_minutes()))
            .sum()
    }
}

impl TryFrom<Vec<DaySlot>> for WeeklySchedule {
    type Error = ScheduleError;

    fn try_from(slots: Vec<DaySlot>) -> Result<Self> {
        WeeklySchedule::new(slots)
    }
}

impl From<WeeklySchedule> for Vec<DaySlot> {
    fn from(schedule: WeeklySchedule) -> Vec<DaySlot> {
        schedule.slots.to_vec()
    }
}
