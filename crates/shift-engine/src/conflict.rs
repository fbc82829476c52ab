//! Detect where a candidate weekly schedule overlaps existing employments.
//!
//! Each employment is compared day by day against the candidate. Only days
//! active in both schedules are compared, and adjacent intervals (one ends
//! exactly when the other starts) are NOT conflicts.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::employment::{employments_from_json, Employment};
use crate::error::Result;
use crate::interval::TimeInterval;
use crate::schedule::{DaySlot, WeeklySchedule};

/// A single day on which the candidate overlaps an existing commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDetail {
    /// Day index, 0 = Sunday.
    pub day: u8,
    pub existing_interval: TimeInterval,
    pub candidate_interval: TimeInterval,
    pub overlap_interval: TimeInterval,
}

impl ConflictDetail {
    pub fn overlap_minutes(&self) -> u16 {
        self.overlap_interval.duration_minutes()
    }
}

/// All conflicting days for one employment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentConflict {
    pub employer_id: String,
    pub employer_name: String,
    /// The employment's own slots on the conflicting days, by day index.
    pub conflicting_days: Vec<DaySlot>,
    /// One entry per conflicting day, by day index.
    pub overlap_details: Vec<ConflictDetail>,
}

impl EmploymentConflict {
    pub fn overlap_minutes(&self) -> u32 {
        self.overlap_details
            .iter()
            .map(|detail| u32::from(detail.overlap_minutes()))
            .sum()
    }
}

/// An employment that could not be checked because its schedule is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEmployment {
    pub employer_id: String,
    pub employer_name: String,
    pub reason: String,
}

/// Result of one conflict check. Built fresh per call and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Conflicting employments, in input order.
    pub conflicts: Vec<EmploymentConflict>,
    /// Sum of `conflicting_days` across all conflicts. The same weekday
    /// conflicting with two employers counts twice.
    pub total_conflicting_days: usize,
    /// Employments left out of the check, in input order.
    #[serde(default)]
    pub skipped: Vec<SkippedEmployment>,
}

impl ConflictReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Conflicting days counted from `conflicts` itself, ignoring the stored
    /// `total_conflicting_days` of a report that arrived from outside.
    pub fn conflicting_day_count(&self) -> usize {
        count_conflicting_days(&self.conflicts)
    }
}

/// One input row: a typed employment, or a record rejected while loading.
enum Row<'a> {
    Loaded(&'a Employment),
    Rejected(SkippedEmployment),
}

/// Compare a validated candidate schedule against every employment.
///
/// An employment whose schedule fails validation is skipped and recorded in
/// [`ConflictReport::skipped`]; it never aborts the check for the others.
/// Employments without any overlap produce no entry at all.
pub fn detect_conflicts(candidate: &WeeklySchedule, employments: &[Employment]) -> ConflictReport {
    detect_rows(candidate, employments.iter().map(Row::Loaded))
}

/// Like [`detect_conflicts`], for employments still in JSON form.
///
/// Each array element is decoded on its own, so a row that does not even fit
/// the [`Employment`] shape is skipped like any other malformed record.
///
/// # Errors
/// `InvalidEmployments` when the input is not a JSON array.
pub fn detect_conflicts_json(
    candidate: &WeeklySchedule,
    employments_json: &str,
) -> Result<ConflictReport> {
    let rows = employments_from_json(employments_json)?;
    Ok(detect_rows(
        candidate,
        rows.iter().map(|row| match row {
            Ok(employment) => Row::Loaded(employment),
            Err(rejected) => Row::Rejected(rejected.clone()),
        }),
    ))
}

fn detect_rows<'a>(
    candidate: &WeeklySchedule,
    rows: impl Iterator<Item = Row<'a>>,
) -> ConflictReport {
    let candidate_days = candidate.active_day_intervals();

    let mut conflicts = Vec::new();
    let mut skipped = Vec::new();
    let mut checked = 0usize;

    for row in rows {
        checked += 1;
        let employment = match row {
            Row::Loaded(employment) => employment,
            Row::Rejected(rejected) => {
                skip(&mut skipped, rejected);
                continue;
            }
        };
        let existing = match employment.weekly_schedule() {
            Ok(schedule) => schedule,
            Err(err) => {
                skip(
                    &mut skipped,
                    SkippedEmployment {
                        employer_id: employment.employer_id.clone(),
                        employer_name: employment.employer_name.clone(),
                        reason: err.to_string(),
                    },
                );
                continue;
            }
        };

        let mut conflicting_days = Vec::new();
        let mut overlap_details = Vec::new();

        // BTreeMap iteration keeps details in day index order.
        for (day, existing_interval) in existing.active_day_intervals() {
            let Some(candidate_interval) = candidate_days.get(&day) else {
                continue;
            };
            if let Some(overlap_interval) = existing_interval.intersect(candidate_interval) {
                conflicting_days.push(*existing.slot(day));
                overlap_details.push(ConflictDetail {
                    day: day.index(),
                    existing_interval,
                    candidate_interval: *candidate_interval,
                    overlap_interval,
                });
            }
        }

        if !overlap_details.is_empty() {
            conflicts.push(EmploymentConflict {
                employer_id: employment.employer_id.clone(),
                employer_name: employment.employer_name.clone(),
                conflicting_days,
                overlap_details,
            });
        }
    }

    let total_conflicting_days = count_conflicting_days(&conflicts);

    debug!(
        employments = checked,
        conflicting_employments = conflicts.len(),
        total_conflicting_days,
        skipped = skipped.len(),
        "conflict check complete"
    );

    ConflictReport {
        conflicts,
        total_conflicting_days,
        skipped,
    }
}

fn skip(skipped: &mut Vec<SkippedEmployment>, rejected: SkippedEmployment) {
    warn!(
        employer_id = %rejected.employer_id,
        error = %rejected.reason,
        "skipping employment with malformed schedule"
    );
    skipped.push(rejected);
}

fn count_conflicting_days(conflicts: &[EmploymentConflict]) -> usize {
    conflicts
        .iter()
        .map(|conflict| conflict.conflicting_days.len())
        .sum()
}

/// Validate raw candidate slots, then run [`detect_conflicts`].
///
/// # Errors
/// Any validation error on the candidate is returned as is.
pub fn check_conflicts(candidate: &[DaySlot], employments: &[Employment]) -> Result<ConflictReport> {
    let candidate = WeeklySchedule::new(candidate.to_vec())?;
    Ok(detect_conflicts(&candidate, employments))
}
