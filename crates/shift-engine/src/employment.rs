//! Employment records: an employer identity bound to that employer's weekly hours.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conflict::SkippedEmployment;
use crate::error::{Result, ScheduleError};
use crate::schedule::{DaySlot, WeeklySchedule};

/// One of a person's active employments, as loaded by the caller.
///
/// The schedule is kept as raw day slots because historical records may be
/// malformed. [`crate::detect_conflicts`] validates each record on its own and
/// skips the ones that fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    /// Business identifier of the employer.
    pub employer_id: String,
    /// Display name of the employer.
    pub employer_name: String,
    /// Expected weekly hours at this employer.
    pub schedule: Vec<DaySlot>,
}

impl Employment {
    pub fn new(
        employer_id: impl Into<String>,
        employer_name: impl Into<String>,
        schedule: &WeeklySchedule,
    ) -> Self {
        Employment {
            employer_id: employer_id.into(),
            employer_name: employer_name.into(),
            schedule: schedule.slots().to_vec(),
        }
    }

    /// Validate the stored slots into a [`WeeklySchedule`].
    pub fn weekly_schedule(&self) -> Result<WeeklySchedule> {
        WeeklySchedule::new(self.schedule.clone())
    }
}

/// Load employments from a JSON array one row at a time.
///
/// A row that does not fit the [`Employment`] shape (negative minutes, a null
/// schedule, a string where a number belongs) comes back as `Err` carrying
/// whatever identity fields it has and the serde error as the reason. Only an
/// input that is not a JSON array fails as a whole.
pub fn employments_from_json(
    json: &str,
) -> Result<Vec<std::result::Result<Employment, SkippedEmployment>>> {
    let rows: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| ScheduleError::InvalidEmployments(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let employer_id = identity_field(&row, "employer_id");
            let employer_name = identity_field(&row, "employer_name");
            serde_json::from_value(row).map_err(|e| SkippedEmployment {
                employer_id,
                employer_name,
                reason: e.to_string(),
            })
        })
        .collect())
}

fn identity_field(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
