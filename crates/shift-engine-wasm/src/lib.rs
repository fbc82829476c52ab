//! WASM bindings for shift-engine.
//!
//! Exposes conflict detection and report summaries to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p shift-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/shift_engine_wasm.wasm
//! ```

use serde::Deserialize;
use shift_engine::{ConflictReport, DaySlot, SeverityPolicy, WeeklyHours, WeeklySchedule};
use wasm_bindgen::prelude::*;

/// A candidate schedule as sent by the UI: either seven day slots or the
/// day-keyed hours object the UI stores.
#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateInput {
    Slots(Vec<DaySlot>),
    Hours(WeeklyHours),
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn candidate_slots(json: &str) -> Result<Vec<DaySlot>, JsValue> {
    let input: CandidateInput =
        serde_json::from_str(json).map_err(|e| js_error("Invalid candidate JSON", e))?;
    match input {
        CandidateInput::Slots(slots) => Ok(slots),
        CandidateInput::Hours(hours) => hours
            .to_day_slots()
            .map_err(|e| js_error("Invalid candidate schedule", e)),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization error", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Check a candidate schedule against the user's active employments.
///
/// `candidate_json` is a seven-slot array or a day-keyed hours object;
/// `employments_json` is an array of `{employer_id, employer_name, schedule}`.
/// Returns the conflict report as JSON. Malformed employments, including rows
/// that do not fit the employment shape, are listed under `skipped` instead of
/// failing the call. An invalid candidate or a non-array input is an error.
#[wasm_bindgen(js_name = "detectConflicts")]
pub fn detect_conflicts(candidate_json: &str, employments_json: &str) -> Result<String, JsValue> {
    let candidate = WeeklySchedule::new(candidate_slots(candidate_json)?)
        .map_err(|e| js_error("Invalid candidate schedule", e))?;

    let report = shift_engine::detect_conflicts_json(&candidate, employments_json)
        .map_err(|e| js_error("Invalid employments JSON", e))?;

    to_json(&report)
}

/// Summarize a conflict report (as returned by `detectConflicts`).
///
/// `policy_json` optionally overrides the severity policy, e.g.
/// `{"minor_max_days": 3}`.
#[wasm_bindgen(js_name = "summarizeReport")]
pub fn summarize_report(report_json: &str, policy_json: Option<String>) -> Result<String, JsValue> {
    let report: ConflictReport =
        serde_json::from_str(report_json).map_err(|e| js_error("Invalid report JSON", e))?;
    let policy = match policy_json.as_deref() {
        Some(json) => serde_json::from_str::<SeverityPolicy>(json)
            .map_err(|e| js_error("Invalid policy JSON", e))?,
        None => SeverityPolicy::default(),
    };

    to_json(&shift_engine::summarize_with(&report, &policy))
}
