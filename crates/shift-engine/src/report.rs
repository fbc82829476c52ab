//! Summarize a [`ConflictReport`] for presentation.
//!
//! The summary is structured data only (counts, day indices, minutes). Wording,
//! translation and colours belong to whoever renders it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::conflict::ConflictReport;

/// Coarse, presentation-only classification of a report.
///
/// Variants are ordered: `None < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Minor,
    Major,
}

/// Thresholds mapping conflicting-day counts to a [`Severity`].
///
/// A single cut-off keeps the mapping monotone for every configured value: more
/// conflicting days never yields a lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityPolicy {
    /// Highest `total_conflicting_days` still classified as `Minor`.
    pub minor_max_days: usize,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        SeverityPolicy { minor_max_days: 2 }
    }
}

impl SeverityPolicy {
    pub fn classify(&self, total_conflicting_days: usize) -> Severity {
        match total_conflicting_days {
            0 => Severity::None,
            n if n <= self.minor_max_days => Severity::Minor,
            _ => Severity::Major,
        }
    }

    pub fn severity_of(&self, report: &ConflictReport) -> Severity {
        if report.conflicts.is_empty() {
            Severity::None
        } else {
            self.classify(report.conflicting_day_count())
        }
    }
}

/// Per-employer line of a [`ConflictSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerSummary {
    pub employer_id: String,
    pub conflicting_days: usize,
    pub overlap_minutes: u32,
    pub severity: Severity,
}

/// Totals and ordering derived from a [`ConflictReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSummary {
    pub severity: Severity,
    pub employer_count: usize,
    pub total_conflicting_days: usize,
    pub total_overlap_minutes: u32,
    /// Distinct day indices with at least one conflict, ascending.
    pub affected_days: Vec<u8>,
    pub skipped_employments: usize,
    /// Most disruptive employer first.
    pub employers: Vec<EmployerSummary>,
}

impl ConflictSummary {
    /// False when some employments were skipped, so "no conflicts" may be
    /// incomplete.
    pub fn is_fully_checked(&self) -> bool {
        self.skipped_employments == 0
    }
}

/// Summarize with the default [`SeverityPolicy`].
pub fn summarize(report: &ConflictReport) -> ConflictSummary {
    summarize_with(report, &SeverityPolicy::default())
}

pub fn summarize_with(report: &ConflictReport, policy: &SeverityPolicy) -> ConflictSummary {
    let mut employers: Vec<EmployerSummary> = report
        .conflicts
        .iter()
        .map(|conflict| EmployerSummary {
            employer_id: conflict.employer_id.clone(),
            conflicting_days: conflict.conflicting_days.len(),
            overlap_minutes: conflict.overlap_minutes(),
            severity: policy.classify(conflict.conflicting_days.len()),
        })
        .collect();

    // Stable sort: ties keep input order.
    employers.sort_by(|a, b| {
        b.conflicting_days
            .cmp(&a.conflicting_days)
            .then(b.overlap_minutes.cmp(&a.overlap_minutes))
    });

    let affected_days: BTreeSet<u8> = report
        .conflicts
        .iter()
        .flat_map(|conflict| conflict.overlap_details.iter().map(|detail| detail.day))
        .collect();

    ConflictSummary {
        severity: policy.severity_of(report),
        employer_count: report.conflicts.len(),
        total_conflicting_days: report.conflicting_day_count(),
        total_overlap_minutes: employers.iter().map(|e| e.overlap_minutes).sum(),
        affected_days: affected_days.into_iter().collect(),
        skipped_employments: report.skipped_count(),
        employers,
    }
}
