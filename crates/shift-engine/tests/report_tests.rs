//! Tests for severity classification and report summaries.

use shift_engine::{
    detect_conflicts, summarize, summarize_with, ConflictReport, DayOfWeek, Employment, Severity,
    SeverityPolicy, TimeInterval, WeeklySchedule,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn hours(start_hour: u16, end_hour: u16) -> TimeInterval {
    TimeInterval::new(start_hour * 60, end_hour * 60).unwrap()
}

fn working(days: &[u8], interval: TimeInterval) -> WeeklySchedule {
    WeeklySchedule::from_active(
        days.iter()
            .map(|&d| (DayOfWeek::new(d).unwrap(), interval)),
    )
    .unwrap()
}

fn employment(id: &str, days: &[u8], interval: TimeInterval) -> Employment {
    Employment::new(id, id.to_uppercase(), &working(days, interval))
}

/// Candidate working every weekday 09:00-17:00.
fn candidate() -> WeeklySchedule {
    working(&[1, 2, 3, 4, 5], hours(9, 17))
}

// ── Severity tiers ──────────────────────────────────────────────────────────

#[test]
fn empty_report_is_none() {
    let summary = summarize(&ConflictReport::default());

    assert_eq!(summary.severity, Severity::None);
    assert_eq!(summary.employer_count, 0);
    assert!(summary.affected_days.is_empty());
    assert!(summary.is_fully_checked());
}

#[test]
fn one_or_two_days_is_minor() {
    let one = detect_conflicts(&candidate(), &[employment("a", &[1], hours(16, 20))]);
    let two = detect_conflicts(&candidate(), &[employment("a", &[1, 3], hours(16, 20))]);

    assert_eq!(summarize(&one).severity, Severity::Minor);
    assert_eq!(summarize(&two).severity, Severity::Minor);
}

#[test]
fn three_or_more_days_is_major() {
    let report = detect_conflicts(&candidate(), &[employment("a", &[1, 2, 3], hours(16, 20))]);

    assert_eq!(summarize(&report).severity, Severity::Major);
}

#[test]
fn days_across_employers_add_up_for_severity() {
    let report = detect_conflicts(
        &candidate(),
        &[
            employment("a", &[1, 2], hours(8, 10)),
            employment("b", &[2], hours(16, 18)),
        ],
    );

    let summary = summarize(&report);
    assert_eq!(summary.total_conflicting_days, 3);
    assert_eq!(summary.severity, Severity::Major);
    // Tuesday conflicts twice but is one affected weekday.
    assert_eq!(summary.affected_days, vec![1, 2]);
}

#[test]
fn policy_threshold_is_configurable() {
    let report = detect_conflicts(&candidate(), &[employment("a", &[1, 2, 3], hours(16, 20))]);
    let lenient = SeverityPolicy { minor_max_days: 5 };
    let strict = SeverityPolicy { minor_max_days: 0 };

    assert_eq!(summarize_with(&report, &lenient).severity, Severity::Minor);
    assert_eq!(summarize_with(&report, &strict).severity, Severity::Major);
}

#[test]
fn severity_is_monotone_in_conflicting_days() {
    for minor_max_days in 0..6 {
        let policy = SeverityPolicy { minor_max_days };
        for days in 0..20usize {
            assert!(
                policy.classify(days) <= policy.classify(days + 1),
                "severity dropped from {} to {} days with {:?}",
                days,
                days + 1,
                policy
            );
        }
    }
}

#[test]
fn severity_tiers_are_ordered() {
    assert!(Severity::None < Severity::Minor);
    assert!(Severity::Minor < Severity::Major);
}

#[test]
fn policy_deserializes_with_defaults() {
    let policy: SeverityPolicy = serde_json::from_str("{}").unwrap();
    assert_eq!(policy, SeverityPolicy::default());
    assert_eq!(policy.minor_max_days, 2);

    let custom: SeverityPolicy = serde_json::from_str(r#"{"minor_max_days": 4}"#).unwrap();
    assert_eq!(custom.minor_max_days, 4);
}

// ── Summary contents ────────────────────────────────────────────────────────

#[test]
fn employers_are_ordered_most_disruptive_first() {
    let report = detect_conflicts(
        &candidate(),
        &[
            employment("light", &[1], hours(16, 18)),     // 1 day, 60 min
            employment("heavy", &[2, 3, 4], hours(8, 12)), // 3 days, 180 min each
            employment("long", &[5], hours(10, 16)),      // 1 day, 360 min
            employment("tie", &[1], hours(16, 18)),       // same as light
        ],
    );

    let summary = summarize(&report);
    let ids: Vec<&str> = summary
        .employers
        .iter()
        .map(|e| e.employer_id.as_str())
        .collect();
    assert_eq!(ids, vec!["heavy", "long", "light", "tie"]);

    assert_eq!(summary.employers[0].severity, Severity::Major);
    assert_eq!(summary.employers[0].overlap_minutes, 540);
    assert_eq!(summary.employers[1].severity, Severity::Minor);
    assert_eq!(summary.total_overlap_minutes, 60 + 540 + 360 + 60);
    assert_eq!(summary.employer_count, 4);
}

#[test]
fn skipped_employments_surface_in_summary() {
    let mut broken = employment("broken", &[1], hours(9, 17));
    broken.schedule.pop();

    let report = detect_conflicts(&candidate(), &[broken]);
    let summary = summarize(&report);

    assert_eq!(summary.severity, Severity::None);
    assert_eq!(summary.skipped_employments, 1);
    assert!(
        !summary.is_fully_checked(),
        "no conflicts with skipped records must not read as fully checked"
    );
}

#[test]
fn summary_serializes_severity_in_lowercase() {
    let report = detect_conflicts(&candidate(), &[employment("a", &[1], hours(16, 20))]);
    let value = serde_json::to_value(summarize(&report)).unwrap();

    assert_eq!(value["severity"], "minor");
    assert_eq!(value["employers"][0]["severity"], "minor");
}

// ── Reports received from outside ───────────────────────────────────────────

#[test]
fn stored_total_is_ignored_when_conflicts_are_empty() {
    let report: ConflictReport =
        serde_json::from_str(r#"{"conflicts": [], "total_conflicting_days": 9}"#).unwrap();
    let summary = summarize(&report);

    assert_eq!(summary.total_conflicting_days, 0);
    assert_eq!(summary.severity, Severity::None);
}

#[test]
fn stored_total_is_recounted_from_conflicts() {
    let mut report = detect_conflicts(&candidate(), &[employment("a", &[1, 2, 3], hours(16, 20))]);
    report.total_conflicting_days = 1;
    let summary = summarize(&report);

    assert_eq!(report.conflicting_day_count(), 3);
    assert_eq!(summary.total_conflicting_days, 3);
    assert_eq!(summary.severity, Severity::Major);
    assert_eq!(SeverityPolicy::default().severity_of(&report), Severity::Major);
}
