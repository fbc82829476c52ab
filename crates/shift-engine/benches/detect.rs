use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shift_engine::{detect_conflicts, summarize, DayOfWeek, Employment, TimeInterval, WeeklySchedule};

fn schedule(offset: u16) -> WeeklySchedule {
    let active = DayOfWeek::all().filter_map(|day| {
        let start = (u16::from(day.index()) * 90 + offset) % 1200;
        Some((day, TimeInterval::new(start, start + 240).ok()?))
    });
    WeeklySchedule::from_active(active).unwrap()
}

fn bench_detect(c: &mut Criterion) {
    let candidate = schedule(0);
    let employments: Vec<Employment> = (0..50)
        .map(|i| Employment::new(format!("emp-{}", i), "Employer", &schedule(i * 37)))
        .collect();

    c.bench_function("detect_conflicts_50_employments", |b| {
        b.iter(|| detect_conflicts(black_box(&candidate), black_box(&employments)))
    });

    let report = detect_conflicts(&candidate, &employments);
    c.bench_function("summarize_50_employments", |b| {
        b.iter(|| summarize(black_box(&report)))
    });
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
