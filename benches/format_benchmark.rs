use chrono::{TimeZone, Utc};
use clinic_rust::core::domain::{AppointmentId, AppointmentStatus, RawAppointment};
use clinic_rust::services::{
    compute_appointment_stats, format_for_calendar, appointments_by_status, GridGeometry,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_feed(count: usize) -> Vec<RawAppointment> {
    let statuses = ["scheduled", "completed", "cancelled", "no-show", "requested"];
    (0..count)
        .map(|i| RawAppointment {
            id: AppointmentId(i as i64),
            start_date_time: format!("2025-08-{:02}T{:02}:{:02}:00", 1 + i % 28, 8 + i % 10, (i * 7) % 60),
            duration_minutes: 15 + (i as u32 % 8) * 15,
            status: AppointmentStatus::from(statuses[i % statuses.len()]),
            services: vec![format!("Service {}", i % 12)],
            doctor_name: Some(format!("Doctor {}", i % 9)),
            doctor_specialization: None,
            notes: None,
            location: None,
            fee: None,
            billing_type: None,
        })
        .collect()
}

fn bench_format_for_calendar(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_for_calendar");

    for size in [10usize, 100, 1000] {
        let feed = synthetic_feed(size);
        group.bench_with_input(BenchmarkId::new("records", size), &feed, |b, input| {
            b.iter(|| format_for_calendar(black_box(input)));
        });
    }

    group.finish();
}

fn bench_derived_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_queries");

    let feed = synthetic_feed(1000);
    let entries = format_for_calendar(&feed).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 8, 14, 12, 0, 0).unwrap();

    group.bench_function("appointments_by_status", |b| {
        b.iter(|| appointments_by_status(black_box(&entries)));
    });

    group.bench_function("compute_appointment_stats", |b| {
        b.iter(|| compute_appointment_stats(black_box(&entries), black_box(now)));
    });

    group.finish();
}

fn bench_grid_positioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_positioning");

    let feed = synthetic_feed(1000);
    let entries = format_for_calendar(&feed).unwrap();
    let grid = GridGeometry::default();

    group.bench_function("position_1000_blocks", |b| {
        b.iter(|| {
            for entry in &entries {
                let _ = black_box(grid.position(&entry.start_time, &entry.end_time));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_format_for_calendar,
    bench_derived_queries,
    bench_grid_positioning
);
criterion_main!(benches);
