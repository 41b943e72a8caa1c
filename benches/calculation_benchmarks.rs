//! Performance benchmarks for the Shift Wage Engine.
//!
//! This benchmark suite covers:
//! - Single shift calculation, called directly
//! - Single shift calculation through the HTTP router
//! - Reports of 14, 100 and 1000 shifts
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use wage_engine::api::{AppState, create_router};
use wage_engine::calculation::{build_shift_report, calc_employee_shift};
use wage_engine::config::{CalculatorConfig, ConfigLoader};
use wage_engine::models::{BreakPolicy, OrgSettings, ShiftInput, ShiftRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default.yaml").expect("Failed to load config");
    AppState::new(config)
}

/// Day and night shift patterns cycled through when building reports.
const SHIFT_PATTERNS: [(&str, &str, u32); 4] = [
    ("09:00", "17:00", 30),
    ("10:00", "16:00", 0),
    ("22:00", "06:00", 45),
    ("14:00", "19:30", 15),
];

/// Creates `count` shift rows spread across ten employees.
fn create_records(count: usize) -> Vec<ShiftRecord> {
    SHIFT_PATTERNS
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, (start, end, break_minutes))| ShiftRecord {
            id: format!("shift_{:04}", i + 1),
            employee_id: format!("emp_{:02}", i % 10),
            date: None,
            shift: ShiftInput::new(*start, *end, *break_minutes, Decimal::new(2735, 2)),
        })
        .collect()
}

/// Benchmark: Single shift calculation without HTTP.
fn bench_calc_employee_shift(c: &mut Criterion) {
    let shift = ShiftInput::new("22:00", "06:00", 30, Decimal::new(2735, 2));
    let org = OrgSettings::with_policy(BreakPolicy::FixedHalfHourOverFiveAndHalf);
    let config = CalculatorConfig::default();

    c.bench_function("calc_employee_shift", |b| {
        b.iter(|| black_box(calc_employee_shift(black_box(&shift), Some(&org), &config)))
    });
}

/// Benchmark: Single shift through the `/calculate` endpoint.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "shift": {
            "start_time": "10:00",
            "end_time": "16:00",
            "break_minutes": 30,
            "hourly_wage_snapshot": "27.35"
        },
        "org": { "break_policy": "fixed_0_5_over_5_5h" }
    })
    .to_string();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Reports of increasing size to understand scaling behavior.
fn bench_report_scaling(c: &mut Criterion) {
    let config = CalculatorConfig::default();
    let mut group = c.benchmark_group("report");

    for shift_count in [14usize, 100, 1000] {
        let records = create_records(shift_count);

        if shift_count >= 1000 {
            // Keep large reports to a reasonable benchmark time
            group.sample_size(10);
        }
        group.throughput(Throughput::Elements(shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            &records,
            |b, records| b.iter(|| black_box(build_shift_report(records, None, &config))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calc_employee_shift,
    bench_calculate_endpoint,
    bench_report_scaling,
);
criterion_main!(benches);
