//! Performance benchmarks for the take-home pay engine.
//!
//! Covers the pure calculation path, the `/calculate` endpoint, a batch of
//! forms with varied periods, and a session storing many records.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeSet;
use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use take_home_pay::api::{AppState, create_router};
use take_home_pay::calculation::calculate_pay_breakdown;
use take_home_pay::config::{ConfigLoader, PayConfig};
use take_home_pay::models::{DayOfWeek, PayPeriod, ShiftInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/au_2023_24").expect("Failed to load config");
    AppState::new(config)
}

const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];
const PERIODS: [&str; 4] = ["weekly", "fortnightly", "monthly", "yearly"];

/// Creates a form body working the first `day_count` days of the week.
fn create_form(day_count: usize, period: &str, rate: u32) -> String {
    serde_json::json!({
        "position": "casual",
        "start_time": "04:00 PM",
        "end_time": "11:30 PM",
        "hourly_rate": rate.to_string(),
        "days_worked": &DAYS[..day_count],
        "period": period
    })
    .to_string()
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: The pure breakdown calculation.
fn bench_breakdown(c: &mut Criterion) {
    let config = PayConfig::default();
    let shift = ShiftInput::new(
        "04:00 PM",
        "11:30 PM",
        Decimal::from_str("31.75").unwrap(),
    );
    let days: BTreeSet<DayOfWeek> = [
        DayOfWeek::Monday,
        DayOfWeek::Wednesday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ]
    .into_iter()
    .collect();

    c.bench_function("pay_breakdown", |b| {
        b.iter(|| {
            calculate_pay_breakdown(
                black_box(&shift),
                black_box(&days),
                PayPeriod::Fortnightly,
                &config,
            )
        })
    });
}

/// Benchmark: A single `/calculate` request.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_form(5, "weekly", 30);

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(post("/calculate", body.clone()))
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 forms across every period.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| create_form(i % 7 + 1, PERIODS[i % 4], 25 + (i % 20) as u32))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(post("/calculate", body.clone()))
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Storing records into one session as it grows.
fn bench_session_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("session_store");
    group.sample_size(20);

    for record_count in [1, 10, 100].iter() {
        group.throughput(Throughput::Elements(*record_count as u64));
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            record_count,
            |b, &count| {
                b.to_async(&rt).iter(|| async move {
                    let state = create_test_state();
                    let id = state.create_session().await;
                    let router = create_router(state);
                    let uri = format!("/sessions/{}/records", id);
                    for i in 0..count {
                        let response = router
                            .clone()
                            .oneshot(post(&uri, create_form(i % 7 + 1, "weekly", 30)))
                            .await
                            .unwrap();
                        black_box(response);
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_breakdown,
    bench_calculate_endpoint,
    bench_batch_100,
    bench_session_store,
);
criterion_main!(benches);
