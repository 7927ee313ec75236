//! Performance benchmarks for the take-home pay engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single calculation (library level): < 50μs mean
//! - Single HTTP calculation request: < 1ms mean
//! - Batch of 100 requests: < 50ms mean
//! - Batch of 1000 requests: < 500ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use daywage_engine::api::{AppState, create_router};
use daywage_engine::calculation::calculate_take_home;
use daywage_engine::config::ConfigLoader;
use daywage_engine::models::{CalculationInput, DeductionScheme};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with the shipped rate table.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/korea-2025.yaml").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a request body for the given scheme.
fn create_request_body(daily_wage: u32, work_days: u32, scheme: &str) -> String {
    serde_json::json!({
        "daily_wage": daily_wage.to_string(),
        "work_days": work_days.to_string(),
        "scheme": scheme,
        "apply_insurance": true
    })
    .to_string()
}

/// Benchmark: library-level calculation, no HTTP layer.
///
/// Target: < 50μs mean
fn bench_calculation_only(c: &mut Criterion) {
    let config = ConfigLoader::builtin();
    let rates = config.rates();

    let mut group = c.benchmark_group("calculation");

    for (name, scheme, apply_insurance) in [
        ("standard_with_insurance", DeductionScheme::Standard, true),
        ("standard_without_insurance", DeductionScheme::Standard, false),
        ("flat_3_3", DeductionScheme::Flat33, false),
    ] {
        let input = CalculationInput {
            daily_wage: Decimal::from(180_000),
            work_days: Decimal::from(20),
            scheme,
            apply_insurance,
        };

        group.bench_function(name, |b| {
            b.iter(|| black_box(calculate_take_home(black_box(&input), rates)))
        });
    }

    group.finish();
}

/// Benchmark: single HTTP calculation request.
///
/// Target: < 1ms mean
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body(180_000, 20, "standard");

    c.bench_function("single_request", |b| {
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

/// Benchmark: batches of requests with varied wages and schemes.
fn bench_batches(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    for batch_size in [100usize, 1000] {
        // Pre-create varied requests (mix wages, days, and schemes)
        let requests: Vec<String> = (0..batch_size)
            .map(|i| {
                let scheme = if i % 3 == 0 { "flat_3_3" } else { "standard" };
                create_request_body(100_000 + (i as u32 % 20) * 10_000, 5 + (i as u32 % 22), scheme)
            })
            .collect();

        let mut group = c.benchmark_group("batch_processing");
        group.throughput(Throughput::Elements(batch_size as u64));
        if batch_size >= 1000 {
            // Reduce sample size for large batches to keep benchmark time reasonable
            group.sample_size(10);
        }

        group.bench_with_input(
            BenchmarkId::new("batch", batch_size),
            &requests,
            |b, requests| {
                b.to_async(&rt).iter(|| async {
                    let mut results = Vec::with_capacity(requests.len());
                    for body in requests {
                        let router = create_router(state.clone());
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
                        results.push(response);
                    }
                    black_box(results)
                })
            },
        );

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_calculation_only,
    bench_single_request,
    bench_batches,
);
criterion_main!(benches);
