//! Benchmarks for the full calculation and the optimization pass.
//!
//! Forms grow by the number of line items per financial category to show
//! how normalization and path discovery scale with input size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use factibilidad::financial::solve_irr;
use factibilidad::{calculate_feasibility, optimize_project, FeasibilityConfig, FormData};
use serde_json::json;
use std::hint::black_box;

fn create_form(items_per_category: usize) -> FormData {
    let rows = |field: &str, amount: f64| -> Vec<serde_json::Value> {
        (0..items_per_category)
            .map(|i| json!({ "name": format!("item {i}"), field: amount }))
            .collect()
    };

    serde_json::from_value(json!({
        "financial": {
            "capital": rows("amount", 5000.0),
            "salesProducts": rows("annualAmount", 4000.0),
            "rawMaterials": rows("annualCost", 2500.0),
            "directLabor": rows("annualAmount", 1800.0),
            "discountRate": 12,
            "period": 8
        },
        "technical": {
            "localization": { "proximityToMarket": "good", "landCost": "poor" },
            "capacity": { "installedCapacity": "regular", "scalability": "good" }
        },
        "market": {
            "targetMarket": 1500,
            "totalMarket": 60000,
            "historicalData": [100, 104, 109],
            "competitorCount": 6,
            "growthPotential": 8,
            "unmetNeed": 12
        },
        "legal": {
            "businessConstitution": "good",
            "operatingPermits": "poor"
        }
    }))
    .unwrap_or_default()
}

fn bench_calculate(c: &mut Criterion) {
    let config = FeasibilityConfig::default();
    let mut group = c.benchmark_group("calculate_feasibility");

    for size in [1, 10, 100, 1000] {
        let form = create_form(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &form, |b, form| {
            b.iter(|| black_box(calculate_feasibility(form, &config)));
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let config = FeasibilityConfig::default();
    let mut group = c.benchmark_group("optimize_project");

    for size in [1, 10, 100] {
        let form = create_form(size);
        let calculations = calculate_feasibility(&form, &config);
        group.bench_with_input(BenchmarkId::from_parameter(size), &form, |b, form| {
            b.iter(|| black_box(optimize_project(form, &calculations, &config)));
        });
    }
    group.finish();
}

fn bench_irr(c: &mut Criterion) {
    // Newton path, then a cash flow that needs the bisection fallback
    let newton = [-100000.0, 30000.0, 30000.0, 30000.0, 30000.0, 30000.0];
    let bisection = [-1000.0, 50.0, 50.0];

    c.bench_function("solve_irr_newton", |b| {
        b.iter(|| black_box(solve_irr(black_box(&newton))))
    });
    c.bench_function("solve_irr_bisection", |b| {
        b.iter(|| black_box(solve_irr(black_box(&bisection))))
    });
}

criterion_group!(benches, bench_calculate, bench_optimize, bench_irr);
criterion_main!(benches);
