// ABOUTME: Criterion benchmarks for the portion calculator and form persistence
// ABOUTME: Measures plan computation per cat type, lenient parsing, and session edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the portion calculator.
//!
//! Measures the pure calculation for every cat type, the full-precision
//! breakdown, and the edit-recompute-persist cycle of a session.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use catfood_calculator::session::CalculatorSession;
use catfood_calculator::storage::MemoryStore;
use catfood_core::models::{CatProfile, CatType};
use catfood_intelligence::parsing::parse_leading_decimal;
use catfood_intelligence::PortionCalculator;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_compute_by_cat_type(c: &mut Criterion) {
    let calculator = PortionCalculator::from_global();
    let mut group = c.benchmark_group("compute");

    for cat_type in CatType::OPTIONS {
        let profile = CatProfile::default()
            .with_cat_type(cat_type.clone())
            .with_age("3");
        group.bench_with_input(
            BenchmarkId::from_parameter(cat_type.as_str()),
            &profile,
            |b, profile| b.iter(|| calculator.compute(black_box(profile))),
        );
    }

    group.finish();
}

fn bench_breakdown(c: &mut Criterion) {
    let calculator = PortionCalculator::default();
    let profile = CatProfile::default().with_weight("4.75 kg");

    c.bench_function("compute_breakdown", |b| {
        b.iter(|| calculator.compute_breakdown(black_box(&profile)));
    });
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_leading_decimal");
    for input in ["4", "3.75", "370 kcal", "1.2e1", "not a number"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| parse_leading_decimal(black_box(input)));
        });
    }
    group.finish();
}

fn bench_session_edit(c: &mut Criterion) {
    let mut session = CalculatorSession::open(MemoryStore::new(), PortionCalculator::default());
    let weights = ["3.5", "4", "4.5", "5"];
    let mut next = 0_usize;

    c.bench_function("session_set_weight", |b| {
        b.iter(|| {
            next = (next + 1) % weights.len();
            session.set_weight(black_box(weights[next]))
        });
    });
}

criterion_group!(
    benches,
    bench_compute_by_cat_type,
    bench_breakdown,
    bench_parsing,
    bench_session_edit,
);
criterion_main!(benches);
