//! Benchmarks for the priority waiting line.
//!
//! Covers push into an already-populated line (the O(n) position scan),
//! pop, and a mixed check-in/admission workload.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

use ward_scheduler::core::{Patient, PriorityWaitingLine, TriageCategory, WardKind};

fn make_patient(id: u64, category: TriageCategory, arrived_at_ms: u128) -> Patient {
    Patient {
        id,
        name: format!("bench-{id}"),
        category,
        ward: WardKind::General,
        severity: 5,
        arrived_at_ms,
    }
}

fn populated_line(size: u64, rng: &mut StdRng) -> PriorityWaitingLine {
    let line = PriorityWaitingLine::new(usize::MAX);
    for id in 0..size {
        let category = if rng.random_bool(0.3) {
            TriageCategory::Emergency
        } else {
            TriageCategory::Regular
        };
        line.push(make_patient(id, category, u128::from(rng.random_range(0..10_000u32))))
            .unwrap();
    }
    line
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("waiting_line_push");
    for &size in &[10u64, 100, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(42);
            let line = populated_line(size, &mut rng);
            let mut id = size;
            b.iter(|| {
                id += 1;
                line.push(black_box(make_patient(
                    id,
                    TriageCategory::Regular,
                    u128::from(id),
                )))
                .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_pop(c: &mut Criterion) {
    c.bench_function("waiting_line_pop", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter_batched(
            || populated_line(100, &mut rng),
            |line| {
                while let Some(p) = line.pop() {
                    black_box(p);
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_mixed(c: &mut Criterion) {
    c.bench_function("waiting_line_mixed_push_pop", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        let line = PriorityWaitingLine::new(usize::MAX);
        let mut id = 0u64;
        b.iter(|| {
            id += 1;
            let category = if rng.random_bool(0.3) {
                TriageCategory::Emergency
            } else {
                TriageCategory::Regular
            };
            line.push(make_patient(id, category, u128::from(id))).unwrap();
            if id % 2 == 0 {
                black_box(line.pop());
            }
        });
    });
}

criterion_group!(benches, bench_push, bench_pop, bench_mixed);
criterion_main!(benches);
