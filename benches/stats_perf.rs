use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowstats::prelude::*;

// Helper to generate sample rows
fn generate_rows(n: usize) -> Vec<RowVector<4>> {
    (0..n)
        .map(|i| {
            let x = (i as f64 * 0.01).sin();
            RowVector::new([x, 2.0 * x, x * x, x + 1.0])
        })
        .collect()
}

fn bench_push(c: &mut Criterion) {
    let rows = generate_rows(10_000);

    let mut group = c.benchmark_group("push");

    group.bench_function("window_100", |b| {
        let mut buffer = StatBuffer::<100, 4>::new();
        let mut i = 0;
        b.iter(|| {
            buffer.push(black_box(rows[i % rows.len()]));
            i += 1;
        })
    });

    group.bench_function("window_1000", |b| {
        let mut buffer = StatBuffer::<1000, 4>::new();
        let mut i = 0;
        b.iter(|| {
            buffer.push(black_box(rows[i % rows.len()]));
            i += 1;
        })
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let rows = generate_rows(2_000);

    let mut buffer = StatBuffer::<1000, 4>::new();
    for &row in &rows {
        buffer.push(row);
    }

    let mut group = c.benchmark_group("queries");

    group.bench_function("mean", |b| b.iter(|| black_box(buffer.mean())));
    group.bench_function("std_dev", |b| b.iter(|| black_box(buffer.std_dev())));
    group.bench_function("row", |b| b.iter(|| black_box(buffer.row(black_box(500)))));

    group.finish();
}

fn bench_push_remove_cycle(c: &mut Criterion) {
    let rows = generate_rows(10_000);

    c.bench_function("push_remove_cycle", |b| {
        let mut buffer = StatBuffer::<100, 4>::new();
        let mut i = 0;
        b.iter(|| {
            buffer.push(black_box(rows[i % rows.len()]));
            if buffer.len() > 50 {
                buffer.remove_rows(10);
            }
            i += 1;
        })
    });
}

criterion_group!(benches, bench_push, bench_queries, bench_push_remove_cycle);
criterion_main!(benches);
