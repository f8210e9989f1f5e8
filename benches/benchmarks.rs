use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use bulk_select::{create_effect, BulkSelection, SelectionStore};

fn candidates(len: usize) -> Vec<usize> {
    (0..len).collect()
}

fn select_toggle_benchmark(c: &mut Criterion) {
    let store = SelectionStore::new(candidates(1_000));

    c.bench_function("select_toggle", |b| {
        let mut i = 0;
        b.iter(|| {
            store.select(black_box(i % 1_000), i % 2 == 0);
            i += 1;
        });
    });
}

fn select_all_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_all");

    for len in [10, 100, 1_000].iter() {
        let store = SelectionStore::new(candidates(*len));

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            let mut selected = false;
            b.iter(|| {
                selected = !selected;
                store.select_all(black_box(selected));
            });
        });
    }
    group.finish();
}

fn view_recompute_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_recompute");

    for len in [10, 100, 1_000].iter() {
        let selection = BulkSelection::new(candidates(*len));

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, len| {
            let mut i = 0;
            b.iter(|| {
                selection.select(i % len, true);
                selection.select(i % len, false);
                black_box(selection.selected());
                i += 1;
            });
        });
    }
    group.finish();
}

fn observed_select_all_benchmark(c: &mut Criterion) {
    let selection = BulkSelection::new(candidates(100));
    let _render = create_effect({
        let selection = selection.clone();
        move || {
            black_box(selection.has_all_selected());
        }
    });

    c.bench_function("observed_select_all", |b| {
        let mut selected = false;
        b.iter(|| {
            selected = !selected;
            selection.select_all(black_box(selected));
        });
    });
}

criterion_group!(
    benches,
    select_toggle_benchmark,
    select_all_benchmark,
    view_recompute_benchmark,
    observed_select_all_benchmark,
);
criterion_main!(benches);
