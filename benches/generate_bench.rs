//! Benchmarks for dataset generation and view projections
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use thummar::store::{generate, StdRandom, Store, User};
use thummar::view::{filter_orders, format_number, monthly_series};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("dataset", |b| {
        let mut rng = StdRandom::seeded(1);
        b.iter(|| generate(black_box(&mut rng)))
    });

    group.bench_function("store_refresh", |b| {
        let mut store = Store::with_source(StdRandom::seeded(2));
        store.login(User::demo());
        b.iter(|| {
            store.set_view(black_box(thummar::View::Sales));
            store.refresh_if_pending()
        })
    });

    group.finish();
}

fn bench_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("projections");
    let data = generate(&mut StdRandom::seeded(3));
    let chart = data.chart.clone().unwrap();

    group.throughput(Throughput::Elements(data.orders.len() as u64));
    for query in ["", "alice", "ZZZ"] {
        group.bench_function(format!("filter_{:?}", query), |b| {
            b.iter(|| filter_orders(black_box(&data.orders), black_box(query)))
        });
    }

    group.bench_function("monthly_series", |b| {
        b.iter(|| monthly_series(black_box(&chart)))
    });

    group.bench_function("format_number", |b| {
        b.iter(|| {
            for v in [42.0, 2_500.0, 1_500_000.0, 3.45] {
                black_box(format_number(black_box(v)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_projections);
criterion_main!(benches);
