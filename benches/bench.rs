// Criterion benchmarks for the TacoBank AI recommender

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tacobank_ai::{Recommender, UserProfile};

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::default();
    let profile = UserProfile::default();

    c.bench_function("recommend_default_catalog", |b| {
        b.iter(|| recommender.recommend(black_box(&profile)));
    });
}

fn bench_recommend_seeded(c: &mut Criterion) {
    let recommender = Recommender::default();
    let profile = UserProfile::default();

    c.bench_function("recommend_seeded_rng", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| recommender.recommend_with_rng(black_box(&profile), &mut rng));
    });
}

fn bench_catalog_sizes(c: &mut Criterion) {
    let profile = UserProfile::default();
    let mut group = c.benchmark_group("catalog_size");

    for size in [3usize, 10, 100] {
        let catalog: Vec<String> = (0..size).map(|i| format!("상품 {}", i)).collect();
        let recommender = Recommender::new(catalog);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| recommender.recommend(black_box(&profile)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend, bench_recommend_seeded, bench_catalog_sizes);
criterion_main!(benches);
