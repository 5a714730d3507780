use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use zebra::{
    puzzle::simulation::Simulation,
    solver::{driver::SearchDriver, forcing, validity},
};

/// One full attempt cycle: draw a random arrangement, run the forcing
/// pass, evaluate the validity predicate.
fn bench_single_attempt(c: &mut Criterion) {
    c.bench_function("attempt", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        b.iter(|| {
            let mut sim = Simulation::generate(&mut rng);
            forcing::apply_rules(&mut sim).unwrap();
            black_box(validity::is_valid(&sim).unwrap())
        })
    });
}

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for seed in [1u64, 7, 42] {
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            let driver = SearchDriver::new();
            b.iter(|| driver.run_seeded(black_box(seed)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_attempt, bench_full_search);
criterion_main!(benches);
