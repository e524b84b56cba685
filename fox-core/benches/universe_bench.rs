use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fox_core::calendar::SpaceDate;
use fox_core::Universe;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_universe(c: &mut Criterion) {
    let mut group = c.benchmark_group("universe");
    group.sample_size(10);

    group.bench_function("generate 128 galaxies", |b| {
        b.iter_batched(|| StdRng::seed_from_u64(7),
        |mut rng| Universe::generate_with_start_year(&mut rng, 2525),
        BatchSize::SmallInput);
    });

    group.bench_function("tick", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        let mut universe = Universe::generate_with_start_year(&mut rng, 2525);
        let mut elapsed = 0;
        b.iter(|| {
            elapsed += 1;
            universe.tick_at(elapsed);
        });
    });

    group.bench_function("calendar 1M hours", |b| {
        b.iter(|| SpaceDate::from_elapsed(1_000_000, 2525));
    });
    group.finish();
}

criterion_group!(benches, bench_universe);
criterion_main!(benches);
