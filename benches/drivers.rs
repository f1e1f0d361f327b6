use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rs_nbody::nbody::{random_cloud, FastSimulation, Gadget, Simulation};

pub fn bench_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");
    group.sample_size(20);

    for &n in &[64usize, 256, 1024] {
        let bodies = random_cloud(n, 50.0, 42);

        group.bench_function(BenchmarkId::new("exact", n), |b| {
            let sim = Simulation::new(bodies.clone(), 0.01, 0.01).unwrap();
            b.iter(|| sim.run())
        });

        group.bench_function(BenchmarkId::new("barnes_hut", n), |b| {
            let sim = FastSimulation::new(bodies.clone(), 0.01, 0.01).unwrap();
            b.iter(|| sim.run().unwrap())
        });
    }
    group.finish();
}

pub fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("gadget_build");

    for &n in &[256usize, 1024, 4096] {
        let bodies = random_cloud(n, 100.0, 7);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| Gadget::from_bodies(&bodies).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drivers, bench_tree_build);
criterion_main!(benches);
