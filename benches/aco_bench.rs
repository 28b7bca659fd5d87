//! Criterion benchmarks for the ant colony.
//!
//! Uses random uniform instances to measure construction and update cost
//! at a few instance sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_antcolony::aco::{Ant, AcoConfig, Colony, EdgeModel};
use u_antcolony::nodes::Point;
use u_antcolony::random::create_rng;

fn uniform_instance(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn bench_find_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("ant_find_tour");

    for &n in &[10usize, 50, 100] {
        let edges = EdgeModel::new(&uniform_instance(n, 1), 1.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            let mut ant = Ant::new(1.0, 3.0);
            let mut rng = create_rng(42);
            b.iter(|| {
                ant.find_tour(black_box(edges), &mut rng);
                black_box(ant.evaluate(edges))
            })
        });
    }
    group.finish();
}

fn bench_colony_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("colony_run");
    group.sample_size(10);

    for (n, ants, steps) in [(10usize, 10usize, 50usize), (30, 10, 50), (60, 20, 20)] {
        let points = uniform_instance(n, 7);
        let config = AcoConfig::default()
            .with_colony_size(ants)
            .with_steps(steps)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_a{}_s{}", n, ants, steps), n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = Colony::new(black_box(p), black_box(c))
                        .and_then(Colony::run)
                        .map(|r| r.best_distance);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_find_tour, bench_colony_run);
criterion_main!(benches);
