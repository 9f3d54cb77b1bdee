//! Benchmarks for generation stepping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use torus_life::{
    schema::{GridConfig, Pattern, Seed},
    sim::Simulation,
};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for size in [32, 64, 128, 256] {
        let config = GridConfig {
            rows: size,
            cols: size,
            cell_size_px: 25,
        };
        let seed = Seed {
            pattern: Pattern::Random {
                density: 0.5,
                seed: 42,
            },
        };
        let mut simulation = Simulation::from_seed(config, &seed).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(simulation.tick());
                });
            },
        );
    }

    group.finish();
}

fn bench_sparse_edits(c: &mut Criterion) {
    // Incremental counts should make a handful of flips cheap even on a
    // large grid.
    let mut group = c.benchmark_group("sparse_edits");

    let config = GridConfig {
        rows: 512,
        cols: 512,
        cell_size_px: 25,
    };
    let mut simulation = Simulation::new(config).unwrap();

    group.bench_function("toggle_100_cells", |b| {
        b.iter(|| {
            for i in 0..100usize {
                let row = (i * 37) % 512;
                let col = (i * 53) % 512;
                let alive = simulation.grid().is_alive(row, col);
                simulation.grid_mut().set_cell_state(row, col, !alive);
            }
            black_box(simulation.grid().population());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_sparse_edits);
criterion_main!(benches);
