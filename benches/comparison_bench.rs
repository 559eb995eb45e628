use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Algorithm, PathingGrid, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 50;
const N_GRIDS: usize = 20;

fn random_grids(n: usize, count: usize) -> Vec<PathingGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|_| {
            let mut pathing_grid = PathingGrid::new(n, 800).unwrap();
            for x in 0..n as i32 {
                for y in 0..n as i32 {
                    if rng.gen_bool(0.25) {
                        pathing_grid.cell_mut(Point::new(x, y)).unwrap().mark_barrier();
                    }
                }
            }
            pathing_grid
        })
        .collect()
}

fn bench_solver(c: &mut Criterion, algorithm: Algorithm, grids: &[PathingGrid]) {
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    c.bench_function(format!("{algorithm}, {N}x{N}").as_str(), |b| {
        b.iter(|| {
            for grid in grids {
                let mut grid = grid.clone();
                black_box(algorithm.run(&mut || {}, &mut grid, start, end).unwrap());
            }
        })
    });
}

fn comparison_bench(c: &mut Criterion) {
    let grids = random_grids(N, N_GRIDS);
    for algorithm in Algorithm::ALL {
        bench_solver(c, algorithm, &grids);
    }
}

criterion_group!(benches, comparison_bench);
criterion_main!(benches);
