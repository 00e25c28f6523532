//! Benchmarks for solving scrambled cubes with each strategy.
//!
//! The two-phase tables and the cross table are built before measuring, so
//! the numbers reflect search time only.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench strategies
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cubelace_solver::{SolveStrategy, Solver, testing};

fn bench_strategies(c: &mut Criterion) {
    let solver = Solver::new();
    let cubes = testing::SCRAMBLES
        .iter()
        .enumerate()
        .map(|(i, scramble)| (i, testing::scrambled_cubie(scramble)))
        .collect::<Vec<_>>();

    for strategy in SolveStrategy::ALL {
        // Warm up the lazily built tables.
        solver.solve_cubie(&cubes[0].1, strategy).unwrap();

        for (i, cube) in &cubes {
            c.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("scramble_{i}")),
                cube,
                |b, cube| {
                    b.iter(|| {
                        let solution = solver.solve_cubie(hint::black_box(cube), strategy).unwrap();
                        hint::black_box(solution)
                    });
                },
            );
        }
    }
}

fn bench_parse(c: &mut Criterion) {
    let facelets = testing::scrambled(testing::SCRAMBLES[1]);
    c.bench_function("parse_facelets", |b| {
        b.iter(|| {
            let cube =
                cubelace_solver::CubieCube::from_facelets(hint::black_box(&facelets)).unwrap();
            hint::black_box(cube)
        });
    });
}

criterion_group!(benches, bench_strategies, bench_parse);
criterion_main!(benches);
