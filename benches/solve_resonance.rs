use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use resoscan::bodies::get_body;
use resoscan::resonance::ResonanceCandidate;
use resoscan::scanner::Scanner;
use resoscan::solver::Solver;

/// Random reduced fraction with both terms in [1, 16].
fn random_candidate(rng: &mut StdRng) -> ResonanceCandidate {
    loop {
        let p = rng.random_range(1..=16u32);
        let q = rng.random_range(1..=16u32);
        if let Ok(candidate) = ResonanceCandidate::new(p, q) {
            return candidate;
        }
    }
}

fn kerbin_solver() -> Solver {
    let scanner = Scanner::new(20.0, 50_000.0, 100_000.0, 500_000.0).unwrap();
    Solver::new(scanner, get_body("kerbin").unwrap()).unwrap()
}

/// Full two-sided trace for a feasible resonance (both tracer paths warm).
fn bench_feasible(c: &mut Criterion) {
    let solver = kerbin_solver();
    let candidate = ResonanceCandidate::new(1, 9).unwrap();

    c.bench_function("solve_feasible_1_9", |b| {
        b.iter(|| black_box(solver.solve(black_box(&candidate))))
    });
}

/// Mixed random candidates, the shape of a driver-level enumeration sweep.
fn bench_random_sweep(c: &mut Criterion) {
    let solver = kerbin_solver();

    c.bench_function("solve_random_candidates", |b| {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        b.iter_batched(
            || random_candidate(&mut rng),
            |candidate| black_box(solver.solve(&candidate)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_feasible, bench_random_sweep);
criterion_main!(benches);
