use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pl8wrds_benchmarks::{synthetic_corpus, BENCHMARK_CORPUS_SIZE, BENCHMARK_SEED};
use pl8wrds_solver::{SolveOptions, Solver};

const SAMPLE_PLATES: &[&str] = &["CAB", "XYZ", "ARC", "QJZ", "EST"];

fn bench_solve_plate(c: &mut Criterion) {
  let corpus = synthetic_corpus(BENCHMARK_CORPUS_SIZE, BENCHMARK_SEED);
  let solver = Solver::build(&corpus);

  let mut group = c.benchmark_group("solve one plate, ~100k-word corpus");

  for &plate in SAMPLE_PLATES {
    group.bench_with_input(BenchmarkId::from_parameter(plate), &plate, |b, &plate| {
      b.iter(|| solver.solve(black_box(plate), black_box(&SolveOptions::default())));
    });
  }

  group.finish();
}

fn bench_index_build(c: &mut Criterion) {
  let corpus = synthetic_corpus(BENCHMARK_CORPUS_SIZE, BENCHMARK_SEED);

  c.bench_function("build solver index, ~100k-word corpus", |b| {
    b.iter(|| Solver::build(black_box(&corpus)));
  });
}

criterion_group!(benches, bench_solve_plate, bench_index_build);
criterion_main!(benches);
