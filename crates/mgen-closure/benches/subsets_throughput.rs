use criterion::{criterion_group, criterion_main, Criterion};
use mgen_closure::{check_subsets, SubsetOpts, SubsetOutcome};
use mgen_groups::Perm;

fn involutions(count: usize) -> Vec<Perm> {
    (0..count)
        .map(|i| Perm::parse_cycles(2 * count, &format!("({} {})", 2 * i, 2 * i + 1)).unwrap())
        .collect()
}

fn bench_subsets(c: &mut Criterion) {
    let elements = involutions(12);
    let mut group = c.benchmark_group("subsets_throughput");
    group.bench_function("independent_12", |b| {
        b.iter(|| {
            let outcome = check_subsets(&elements, None, &SubsetOpts::default()).unwrap();
            assert_eq!(outcome, SubsetOutcome::Independent);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_subsets);
criterion_main!(benches);
