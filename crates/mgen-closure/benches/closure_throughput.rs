use criterion::{criterion_group, criterion_main, Criterion};
use mgen_closure::enumerate;
use mgen_groups::{Modulus, ProjectiveMatrix};

fn pgl2_13() -> Vec<ProjectiveMatrix> {
    let f13 = Modulus::new(13).expect("prime");
    [
        vec![vec![1, 1], vec![0, 1]],
        vec![vec![4, 0], vec![0, 1]],
        vec![vec![0, 1], vec![1, 0]],
    ]
    .iter()
    .map(|rows| ProjectiveMatrix::from_rows(f13, rows).expect("invertible"))
    .collect()
}

fn bench_closure(c: &mut Criterion) {
    let gens = pgl2_13();
    let mut group = c.benchmark_group("closure_throughput");
    group.bench_function("psl2_13", |b| {
        b.iter(|| {
            let closure = enumerate(&gens).unwrap();
            assert_eq!(closure.len(), 1092);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_closure);
criterion_main!(benches);
