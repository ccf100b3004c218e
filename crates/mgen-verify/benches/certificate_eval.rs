use criterion::{criterion_group, criterion_main, Criterion};
use mgen_groups::{Modulus, ProjectiveMatrix};
use mgen_verify::{psl2_29_2_presentation, verify_presentation, Bindings, VerifyPolicy};

fn pgl2_29() -> Bindings<ProjectiveMatrix> {
    let f29 = Modulus::new(29).expect("prime");
    let a = ProjectiveMatrix::from_rows(f29, &[vec![0, 1], vec![14, 0]]).expect("invertible");
    let b = ProjectiveMatrix::from_rows(f29, &[vec![1, 1], vec![0, 1]]).expect("invertible");
    Bindings::new(ProjectiveMatrix::identity(f29, 2))
        .with("a", a)
        .with("b", b)
}

fn bench_presentation(c: &mut Criterion) {
    let bindings = pgl2_29();
    let presentation = psl2_29_2_presentation().expect("builtin presentation");
    let policy = VerifyPolicy::default();
    let mut group = c.benchmark_group("certificate_eval");
    group.bench_function("psl2_29_2", |b| {
        b.iter(|| {
            let report = verify_presentation(&bindings, &presentation, &policy).unwrap();
            assert!(report.passed());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_presentation);
criterion_main!(benches);
