use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{run, Capacity, Policy, ReferenceString};

/// A looping reference pattern with some locality, 10k references.
fn workload() -> ReferenceString {
    let pages: Vec<i64> = (0..10_000i64)
        .map(|i| if i % 5 == 0 { (i * 31) % 97 } else { (i / 10) % 16 })
        .collect();
    ReferenceString::try_from(pages).expect("non-empty workload")
}

fn bench_policies(c: &mut Criterion) {
    let refs = workload();
    let mut group = c.benchmark_group("simulate");

    for frames in [4usize, 16, 64] {
        let capacity = Capacity::new(frames).expect("non-zero capacity");
        for policy in Policy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), frames),
                &capacity,
                |b, &capacity| b.iter(|| run(policy, black_box(&refs), capacity)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
