use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pastver::prelude::*;
use pastver::registry::{self, MILESTONES};

fn catalog_with_nightlies() -> Vec<Version> {
    let mut versions: Vec<Version> = MILESTONES.iter().map(|(_, version)| *version).collect();
    versions.push(registry::post_v0_8_0(Target::Flat(9, 0), 7));
    versions.push(registry::post_v0_9_0(Target::Flat(10, 0), 1));
    versions
}

fn count_ordered_pairs(versions: &[Version]) -> usize {
    let mut ordered = 0;
    for a in versions {
        for b in versions {
            if a < b {
                ordered += 1;
            }
        }
    }
    ordered
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("order_catalog_pairs", |b| {
        let versions = catalog_with_nightlies();
        b.iter(|| count_ordered_pairs(black_box(&versions)))
    });

    c.bench_function("sort_catalog", |b| {
        b.iter(|| {
            let mut versions = black_box(catalog_with_nightlies());
            versions.sort_unstable();
            versions
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
