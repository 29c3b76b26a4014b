use criterion::{criterion_group, criterion_main, Criterion};
use scalebook::catalog::Catalog;
use scalebook::scales::RC_SCALES_JSON;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = Catalog::from_json_str(RC_SCALES_JSON).expect("embedded table");

    c.bench_function("catalog_build (RC table)", |b| {
        b.iter(|| Catalog::from_json_str(black_box(RC_SCALES_JSON)))
    });

    c.bench_function("resolve (4 scales x full sweep)", |b| {
        b.iter(|| {
            for code in ["RCd", "RC1", "RC2", "RC3"] {
                for score in (0..=120).step_by(5) {
                    let _ = catalog.resolve(black_box(code), black_box(score));
                }
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
