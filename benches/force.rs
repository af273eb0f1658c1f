use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use crc_forcer::field::{pow_mod, reciprocal_mod};
use crc_forcer::force_crc32_slice;

fn bench_reciprocal(c: &mut Criterion) {
    c.bench_function("reciprocal_of_x_pow_8n", |b| {
        b.iter(|| reciprocal_mod(pow_mod(2, black_box(8 * 1024 * 1024 * 8))))
    });
}

fn bench_force(c: &mut Criterion) {
    let original: Vec<u8> = (0..1024 * 1024u32).map(|i| (i * 7) as u8).collect();

    c.bench_function("force_crc32_1mb", |b| {
        b.iter_batched_ref(
            || original.clone(),
            |data| force_crc32_slice(data, 512 * 1024, black_box(0xDEAD_BEEF)),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_reciprocal, bench_force);
criterion_main!(benches);
