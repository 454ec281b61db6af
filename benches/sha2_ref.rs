use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha2::{Digest, Sha256, Sha512, Sha512_256};
use std::hint::black_box;

pub fn bench_sha2_ref(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference");

    for len in [64usize, 1024, 16 * 1024] {
        let data = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("sha1", len), &data, |b, data| {
            b.iter(|| sha1::Sha1::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha256", len), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Sha256::new();
                hasher.update(black_box(data));
                let _ = hasher.finalize();
            })
        });
        group.bench_with_input(BenchmarkId::new("sha512", len), &data, |b, data| {
            b.iter(|| Sha512::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha512_256", len), &data, |b, data| {
            b.iter(|| Sha512_256::digest(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha2_ref);
criterion_main!(benches);
