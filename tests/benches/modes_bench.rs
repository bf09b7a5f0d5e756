use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use modecrypt_api::Mode;
use modecrypt_tests::fixtures::{fit_to_mode, keyed, primitives};

fn bench_modes(c: &mut Criterion) {
    for (name, primitive) in primitives() {
        let mut group = c.benchmark_group(format!("{name} encode"));

        // Test different data sizes
        for size in [16usize, 256, 4096] {
            group.throughput(Throughput::Bytes(size as u64));
            for mode in Mode::ALL {
                let mut cipher = keyed(primitive, mode, b"benchmark key", &[]);
                let mut data = fit_to_mode(vec![0u8; size], mode, cipher.metadata().block_size);
                group.bench_with_input(BenchmarkId::new(mode.name(), size), &size, |b, _| {
                    b.iter(|| {
                        cipher.encode_in_place(&mut data).unwrap();
                        cipher.done().unwrap();
                    });
                });
            }
        }

        group.finish();
    }
}

fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("init");
    for (name, primitive) in primitives() {
        let mut cipher = keyed(primitive, Mode::default(), b"benchmark key", &[]);
        group.bench_function(BenchmarkId::new("derived vector", name), |b| {
            b.iter(|| cipher.init_key(b"benchmark key").unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_modes, bench_init);
criterion_main!(benches);
