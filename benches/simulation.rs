//! Full-run throughput per eviction policy.
//!
//! Run with `cargo bench --bench simulation`.

use std::hint::black_box;

use cachesim::{CacheSimulator, EvictionPolicy, TraceGenerator};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const TRACE_LEN: usize = 10_000;
const KEY_SPACE: u32 = 256;

fn bench_full_run(c: &mut Criterion) {
    let trace = TraceGenerator::default().generate_seeded(TRACE_LEN, KEY_SPACE, 42);

    let mut group = c.benchmark_group("full_run");
    group.throughput(Throughput::Elements(TRACE_LEN as u64));

    for capacity in [8usize, 64] {
        for policy in EvictionPolicy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), capacity),
                &capacity,
                |b, &capacity| {
                    b.iter(|| {
                        let mut sim = CacheSimulator::new(capacity).unwrap();
                        while sim.step(&trace, policy).is_ok() {}
                        black_box(sim.stats())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let generator = TraceGenerator::default();
    c.bench_function("generate_trace", |b| {
        b.iter(|| black_box(generator.generate_seeded(TRACE_LEN, KEY_SPACE, 7)))
    });
}

criterion_group!(benches, bench_full_run, bench_generate);
criterion_main!(benches);
