use criterion::{
    BenchmarkId, Criterion, Throughput, {criterion_group, criterion_main},
};
use maxtable::MaxTable;

fn insert_loop(keys: i32) {
    let mut table = MaxTable::<4>::new();
    for i in 0..keys {
        table.insert_if_higher(&[i, i >> 3, i & 7, 1], i);
    }
    for i in 0..keys {
        table.insert_if_higher(&[i, i >> 3, i & 7, 1], i + 1);
    }
    table.destroy();
}

fn different_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_if_higher");
    for size in [100, 10_000, 1_000_000].iter() {
        group.throughput(Throughput::Elements(2 * *size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| insert_loop(size))
        });
    }
    group.finish();
}

criterion_group!(benches, different_sizes);
criterion_main!(benches);
