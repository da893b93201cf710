use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipart_enum::{enumerate_partitions, partition_count, PartitionIter};

fn enumerate_bench(c: &mut Criterion) {
    c.bench_function("enumerate_recursive_30", |b| {
        b.iter(|| black_box(enumerate_partitions(black_box(30))));
    });

    c.bench_function("enumerate_iter_30", |b| {
        b.iter(|| black_box(PartitionIter::new(black_box(30)).count()));
    });

    c.bench_function("partition_count_400", |b| {
        b.iter(|| black_box(partition_count(black_box(400)).unwrap()));
    });
}

criterion_group!(benches, enumerate_bench);
criterion_main!(benches);
