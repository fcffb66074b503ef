use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use maxheap_rs::MaxHeap;
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut heap = MaxHeap::new();
    c.bench_function("insert", |b| {
        b.iter(|| {
            let mut rng = rand::thread_rng();
            heap.insert(rng.gen::<i32>());
        })
    });

    let items: Vec<i32> = {
        let mut rng = rand::thread_rng();
        (0..10_000).map(|_| rng.gen()).collect()
    };

    c.bench_function("pop_max", |b| {
        b.iter_batched(
            || MaxHeap::from_vec(items.clone()),
            |mut heap| {
                while let Ok(max) = heap.pop_max() {
                    black_box(max);
                }
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("heapify", |b| {
        b.iter_batched(
            || items.clone(),
            |items| black_box(MaxHeap::from_vec(items)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
