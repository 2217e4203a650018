use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathfinder::collections::LowestFirst;
use pathfinder::PriorityQueue;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(black_box(i));
            }
        });
    });

    group.bench_function("priority_queue_enqueue", |b| {
        b.iter(|| {
            let mut pq = PriorityQueue::new();
            for i in 0..1000 {
                pq.enqueue(black_box(i));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(i);
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut pq = PriorityQueue::new();
            for i in 0..1000 {
                pq.enqueue(i);
            }
            while let Ok(x) = pq.dequeue_max() {
                black_box(x);
            }
        });
    });

    // Min-first ordering, as both graph algorithms use it.
    group.bench_function("std_reverse_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000u32 {
                heap.push(Reverse(i.wrapping_mul(2_654_435_761)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_lowest_first", |b| {
        b.iter(|| {
            let mut pq = PriorityQueue::with_comparator(LowestFirst);
            for i in 0..1000u32 {
                pq.enqueue(i.wrapping_mul(2_654_435_761));
            }
            while let Ok(x) = pq.dequeue_max() {
                black_box(x);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_priority_queue);
criterion_main!(benches);
