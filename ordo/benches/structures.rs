use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ordo::{BinaryMaxHeap, BoundedArray, PriorityQueue, UniformRange, YoungTableau};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_array(len: usize, seed: u64) -> BoundedArray<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut array = BoundedArray::new(len).expect("benchmark array allocation");
    let range = UniformRange::new(-1_000_000, 1_000_000).expect("valid range");
    array.randomize(&mut rng, range);
    array
}

fn bench_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");

    for len in [1_000usize, 10_000, 100_000] {
        let array = random_array(len, 0xDEADBEEF);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &array, |b, array| {
            b.iter(|| {
                let heap = BinaryMaxHeap::from_array(black_box(array.clone()));
                black_box(heap.into_sorted_array())
            })
        });
    }
    group.finish();
}

fn bench_priority_queue_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue_churn");

    for capacity in [1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(123456);
        let keys: Vec<i64> = (0..capacity).map(|_| rng.gen_range(0..1_000_000)).collect();

        group.throughput(Throughput::Elements(capacity as u64));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &keys, |b, keys| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(keys.len()).expect("allocation");
                for &key in keys {
                    queue.insert(key).expect("queue has room");
                }
                while let Ok(max) = queue.extract_max() {
                    black_box(max);
                }
            })
        });
    }
    group.finish();
}

fn bench_tableau_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("young_tableau_drain");

    for side in [16usize, 64, 256] {
        let elements = random_array(side * side, 42).into_vec();

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &elements, |b, elements| {
            b.iter(|| {
                let mut tableau =
                    YoungTableau::from_elements(side, side, elements).expect("fits the shape");
                while let Ok(min) = tableau.extract_min() {
                    black_box(min);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_heapsort,
    bench_priority_queue_churn,
    bench_tableau_drain
);
criterion_main!(benches);
