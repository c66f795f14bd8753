use criterion::{black_box, criterion_group, criterion_main, Criterion};
use point_quadtree::quadtree::QuadTree;
use rand::prelude::*;

const SIZE: u32 = 4096;

fn populated(count: usize) -> QuadTree {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quadtree = QuadTree::new(SIZE - 1, SIZE - 1);
    let bounds = quadtree.bounds();
    for _ in 0..count {
        let point = bounds.random_point_inside(&mut rng);
        quadtree.insert(point.x, point.y);
    }
    quadtree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut quadtree = QuadTree::new(SIZE - 1, SIZE - 1);

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            quadtree.insert(
                black_box(rng.gen_range(0..SIZE)),
                black_box(rng.gen_range(0..SIZE)),
            )
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let quadtree = populated(10_000);

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            quadtree.query(
                black_box(rng.gen_range(0..SIZE)),
                black_box(rng.gen_range(0..SIZE)),
            )
        })
    });
}

fn scan_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let quadtree = populated(10_000);
    let mut out = vec![0u32; 64];

    c.bench_function("quadtree_scan_x", |b| {
        b.iter(|| quadtree.scan_x(black_box(rng.gen_range(0..SIZE)), &mut out))
    });
    c.bench_function("quadtree_scan_y", |b| {
        b.iter(|| quadtree.scan_y(black_box(rng.gen_range(0..SIZE)), &mut out))
    });
}

fn count_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let quadtree = populated(10_000);

    c.bench_function("quadtree_count_x", |b| {
        b.iter(|| quadtree.count_x(black_box(rng.gen_range(0..SIZE))))
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    query_benchmark,
    scan_benchmark,
    count_benchmark
);
criterion_main!(quadtree_benchmarks);
