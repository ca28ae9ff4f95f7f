use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mazegraph::{top_k_sort, Graph, KruskalMazeCarver, Maze, PriorityQueue, WeightedEdge};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(n: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

/// n x n 网格，随机权重
fn grid_graph(n: u32) -> Graph<u32, WeightedEdge<u32>> {
    let mut rng = StdRng::seed_from_u64(11);
    let mut edges = Vec::new();
    for r in 0..n {
        for c in 0..n {
            let id = r * n + c;
            if c + 1 < n {
                edges.push(WeightedEdge::new(id, id + 1, rng.gen_range(0.0..10.0)));
            }
            if r + 1 < n {
                edges.push(WeightedEdge::new(id, id + n, rng.gen_range(0.0..10.0)));
            }
        }
    }
    Graph::new(0..n * n, edges).unwrap()
}

fn bench_priority_queue(c: &mut Criterion) {
    let values = random_values(10_000);

    c.bench_function("priority_queue_insert", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for &v in &values {
                queue.insert(black_box(v));
            }
            queue
        })
    });

    c.bench_function("priority_queue_remove_min", |b| {
        b.iter(|| {
            let mut queue: PriorityQueue<i64> = values.iter().copied().collect();
            while let Ok(v) = queue.remove_min() {
                black_box(v);
            }
        })
    });
}

fn bench_top_k(c: &mut Criterion) {
    let values = random_values(100_000);
    let mut group = c.benchmark_group("top_k_sort");
    for k in [10i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| top_k_sort(k, values.iter().copied()).unwrap())
        });
    }
    group.finish();
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    for n in [20u32, 50] {
        let graph = grid_graph(n);
        let last = n * n - 1;

        group.bench_with_input(BenchmarkId::new("minimum_spanning_tree", n), &graph, |b, g| {
            b.iter(|| g.minimum_spanning_tree().unwrap())
        });
        group.bench_with_input(BenchmarkId::new("shortest_path", n), &graph, |b, g| {
            b.iter(|| g.shortest_path(black_box(&0), black_box(&last)).unwrap())
        });
    }
    group.finish();
}

fn bench_maze(c: &mut Criterion) {
    let maze = Maze::grid(40, 40).unwrap();
    let carver = KruskalMazeCarver::with_seed(3);

    c.bench_function("maze_carve_40x40", |b| {
        b.iter(|| carver.walls_to_remove(black_box(&maze)).unwrap())
    });
}

criterion_group!(benches, bench_priority_queue, bench_top_k, bench_graph, bench_maze);
criterion_main!(benches);
