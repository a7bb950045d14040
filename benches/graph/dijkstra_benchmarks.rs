use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sssp::{shortest_paths, Graph};

fn sparse_graph(nodes: usize, edges: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(nodes);
    for _ in 0..edges {
        let from = rng.gen_range(1..nodes);
        let to = rng.gen_range(1..nodes);
        let weight = rng.gen_range(0..1000u64);
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

fn bench_dijkstra(c: &mut Criterion) {
    let small = sparse_graph(1_000, 4_000, 42);
    c.bench_function("dijkstra_1k_nodes_4k_edges", |b| {
        b.iter(|| shortest_paths(black_box(&small), 1).unwrap())
    });

    let large = sparse_graph(50_000, 200_000, 42);
    c.bench_function("dijkstra_50k_nodes_200k_edges", |b| {
        b.iter(|| shortest_paths(black_box(&large), 1).unwrap())
    });
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
