use dijkstra_core::{
    graph::node_index, search::dijkstra::Dijkstra, util::test_graphs::generate_random_graph,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

criterion_group!(benches, criterion_benchmark, graph_size);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let g = generate_random_graph(10_000, 50_000, 100, 42);

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_random_graph", "10k_nodes"),
        &g,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra.search(black_box(node_index(0)), black_box(node_index(9_999)))
            })
        },
    );
}

fn graph_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_size");
    for num_nodes in [1_000, 2_000, 4_000, 8_000, 16_000].iter() {
        let g = generate_random_graph(*num_nodes, num_nodes * 4, 100, 7);
        group.throughput(criterion::Throughput::Elements((num_nodes * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_nodes), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra.search(node_index(0), node_index(g.num_nodes() - 1))
            });
        });
    }
    group.finish();
}
