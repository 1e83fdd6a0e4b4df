use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    constants::{NodeId, Weight},
    graph::Graph,
};

pub fn generate_simple_graph() -> Graph {
    //      7 -> 8 -> 9
    //      |         |
    // 0 -> 5 -> 6 -  |
    // |         |  \ |
    // 1 -> 2 -> 3 -> 4
    let mut g = Graph::from_ids(0..10);

    g.attach_edges([
        (0, 1, 1),
        (1, 2, 1),
        (2, 3, 1),
        (3, 4, 20),
        (0, 5, 5),
        (5, 6, 1),
        (6, 4, 20),
        (6, 3, 20),
        (5, 7, 5),
        (7, 8, 1),
        (8, 9, 1),
        (9, 4, 1),
    ])
    .unwrap();

    g
}

/// The five node example graph shipped in `test_data/input.txt`.
pub fn generate_scenario_graph() -> Graph {
    // 1 -2-> 2 -1-> 3 -3-> 5
    // 1 -4-> 3
    // 2 -7-> 4 -1-> 5
    let mut g = Graph::from_ids([1, 2, 3, 4, 5]);

    g.attach_edges([
        (1, 2, 2),
        (1, 3, 4),
        (2, 3, 1),
        (2, 4, 7),
        (3, 5, 3),
        (4, 5, 1),
    ])
    .unwrap();

    g
}

/// 0 -> 1 -> ... -> n-1, every edge with weight 1
pub fn generate_line_graph(num_nodes: usize) -> Graph {
    let mut g = Graph::from_ids(0..num_nodes as NodeId);

    g.attach_edges((1..num_nodes as NodeId).map(|i| (i - 1, i, 1)))
        .unwrap();

    g
}

/// Random directed graph with weights in `0..=max_weight`.
///
/// Node ids are not contiguous (`10 * position`) and parallel edges or self
/// loops may occur. The same seed always yields the same graph.
pub fn generate_random_graph(
    num_nodes: usize,
    num_edges: usize,
    max_weight: Weight,
    seed: u64,
) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::from_ids((0..num_nodes as NodeId).map(|i| i * 10));

    if num_nodes == 0 {
        return g;
    }

    let edges: Vec<(NodeId, NodeId, Weight)> = (0..num_edges)
        .map(|_| {
            let source = rng.gen_range(0..num_nodes) as NodeId * 10;
            let target = rng.gen_range(0..num_nodes) as NodeId * 10;
            (source, target, rng.gen_range(0..=max_weight))
        })
        .collect();

    g.attach_edges(edges).unwrap();
    g
}
