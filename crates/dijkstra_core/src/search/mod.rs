use crate::error::SearchError;
use crate::graph::{Graph, NodeIndex};

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPath;
use self::traversal_state::TraversalState;

pub mod dijkstra;
pub mod shortest_path;
pub mod traversal_state;

/// Shortest path between two node positions of `g`.
///
/// See [`Dijkstra::search`] for the handling of unreachable targets.
pub fn find_shortest_path(
    g: &Graph,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<ShortestPath, SearchError> {
    Dijkstra::new(g).search(source, target)
}

/// Follows the predecessor links from `target` back to a node without
/// predecessor and returns the nodes in forward order.
///
/// If `target` was never reached the result is just `[target]`.
pub fn reconstruct_path(state: &TraversalState, target: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![target];

    let mut current = target;
    while let Some(prev_node) = state.predecessor(current) {
        path.push(prev_node);
        current = prev_node;
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<ShortestPath, SearchError>) {
    let path = path.expect("search failed");
    assert_eq!(None, path.weight);
    assert_eq!(vec![path.target], path.nodes);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Result<ShortestPath, SearchError>,
) {
    let path = path.expect("search failed");
    let expected_path: Vec<NodeIndex> = expected_path.into_iter().map(NodeIndex::new).collect();
    assert_eq!(expected_path, path.nodes);
    assert_eq!(Some(expected_weight), path.weight);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::traversal_state::NodeState;
    use super::*;
    use crate::constants::Weight;
    use crate::graph::node_index;
    use crate::util::test_graphs::{generate_random_graph, generate_scenario_graph};

    /// Minimum weight over all simple paths, by exhaustive depth first search.
    fn brute_force_distance(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        fn visit(
            g: &Graph,
            node: NodeIndex,
            target: NodeIndex,
            weight: Weight,
            on_path: &mut Vec<bool>,
            best: &mut Option<Weight>,
        ) {
            if node == target {
                *best = Some(best.map_or(weight, |b| b.min(weight)));
                return;
            }
            on_path[node.index()] = true;
            for edge in g.neighbors_outgoing(node) {
                if !on_path[edge.target.index()] {
                    visit(g, edge.target, target, weight + edge.weight, on_path, best);
                }
            }
            on_path[node.index()] = false;
        }

        let mut best = None;
        let mut on_path = vec![false; g.num_nodes()];
        visit(g, source, target, 0, &mut on_path, &mut best);
        best
    }

    #[test]
    fn reconstruct_follows_predecessors() {
        let mut state = TraversalState::new(4);
        *state.get_mut(node_index(2)) = NodeState {
            distance: Some(2),
            visited: true,
            predecessor: Some(node_index(3)),
        };
        *state.get_mut(node_index(3)) = NodeState {
            distance: Some(1),
            visited: true,
            predecessor: Some(node_index(0)),
        };

        assert_eq!(
            reconstruct_path(&state, node_index(2)),
            vec![node_index(0), node_index(3), node_index(2)]
        );
    }

    #[test]
    fn reconstruct_unreached_target() {
        let state = TraversalState::new(3);

        assert_eq!(reconstruct_path(&state, node_index(1)), vec![node_index(1)]);
    }

    #[test]
    fn find_shortest_path_on_scenario() {
        let g = generate_scenario_graph();

        let sp = find_shortest_path(&g, node_index(0), node_index(4)).unwrap();

        assert_eq!(sp.ids(&g), vec![1, 2, 3, 5]);
        assert_eq!(sp.weight, Some(6));
    }

    #[test]
    fn source_equals_target() {
        let g = generate_scenario_graph();

        let sp = find_shortest_path(&g, node_index(3), node_index(3)).unwrap();

        assert_eq!(sp.nodes, vec![node_index(3)]);
        assert_eq!(sp.weight, Some(0));
        assert!(sp.found().is_ok());
    }

    #[test]
    fn disconnected_target_is_distinguishable() {
        let g = generate_scenario_graph();

        // Node 5 has no outgoing edges
        let sp = find_shortest_path(&g, node_index(4), node_index(0)).unwrap();

        assert_eq!(sp.nodes, vec![node_index(0)]);
        assert_eq!(sp.weight, None);
        assert_eq!(
            sp.found(),
            Err(SearchError::NoPathFound {
                src: node_index(4),
                dst: node_index(0)
            })
        );
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(
                &(2usize..8, 0usize..20, any::<u64>()),
                |(num_nodes, num_edges, seed)| {
                    let g = generate_random_graph(num_nodes, num_edges, 10, seed);

                    for s in 0..num_nodes {
                        let mut d = Dijkstra::new(&g);
                        for t in 0..num_nodes {
                            let sp = d.search(node_index(s), node_index(t)).unwrap();
                            let expected = brute_force_distance(&g, node_index(s), node_index(t));
                            prop_assert_eq!(expected, sp.weight);
                            prop_assert_eq!(expected, d.distance(node_index(t)));
                        }
                    }
                    Ok(())
                },
            )
            .unwrap();
    }
}
