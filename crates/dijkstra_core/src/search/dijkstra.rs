//! Single source Dijkstra search with a lazy deletion frontier.
use crate::constants::Weight;
use crate::error::SearchError;
use crate::graph::*;
use crate::priority_queue::{HeapItem, PriorityQueue};
use crate::search::shortest_path::ShortestPath;
use crate::search::traversal_state::TraversalState;
use crate::statistics::SearchStats;
use log::{debug, info};

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    state: TraversalState,
    weights_checked: bool,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            state: TraversalState::new(graph.num_nodes()),
            weights_checked: false,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path from `source` to `target`.
    ///
    /// The search settles every node reachable from `source`, so after it
    /// returns [`Dijkstra::distance`] and [`Dijkstra::predecessor`] are final
    /// for the whole graph.
    ///
    /// An unreachable target is not an error here: the returned path is
    /// `[target]` with weight `None`.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<ShortestPath, SearchError> {
        self.check_position(source)?;
        self.check_position(target)?;
        self.check_weights()?;

        self.stats.init();
        self.run(source);
        self.stats.finish();

        let nodes = super::reconstruct_path(&self.state, target);
        let sp = ShortestPath::new(source, target, nodes, self.state.distance(target));

        if sp.is_found() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        Ok(sp)
    }

    fn run(&mut self, source: NodeIndex) {
        let g = self.g;
        self.state.reset(g.num_nodes());
        self.state.get_mut(source).distance = Some(0);

        let mut queue = PriorityQueue::new();
        queue.push(0, source);

        while let Some(HeapItem { distance, node, .. }) = queue.pop() {
            if self.state.get(node).visited {
                // Stale entry
                continue;
            }
            self.state.get_mut(node).visited = true;
            self.stats.nodes_settled += 1;

            for edge in g.neighbors_outgoing(node) {
                let target_state = self.state.get_mut(edge.target);
                if target_state.visited {
                    continue;
                }

                let new_distance = distance.saturating_add(edge.weight);
                if target_state
                    .distance
                    .map_or(true, |old_distance| new_distance < old_distance)
                {
                    target_state.distance = Some(new_distance);
                    target_state.predecessor = Some(node);
                    queue.push(new_distance, edge.target);
                    self.stats.edges_relaxed += 1;
                }
            }
        }

        self.stats.max_frontier_len = queue.max_len();
    }

    fn check_position(&self, node_idx: NodeIndex) -> Result<(), SearchError> {
        if node_idx.index() < self.g.num_nodes() {
            Ok(())
        } else {
            Err(SearchError::InvalidPosition {
                position: node_idx.index(),
                num_nodes: self.g.num_nodes(),
            })
        }
    }

    // The graph is borrowed immutably, so one pass is enough.
    fn check_weights(&mut self) -> Result<(), SearchError> {
        if self.weights_checked {
            return Ok(());
        }
        if let Some((src, edge)) = self.g.edges().find(|(_, edge)| edge.weight < 0) {
            return Err(SearchError::NegativeWeight {
                src,
                dst: edge.target,
                weight: edge.weight,
            });
        }
        self.weights_checked = true;
        Ok(())
    }

    /// Distance of `node_idx` found by the last search, `None` if unreached.
    pub fn distance(&self, node_idx: NodeIndex) -> Option<Weight> {
        self.state.distance(node_idx)
    }

    pub fn predecessor(&self, node_idx: NodeIndex) -> Option<NodeIndex> {
        self.state.predecessor(node_idx)
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }
}
