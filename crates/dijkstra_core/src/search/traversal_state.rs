use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Scratch data of one node during a search.
///
/// `distance == None` means the node has not been reached (yet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeState {
    pub distance: Option<Weight>,
    pub visited: bool,
    pub predecessor: Option<NodeIndex>,
}

/// Per query state indexed by node position, kept apart from the graph
/// topology.
#[derive(Debug, Clone, Default)]
pub struct TraversalState {
    nodes: Vec<NodeState>,
}

impl TraversalState {
    pub fn new(num_nodes: usize) -> Self {
        TraversalState {
            nodes: vec![NodeState::default(); num_nodes],
        }
    }

    /// Every node back to unreached, unvisited and without predecessor.
    pub fn reset(&mut self, num_nodes: usize) {
        self.nodes.clear();
        self.nodes.resize(num_nodes, NodeState::default());
    }

    #[inline]
    pub fn get(&self, node_idx: NodeIndex) -> &NodeState {
        &self.nodes[node_idx.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, node_idx: NodeIndex) -> &mut NodeState {
        &mut self.nodes[node_idx.index()]
    }

    pub fn distance(&self, node_idx: NodeIndex) -> Option<Weight> {
        self.nodes.get(node_idx.index())?.distance
    }

    pub fn predecessor(&self, node_idx: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(node_idx.index())?.predecessor
    }

    pub fn is_visited(&self, node_idx: NodeIndex) -> bool {
        self.nodes
            .get(node_idx.index())
            .map_or(false, |state| state.visited)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
