use crate::{
    constants::{NodeId, Weight},
    error::SearchError,
    graph::{Graph, NodeIndex},
};

/// Result of a single pair query.
///
/// If the target was not reached, `nodes` holds only the target and `weight`
/// is `None`. A path of length one with `Some(0)` is the trivial
/// `source == target` case.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub nodes: Vec<NodeIndex>,
    pub weight: Option<Weight>,
}

impl ShortestPath {
    pub fn new(
        source: NodeIndex,
        target: NodeIndex,
        nodes: Vec<NodeIndex>,
        weight: Option<Weight>,
    ) -> Self {
        ShortestPath {
            source,
            target,
            nodes,
            weight,
        }
    }

    pub fn is_found(&self) -> bool {
        self.weight.is_some()
    }

    /// Turns an unreached target into [`SearchError::NoPathFound`].
    pub fn found(self) -> Result<Self, SearchError> {
        if self.is_found() {
            Ok(self)
        } else {
            Err(SearchError::NoPathFound {
                src: self.source,
                dst: self.target,
            })
        }
    }

    /// External ids of the path nodes, in path order.
    pub fn ids(&self, g: &Graph) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter_map(|node_idx| g.node(*node_idx))
            .map(|node| node.id)
            .collect()
    }
}
