//! Error types of the graph store and the search.
use thiserror::Error;

use crate::constants::{NodeId, Weight};
use crate::graph::NodeIndex;

/// Errors raised while building a [`Graph`](crate::graph::Graph).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge references unknown node id {id}")]
    UnknownIdentifier { id: NodeId },
}

/// Errors raised by a shortest path query.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Node index {position} is out of range (graph has {num_nodes} nodes)")]
    InvalidPosition { position: usize, num_nodes: usize },

    #[error("Edge {src} -> {dst} has negative weight {weight}")]
    NegativeWeight {
        src: NodeIndex,
        dst: NodeIndex,
        weight: Weight,
    },

    #[error("No path found from {src} to {dst}")]
    NoPathFound { src: NodeIndex, dst: NodeIndex },
}
