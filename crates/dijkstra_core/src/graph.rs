use crate::constants::{NodeId, Weight};
use crate::error::{GraphError, SearchError};
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::{fmt, hash::Hash};

/// Default integer typer for node indices
/// Needs to be increased vor very large graphs > u32::max
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn try_new(idx: usize) -> Option<Self>;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        Self::try_new(x)
            .unwrap_or_else(|| panic!("Index {} does not fit into index type u32", x))
    }
    #[inline(always)]
    fn try_new(x: usize) -> Option<Self> {
        u32::try_from(x).ok()
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Storage position of a node inside a [`Graph`].
///
/// Positions are assigned in insertion order and never change while the graph
/// lives, so they are the canonical internal reference to a node. The external
/// [`NodeId`] is only used for lookup and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    /// **Panics** if `x` does not fit into the index type
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn try_new(x: usize) -> Option<Self> {
        IndexType::try_new(x).map(NodeIndex)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

impl<Idx: IndexType> fmt::Display for NodeIndex<Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.index())
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Directed edge, owned by its source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: NodeIndex, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Node {
            id,
            edges: Vec::new(),
        }
    }
}

/// Directed weighted graph.
///
/// Topology only: the per query distances and predecessors live in
/// [`TraversalState`](crate::search::traversal_state::TraversalState), so a
/// graph can be shared by several searches.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    num_edges: usize,
    // First position of every id
    id_index: FxHashMap<NodeId, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            num_edges: 0,
            id_index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            num_edges: 0,
            id_index: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Creates a graph with one node per id, without edges.
    pub fn from_ids<I: IntoIterator<Item = NodeId>>(ids: I) -> Self {
        let mut g = Graph::new();
        g.build_nodes(ids);
        g
    }

    /// Replaces the whole node set (and with it every edge) by one node per
    /// id. The storage position of a node is its position in `ids`.
    ///
    /// Duplicate ids are allowed. Lookups resolve to the first node carrying
    /// the id.
    pub fn build_nodes<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) {
        self.nodes.clear();
        self.id_index.clear();
        self.num_edges = 0;

        for id in ids {
            self.add_node(id);
        }
        debug!("Built {} nodes", self.nodes.len());
    }

    /// Adds a new node to the graph
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.id_index.entry(id).or_insert(node_idx);
        self.nodes.push(Node::new(id));

        node_idx
    }

    /// Add a directed edge between two existing nodes.
    ///
    /// **Panics** if the source or target node does not exist
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, weight: Weight) {
        assert!(
            source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            source.index()
        );
        assert!(
            target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            target.index()
        );

        self.nodes[source.index()]
            .edges
            .push(Edge::new(target, weight));
        self.num_edges += 1;
    }

    /// Replaces the edge set by `edges`, given as `(start_id, end_id, weight)`.
    ///
    /// All or nothing: if any endpoint cannot be resolved, every edge list is
    /// cleared and the graph is left with its nodes but zero edges.
    pub fn attach_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
    {
        self.clear_edges();

        for (start_id, end_id, weight) in edges {
            let resolved = self
                .position_of(start_id)
                .ok_or(GraphError::UnknownIdentifier { id: start_id })
                .and_then(|source| {
                    self.position_of(end_id)
                        .map(|target| (source, target))
                        .ok_or(GraphError::UnknownIdentifier { id: end_id })
                });

            match resolved {
                Ok((source, target)) => self.add_edge(source, target, weight),
                Err(err) => {
                    warn!("{}, discarding all edges", err);
                    self.clear_edges();
                    return Err(err);
                }
            }
        }

        debug!("Attached {} edges", self.num_edges);
        Ok(())
    }

    /// Removes every edge, keeping the nodes.
    pub fn clear_edges(&mut self) {
        for node in self.nodes.iter_mut() {
            node.edges.clear();
        }
        self.num_edges = 0;
    }

    /// Storage position of the first node with the given id.
    pub fn position_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Converts a raw position, failing if it is not a node of this graph.
    pub fn checked_index(&self, position: usize) -> Result<NodeIndex, SearchError> {
        NodeIndex::try_new(position)
            .filter(|node_idx| node_idx.index() < self.nodes.len())
            .ok_or(SearchError::InvalidPosition {
                position,
                num_nodes: self.nodes.len(),
            })
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges as `(source, edge)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, &Edge)> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| node.edges.iter().map(move |edge| (NodeIndex::new(i), edge)))
    }

    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Edge> {
        self.nodes[node_idx.index()].edges.iter()
    }

    /// Weight of the lightest direct edge from `source` to `target`.
    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.node(source)?
            .edges
            .iter()
            .filter(|edge| edge.target == target)
            .map(|edge| edge.weight)
            .min()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}
