//! Loading graphs from the plain text description and from CSV files.
//!
//! The text format is a stream of whitespace separated integers:
//!
//! ```text
//! <node count> <edge count>
//! <id> ...                       (node count ids)
//! <start id> <end id> <weight>   (edge count times)
//! ```
use std::{fs, io::Read, path::Path, str::FromStr};

use anyhow::{bail, Context};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight};
use crate::graph::Graph;

#[derive(Debug, Deserialize, Serialize)]
struct NodeRecord {
    id: NodeId,
}

#[derive(Debug, Deserialize, Serialize)]
struct EdgeRecord {
    source: NodeId,
    target: NodeId,
    weight: Weight,
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace(),
        }
    }

    fn next<T>(&mut self, what: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self
            .inner
            .next()
            .with_context(|| format!("Unexpected end of input, expected {}", what))?;
        token
            .parse()
            .with_context(|| format!("Could not parse {} from {:?}", what, token))
    }
}

/// Builds a graph from the text description.
///
/// Fails on missing or malformed tokens and if an edge references an id that
/// is not among the nodes. In the latter case the error wraps a
/// [`GraphError`](crate::error::GraphError).
pub fn parse_graph(input: &str) -> anyhow::Result<Graph> {
    let mut tokens = Tokens::new(input);

    let num_nodes: usize = tokens.next("node count")?;
    let num_edges: i64 = tokens.next("edge count")?;
    if num_edges < 0 {
        bail!("Edge count must not be negative, got {}", num_edges);
    }

    // Counts are untrusted, grow with the tokens actually present
    let mut ids = Vec::new();
    for i in 0..num_nodes {
        ids.push(tokens.next::<NodeId>(&format!("id of node {}", i))?);
    }

    let mut edges = Vec::new();
    for i in 0..num_edges {
        let start_id: NodeId = tokens.next(&format!("start id of edge {}", i))?;
        let end_id: NodeId = tokens.next(&format!("end id of edge {}", i))?;
        let weight: Weight = tokens.next(&format!("weight of edge {}", i))?;
        edges.push((start_id, end_id, weight));
    }

    let mut g = Graph::with_capacity(ids.len());
    g.build_nodes(ids);
    g.attach_edges(edges).context("Failed to attach edges")?;

    Ok(g)
}

/// Reads the whole text description from `reader`, see [`parse_graph`].
pub fn read_graph<R: Read>(mut reader: R) -> anyhow::Result<Graph> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read graph description")?;
    parse_graph(&input)
}

impl Graph {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        info!("Reading graph: {:?}", path);

        let file = fs::File::open(path).with_context(|| format!("Could not open {:?}", path))?;
        let g = read_graph(file).with_context(|| format!("Invalid graph file {:?}", path))?;

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Reads `nodes.csv` (`id`) and `edges.csv` (`source,target,weight`),
    /// both referencing nodes by id.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        let mut ids = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_nodes)?;
        for result in reader.deserialize() {
            let node: NodeRecord = result.context("Failed to parse Node")?;
            ids.push(node.id);
        }

        let mut edges = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let edge: EdgeRecord = result.context("Failed to parse Edge")?;
            edges.push((edge.source, edge.target, edge.weight));
        }

        let mut g = Graph::with_capacity(ids.len());
        g.build_nodes(ids);
        g.attach_edges(edges).context("Failed to attach edges")?;

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Writes `nodes.csv` and `edges.csv` into `dir`.
    pub fn export_csv(&self, dir: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(dir.join("nodes.csv"))?;

        debug!("BEGIN writing nodes");
        for node in self.nodes() {
            wtr.serialize(NodeRecord { id: node.id })?;
        }

        wtr.flush()?;
        debug!("FINISHED writing nodes");

        let mut wtr = csv::Writer::from_path(dir.join("edges.csv"))?;
        debug!("BEGIN writing edges");
        for (source, edge) in self.edges() {
            wtr.serialize(EdgeRecord {
                source: self.nodes[source.index()].id,
                target: self.nodes[edge.target.index()].id,
                weight: edge.weight,
            })?;
        }

        wtr.flush()?;
        debug!("FINISHED writing edges");
        Ok(())
    }
}
