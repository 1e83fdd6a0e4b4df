use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use crate::{
    constants::NodeId,
    graph::{node_index, Graph, NodeIndex},
};

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the graph description
    #[arg(default_value = "input.txt")]
    input: String,

    /// Read the graph from a nodes and an edges CSV file instead
    #[arg(long, num_args = 2, value_names = ["NODES", "EDGES"])]
    csv: Option<Vec<String>>,

    /// Source node, given as storage position
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    source: i64,

    /// Target node, given as storage position. Defaults to the last node
    #[arg(short, long, allow_negative_numbers = true)]
    target: Option<i64>,

    /// Interpret source and target as node ids instead of positions
    #[arg(long)]
    by_id: bool,

    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    Text(PathBuf),
    Csv { nodes: PathBuf, edges: PathBuf },
}

/// How the user referred to a node on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSelector {
    Position(usize),
    Id(NodeId),
}

impl NodeSelector {
    fn new(value: i64, by_id: bool) -> anyhow::Result<Self> {
        if by_id {
            return Ok(NodeSelector::Id(value));
        }
        let position = usize::try_from(value)
            .with_context(|| format!("Node position must not be negative, got {}", value))?;
        Ok(NodeSelector::Position(position))
    }

    pub fn resolve(&self, g: &Graph) -> anyhow::Result<NodeIndex> {
        match *self {
            NodeSelector::Position(position) => Ok(g.checked_index(position)?),
            NodeSelector::Id(id) => g
                .position_of(id)
                .with_context(|| format!("No node with id {}", id)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub graph: GraphSource,
    pub source: NodeSelector,
    pub target: Option<NodeSelector>,
    pub print_stats: bool,
}

impl Cfg {
    pub fn load_graph(&self) -> anyhow::Result<Graph> {
        match &self.graph {
            GraphSource::Text(path) => Graph::from_path(path),
            GraphSource::Csv { nodes, edges } => Graph::from_csv(nodes, edges),
        }
    }

    pub fn source(&self, g: &Graph) -> anyhow::Result<NodeIndex> {
        self.source.resolve(g)
    }

    pub fn target(&self, g: &Graph) -> anyhow::Result<NodeIndex> {
        match &self.target {
            Some(target) => target.resolve(g),
            None => match g.num_nodes() {
                0 => bail!("Graph has no nodes"),
                n => Ok(node_index(n - 1)),
            },
        }
    }
}

impl Cli {
    fn into_cfg(self) -> anyhow::Result<Cfg> {
        let graph = match self.csv {
            Some(files) => match files.as_slice() {
                [nodes, edges] => GraphSource::Csv {
                    nodes: PathBuf::from(nodes),
                    edges: PathBuf::from(edges),
                },
                _ => bail!("--csv expects a nodes and an edges file"),
            },
            None => GraphSource::Text(PathBuf::from(self.input)),
        };

        Ok(Cfg {
            graph,
            source: NodeSelector::new(self.source, self.by_id)?,
            target: self
                .target
                .map(|target| NodeSelector::new(target, self.by_id))
                .transpose()?,
            print_stats: self.stats,
        })
    }
}

pub fn parse() -> anyhow::Result<Cfg> {
    Cli::parse().into_cfg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::util::test_graphs::generate_scenario_graph;

    fn parse_args(args: &[&str]) -> anyhow::Result<Cfg> {
        let cli = Cli::try_parse_from(std::iter::once("shortest_path").chain(args.iter().copied()))?;
        cli.into_cfg()
    }

    #[test]
    fn defaults() {
        let cfg = parse_args(&[]).unwrap();
        let g = generate_scenario_graph();

        assert_eq!(cfg.graph, GraphSource::Text(PathBuf::from("input.txt")));
        assert_eq!(cfg.source(&g).unwrap(), node_index(0));
        assert_eq!(cfg.target(&g).unwrap(), node_index(4));
        assert!(!cfg.print_stats);
    }

    #[test]
    fn positions() {
        let cfg = parse_args(&["graph.txt", "-s", "2", "-t", "3", "--stats"]).unwrap();
        let g = generate_scenario_graph();

        assert_eq!(cfg.graph, GraphSource::Text(PathBuf::from("graph.txt")));
        assert_eq!(cfg.source(&g).unwrap(), node_index(2));
        assert_eq!(cfg.target(&g).unwrap(), node_index(3));
        assert!(cfg.print_stats);
    }

    #[test]
    fn ids() {
        let cfg = parse_args(&["--by-id", "--source", "2", "--target", "5"]).unwrap();
        let g = generate_scenario_graph();

        assert_eq!(cfg.source(&g).unwrap(), node_index(1));
        assert_eq!(cfg.target(&g).unwrap(), node_index(4));

        let cfg = parse_args(&["--by-id", "-s", "42"]).unwrap();
        assert!(cfg.source(&g).is_err());
    }

    #[test]
    fn csv_files() {
        let cfg = parse_args(&["--csv", "n.csv", "e.csv"]).unwrap();

        assert_eq!(
            cfg.graph,
            GraphSource::Csv {
                nodes: PathBuf::from("n.csv"),
                edges: PathBuf::from("e.csv")
            }
        );
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let g = generate_scenario_graph();

        let cfg = parse_args(&["-s", "4294967296", "-t", "4"]).unwrap();
        let err = cfg.source(&g).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::InvalidPosition {
                position: 4294967296,
                num_nodes: 5
            })
        );

        let cfg = parse_args(&["-t", "5"]).unwrap();
        assert!(cfg.target(&g).is_err());
    }

    #[test]
    fn negative_position_is_rejected() {
        assert!(parse_args(&["-s", "-1"]).is_err());
    }

    #[test]
    fn empty_graph_has_no_default_target() {
        let cfg = parse_args(&[]).unwrap();

        assert!(cfg.target(&Graph::new()).is_err());
    }
}
