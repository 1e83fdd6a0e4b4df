//! Interactive shell to run shortest path queries on a loaded graph
use std::path::{Path, PathBuf};
use std::time::Duration;

use dijkstra_core::prelude::*;
use dijkstra_core::statistics::{average_out_degree, degree_in_hist, degree_out_hist};
use indicatif::ProgressBar;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges (avg. out degree {:.2})",
        context.graph.num_nodes(),
        context.graph.num_edges(),
        average_out_degree(&context.graph)
    )))
}

/// Print the in and out degree distribution
fn degrees(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut res = String::new();
    for (name, hist) in [
        ("out", degree_out_hist(&context.graph)),
        ("in", degree_in_hist(&context.graph)),
    ] {
        let hist = match hist {
            Ok(hist) => hist,
            Err(err) => return Ok(Some(format!("{:#}", err))),
        };
        res.push_str(&format!("Degree {}:\n", name));
        for bucket in hist.into_iter().filter(|b| b.count() > 0) {
            res.push_str(&format!(
                "  [{}-{}]: {}\n",
                bucket.low(),
                bucket.high(),
                bucket.count()
            ));
        }
    }
    Ok(Some(res))
}

fn format_path(context: &Context, src: NodeIndex, dst: NodeIndex) -> String {
    let mut dijkstra = Dijkstra::new(&context.graph);
    let sp = match dijkstra.search(src, dst).and_then(ShortestPath::found) {
        Ok(sp) => sp,
        Err(err) => return err.to_string(),
    };

    let ids: Vec<String> = sp
        .ids(&context.graph)
        .iter()
        .map(|id| id.to_string())
        .collect();
    format!(
        "{}\nWeight: {}\nTook: {:?}",
        ids.join(" "),
        sp.weight.unwrap_or_default(),
        dijkstra.stats.duration
    )
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<usize>("src").unwrap();
    let dst = *args.get_one::<usize>("dst").unwrap();

    let (src, dst) = match (
        context.graph.checked_index(src),
        context.graph.checked_index(dst),
    ) {
        (Ok(src), Ok(dst)) => (src, dst),
        (Err(err), _) | (_, Err(err)) => return Ok(Some(err.to_string())),
    };

    Ok(Some(format_path(context, src, dst)))
}

fn run_dijkstra_by_id(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src_id = *args.get_one::<NodeId>("src").unwrap();
    let dst_id = *args.get_one::<NodeId>("dst").unwrap();

    let (Some(src), Some(dst)) = (
        context.graph.position_of(src_id),
        context.graph.position_of(dst_id),
    ) else {
        return Ok(Some(format!("Unknown node id {} or {}", src_id, dst_id)));
    };

    Ok(Some(format_path(context, src, dst)))
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_nodes = context.graph.num_nodes();
    if num_nodes == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let pairs: Vec<(NodeIndex, NodeIndex)> = (0..n)
        .map(|_| {
            (
                node_index(rng.gen_range(0..num_nodes)),
                node_index(rng.gen_range(0..num_nodes)),
            )
        })
        .collect();

    let pb = ProgressBar::new(n as u64);
    let mut total = Duration::ZERO;
    let mut found = 0;
    let mut dijkstra = Dijkstra::new(&context.graph);
    for (src, dst) in pairs {
        if let Ok(sp) = dijkstra.search(src, dst) {
            if sp.is_found() {
                found += 1;
            }
            total += dijkstra.stats.duration.unwrap_or_default();
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Some(format!(
        "{} queries, {} paths found, avg. {:?}",
        n,
        found,
        total / n.max(1) as u32
    )))
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.txt".to_string());
    let graph = match Graph::from_path(Path::new(&path)) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to run shortest path queries")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from("history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("degrees").about("Print the degree distribution"),
            degrees,
        )
        .with_command(
            Command::new("path")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("Position of source node"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("Position of destination node"),
                )
                .about("Calculate shortest path between two node positions"),
            run_dijkstra,
        )
        .with_command(
            Command::new("idpath")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true)
                        .help("ID of source node"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true)
                        .help("ID of destination node"),
                )
                .about("Calculate shortest path between two node ids"),
            run_dijkstra_by_id,
        )
        .with_command(
            Command::new("bench")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        );

    repl.run()
}
