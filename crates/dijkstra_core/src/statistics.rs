use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use anyhow::anyhow;
use histogram::Histogram;

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub max_frontier_len: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.max_frontier_len = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed, frontier peak {} in {:?}",
            self.nodes_settled, self.edges_relaxed, self.max_frontier_len, self.duration
        )
    }
}

/// Largest value the degree histograms can record, larger degrees are clamped.
pub const MAX_RECORDED_DEGREE: u64 = (1 << 30) - 1;

fn degree_histogram(g: &Graph, outgoing: bool) -> anyhow::Result<Histogram> {
    let hist = Histogram::new(0, 10, 30)
        .map_err(|e| anyhow!("Failed to create degree histogram: {:?}", e))?;
    let mut in_degrees = vec![0u64; g.num_nodes()];
    for (_, edge) in g.edges() {
        in_degrees[edge.target.index()] += 1;
    }

    for (node, in_degree) in g.nodes().zip(in_degrees) {
        let degree = if outgoing {
            node.edges.len() as u64
        } else {
            in_degree
        };
        record_degree(&hist, degree)?;
    }
    Ok(hist)
}

fn record_degree(hist: &Histogram, degree: u64) -> anyhow::Result<()> {
    hist.increment(degree.min(MAX_RECORDED_DEGREE), 1)
        .map_err(|e| anyhow!("Failed to record degree {}: {:?}", degree, e))
}

pub fn degree_out_hist(g: &Graph) -> anyhow::Result<Histogram> {
    degree_histogram(g, true)
}

pub fn degree_in_hist(g: &Graph) -> anyhow::Result<Histogram> {
    degree_histogram(g, false)
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    g.num_edges() as f64 / g.num_nodes() as f64
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::node_index,
        search::dijkstra::Dijkstra,
        statistics::{
            average_out_degree, degree_in_hist, degree_out_hist, record_degree,
            MAX_RECORDED_DEGREE,
        },
        util::test_graphs::{generate_line_graph, generate_simple_graph},
    };

    #[test]
    fn stats_work() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        let g = generate_simple_graph();

        let mut d = Dijkstra::new(&g);
        d.search(node_index(0), node_index(4)).unwrap();

        assert!(d.stats.duration.is_some());

        assert_eq!(d.stats.nodes_settled, 10);
        assert_eq!(d.stats.edges_relaxed, 10);
        assert!(d.stats.max_frontier_len >= 1);
    }

    #[test]
    fn degree_hist_out_works() {
        let g = generate_line_graph(5);

        let hist = degree_out_hist(&g).unwrap();
        let counts: Vec<u64> = hist
            .into_iter()
            .filter(|b| b.count() > 0)
            .map(|b| b.count() as u64)
            .collect();

        // 4 nodes with one outgoing edge, the last one without
        assert_eq!(counts.iter().sum::<u64>(), 5);
        assert!(counts.contains(&4));
        assert!(counts.contains(&1));
    }

    #[test]
    fn degree_hist_in_works() {
        let g = generate_line_graph(5);

        let hist = degree_in_hist(&g).unwrap();
        let total: u64 = hist.into_iter().map(|b| b.count() as u64).sum();

        assert_eq!(total, 5);
    }

    #[test]
    fn huge_degrees_are_clamped() {
        let g = generate_line_graph(1);
        let hist = degree_out_hist(&g).unwrap();

        record_degree(&hist, u64::MAX).unwrap();
        record_degree(&hist, MAX_RECORDED_DEGREE + 1).unwrap();

        let total: u64 = hist.into_iter().map(|b| b.count() as u64).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn average_degree() {
        let g = generate_line_graph(5);

        assert_eq!(average_out_degree(&g), 0.8);
    }
}
