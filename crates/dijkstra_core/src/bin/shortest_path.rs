use dijkstra_core::prelude::*;
use dijkstra_core::util::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse()?;
    let g = cfg.load_graph()?;

    let source = cfg.source(&g)?;
    let target = cfg.target(&g)?;

    let mut dijkstra = Dijkstra::new(&g);
    let sp = dijkstra.search(source, target)?;

    if cfg.print_stats {
        eprintln!("{}", dijkstra.stats);
    }

    let sp = sp.found()?;
    let ids: Vec<String> = sp.ids(&g).iter().map(|id| id.to_string()).collect();
    println!("{}", ids.join(" "));

    Ok(())
}
