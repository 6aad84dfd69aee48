//! Every demo in sequence, followed by the maze with its BFS route drawn in.
//!
//! Run: cargo run
//! Set `RUST_LOG=wayseek_paths=debug` to see per-search statistics.

use log::info;
use wayseek_demos::{DemoConfig, dls_report, graph_report, grid_report, route_view};
use wayseek_maps::fixtures::{GRAPH_GOAL, GRAPH_START, sample_graph, sample_maze};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::from_env()?;
    let graph = sample_graph();
    let maze = sample_maze()?;
    info!(
        "graph with {} vertices, {}x{} maze, depth limits {:?}",
        graph.len(),
        maze.bounds().rows(),
        maze.bounds().cols(),
        config.dls_limits
    );

    println!("{}", graph_report(&graph, &GRAPH_START, &GRAPH_GOAL));
    println!("{}", grid_report(&maze));
    println!("{}", dls_report(&maze, &config.dls_limits));
    print!("{}", route_view(&maze));
    Ok(())
}
