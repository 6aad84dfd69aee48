//! Breadth-first and depth-first search on the sample graph.
//!
//! Run: cargo run --bin graph-search

use wayseek_demos::graph_report;
use wayseek_maps::fixtures::{GRAPH_GOAL, GRAPH_START, sample_graph};

fn main() {
    env_logger::init();
    let graph = sample_graph();
    print!("{}", graph_report(&graph, &GRAPH_START, &GRAPH_GOAL));
}
