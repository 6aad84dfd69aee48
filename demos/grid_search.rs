//! Breadth-first and depth-first search across the sample maze.
//!
//! Run: cargo run --bin grid-search

use wayseek_demos::grid_report;
use wayseek_maps::fixtures::sample_maze;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let maze = sample_maze()?;
    print!("{}", grid_report(&maze));
    Ok(())
}
