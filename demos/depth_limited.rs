//! Depth-limited search across the sample maze.
//!
//! Run: cargo run --bin depth-limited
//! Limits default to 4 and 8; override with `WAYSEEK_DLS_LIMITS=4,6,10`.

use wayseek_demos::{DemoConfig, dls_report};
use wayseek_maps::fixtures::sample_maze;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = DemoConfig::from_env()?;
    let maze = sample_maze()?;
    print!("{}", dls_report(&maze, &config.dls_limits));
    Ok(())
}
