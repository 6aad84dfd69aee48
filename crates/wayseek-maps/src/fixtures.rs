//! Fixed search spaces used by the demos and tests.
//!
//! Nothing here is global state: each function builds a fresh value for the
//! caller to pass into the searches.

use wayseek_core::Label;

use crate::digraph::Digraph;
use crate::error::MapError;
use crate::maze::Maze;

/// Start vertex for searches on [`sample_graph`].
pub const GRAPH_START: Label = Label::new("A");

/// Goal vertex for searches on [`sample_graph`].
pub const GRAPH_GOAL: Label = Label::new("E");

/// Seven rows by six columns. Start `A` at (6, 0), goal `B` at (3, 3).
pub const SAMPLE_MAZE: &str = "\
.#####
......
.##.##
.##B##
.#..##
.#.###
A..###";

/// Depth limits the depth-limited demo tries by default.
pub const SAMPLE_DLS_LIMITS: [usize; 2] = [4, 8];

/// `A -> B`, `B -> C, D`, `C -> E`, `D -> F`; `E` and `F` are leaves.
pub fn sample_graph() -> Digraph {
    Digraph::new()
        .with_edges("A", &["B"])
        .with_edges("B", &["C", "D"])
        .with_edges("C", &["E"])
        .with_edges("D", &["F"])
        .with_edges("E", &[])
        .with_edges("F", &[])
}

/// The maze in [`SAMPLE_MAZE`].
pub fn sample_maze() -> Result<Maze, MapError> {
    Maze::parse(SAMPLE_MAZE)
}
