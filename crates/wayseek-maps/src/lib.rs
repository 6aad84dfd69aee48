//! Search spaces for wayseek: text-defined mazes, adjacency graphs, and the
//! fixture data the demos run on.
//!
//! Both [`Maze`] and [`Digraph`] implement [`wayseek_paths::Pather`], so any
//! search in `wayseek-paths` runs on them directly.

pub mod digraph;
pub mod error;
pub mod fixtures;
pub mod maze;

pub use digraph::Digraph;
pub use error::MapError;
pub use maze::{Maze, Tile};
