//! Uninformed search algorithms over arbitrary node types.
//!
//! This crate provides the classic blind searches, generic over any node
//! that is hashable and comparable:
//!
//! - **Breadth-first search** shortest (fewest-edge) paths ([`bfs`])
//! - **Depth-first search** with an explicit stack ([`dfs`])
//! - **Depth-limited search**, recursive ([`dls`]) or with an explicit
//!   frame stack ([`dls_stack`]); both return identical paths
//! - **BFS distance maps** from one or more sources ([`bfs_distances`])
//!
//! Neighbor enumeration is injected through the [`Pather`] trait, so the
//! same algorithms run on named graph vertices and on grid coordinates.
//! Every search allocates its state per call and returns a [`Path`]; an
//! empty path means the goal was not reached.
//!
//! Searches log through the [`log`] facade: one `debug!` line per search
//! and a `trace!` line per expanded node.

mod bfs;
mod dfs;
mod dls;
mod parents;
mod path;
mod state;
mod traits;

pub use bfs::{bfs, bfs_distances};
pub use dfs::dfs;
pub use dls::{dls, dls_stack};
pub use parents::{ParentMap, reconstruct};
pub use path::Path;
pub use traits::{FnPather, Node, Pather};
