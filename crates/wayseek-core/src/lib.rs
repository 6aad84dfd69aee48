//! **wayseek-core** — node identity types shared across the *wayseek* crates.
//!
//! Search algorithms in `wayseek-paths` are generic over any hashable node.
//! This crate provides the two concrete node kinds used by the fixtures:
//! grid coordinates ([`Coord`]) and graph vertex names ([`Label`]), along
//! with the half-open [`Bounds`] rectangle used for grid bounds checks.

pub mod geom;
pub mod label;

pub use geom::{Bounds, BoundsIter, Coord};
pub use label::Label;
