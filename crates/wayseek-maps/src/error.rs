//! Errors raised while building search spaces.

use thiserror::Error;
use wayseek_core::Coord;

use crate::maze::Tile;

/// Malformed map data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("maze is empty")]
    Empty,

    #[error("maze row {row} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },

    #[error("maze contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Coord },

    #[error("maze has no {0} tile")]
    MissingTile(Tile),

    #[error("maze has a second {tile} tile at {second} (first at {first})")]
    DuplicateTile {
        tile: Tile,
        first: Coord,
        second: Coord,
    },
}
