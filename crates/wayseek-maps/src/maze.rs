//! Rectangular mazes parsed from ASCII art.
//!
//! Each line of the text is a row and each character a [`Tile`]:
//!
//! | Rune | Tile |
//! |---|---|
//! | `.` | [`Tile::Open`] |
//! | `#` | [`Tile::Blocked`] |
//! | `A` | [`Tile::Start`] |
//! | `B` | [`Tile::Goal`] |
//!
//! Every row must have the same width and the maze must hold exactly one
//! start and one goal.

use std::fmt;
use std::str::FromStr;

use log::debug;
use wayseek_core::{Bounds, Coord};
use wayseek_paths::Pather;

use crate::error::MapError;

/// A single maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Open,
    Blocked,
    Start,
    Goal,
}

impl Tile {
    /// The character used for this tile in maze text.
    pub const fn rune(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Blocked => '#',
            Tile::Start => 'A',
            Tile::Goal => 'B',
        }
    }

    /// The tile written as `ch`, if any.
    pub const fn from_rune(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Open),
            '#' => Some(Tile::Blocked),
            'A' => Some(Tile::Start),
            'B' => Some(Tile::Goal),
            _ => None,
        }
    }

    /// Whether a search may step onto this tile.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Blocked)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tile::Open => "open",
            Tile::Blocked => "blocked",
            Tile::Start => "start",
            Tile::Goal => "goal",
        })
    }
}

/// An immutable rectangular maze with one start and one goal.
///
/// With the `serde` feature a maze serializes as its text and deserializes
/// through [`Maze::parse`], so every deserialized maze upholds the same
/// invariants as a parsed one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Bounds,
    start: Coord,
    goal: Coord,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// Blank lines before the first row and after the last are ignored.
    /// Any other whitespace, including spaces at the start or end of a row,
    /// is an invalid rune.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s.lines().collect();
        let is_row = |l: &&str| !l.trim().is_empty();
        let (Some(first), Some(last)) =
            (lines.iter().position(is_row), lines.iter().rposition(is_row))
        else {
            return Err(MapError::Empty);
        };

        let mut tiles = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;
        let mut rows = 0;

        for (row, line) in lines[first..=last].iter().enumerate() {
            let row = row as i32;
            let mut col = 0;
            for ch in line.chars() {
                let pos = Coord::new(row, col);
                let tile = Tile::from_rune(ch).ok_or(MapError::InvalidRune { ch, pos })?;
                let slot = match tile {
                    Tile::Start => Some(&mut start),
                    Tile::Goal => Some(&mut goal),
                    Tile::Open | Tile::Blocked => None,
                };
                if let Some(slot) = slot {
                    if let Some(first) = *slot {
                        return Err(MapError::DuplicateTile {
                            tile,
                            first,
                            second: pos,
                        });
                    }
                    *slot = Some(pos);
                }
                tiles.push(tile);
                col += 1;
            }

            match width {
                None => width = Some(col),
                Some(expected) if expected != col => {
                    return Err(MapError::InconsistentWidth {
                        row,
                        expected,
                        found: col,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let start = start.ok_or(MapError::MissingTile(Tile::Start))?;
        let goal = goal.ok_or(MapError::MissingTile(Tile::Goal))?;
        let bounds = Bounds::with_size(rows, width.unwrap_or(0));
        debug!(
            "parsed {}x{} maze, start {start}, goal {goal}",
            bounds.rows(),
            bounds.cols()
        );

        Ok(Self {
            tiles,
            bounds,
            start,
            goal,
        })
    }

    /// The maze rectangle, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Location of the start tile.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Location of the goal tile.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Tile> {
        self.bounds.index(c).map(|i| self.tiles[i])
    }

    /// Whether `c` is inside the maze and not blocked.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Tile::is_passable)
    }

    /// Render the maze with `*` on every path cell that is not the start or
    /// the goal.
    pub fn render_path(&self, path: &[Coord]) -> String {
        let mut runes: Vec<char> = self.tiles.iter().map(|t| t.rune()).collect();
        for &c in path {
            if let Some(i) = self.bounds.index(c) {
                if self.tiles[i] == Tile::Open {
                    runes[i] = '*';
                }
            }
        }
        let cols = self.bounds.cols() as usize;
        runes
            .chunks(cols)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Four-way movement in up, down, left, right order onto passable tiles.
/// A coordinate outside the maze has no neighbors.
impl Pather<Coord> for Maze {
    fn neighbors(&self, node: &Coord, buf: &mut Vec<Coord>) {
        if !self.bounds.contains(*node) {
            return;
        }
        buf.extend(
            node.neighbors_4()
                .into_iter()
                .filter(|&n| self.is_passable(n)),
        );
    }
}

impl FromStr for Maze {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

impl TryFrom<String> for Maze {
    type Error = MapError;

    fn try_from(s: String) -> Result<Self, MapError> {
        Self::parse(&s)
    }
}

impl From<Maze> for String {
    fn from(m: Maze) -> String {
        m.to_string()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let json = serde_json::to_string(&Tile::Blocked).unwrap();
        assert_eq!(json, r#""Blocked""#);
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tile::Blocked);
    }

    #[test]
    fn maze_round_trip() {
        let m = Maze::parse("A#\n.B").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#""A#\n.B""#);
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn malformed_maze_is_rejected() {
        let err = serde_json::from_str::<Maze>(r#""A.\n..""#).unwrap_err();
        assert!(err.to_string().starts_with("maze has no goal tile"));

        let err = serde_json::from_str::<Maze>(r#""A.\n..B""#).unwrap_err();
        assert!(err.to_string().starts_with("maze row 1 is 3 cells wide"));

        // Only maze text is accepted, never raw fields.
        let fields = r#"{"tiles":["Start"],"bounds":{"min":{"row":0,"col":0},"max":{"row":2,"col":2}},"start":{"row":0,"col":0},"goal":{"row":1,"col":1}}"#;
        assert!(serde_json::from_str::<Maze>(fields).is_err());
    }
}
