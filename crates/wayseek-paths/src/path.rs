use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use crate::traits::{Node, Pather};

/// An ordered sequence of nodes from a start to a goal, both inclusive.
///
/// An empty path means no path was found. Dereferences to a slice of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path<N>(Vec<N>);

impl<N> Path<N> {
    /// The "no path found" value.
    #[inline]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.0.is_empty()
    }

    /// Number of moves (edges) along the path, or `None` when no path was found.
    #[inline]
    pub fn moves(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// The nodes of the path as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.0
    }
}

impl<N: Node> Path<N> {
    /// Whether this is a valid walk from `start` to `goal` under `pather`:
    /// it begins at `start`, ends at `goal`, and every consecutive pair is
    /// an edge reported by the pather. An empty path is never a walk.
    pub fn is_walk<P: Pather<N>>(&self, pather: &P, start: &N, goal: &N) -> bool {
        if self.0.first() != Some(start) || self.0.last() != Some(goal) {
            return false;
        }
        let mut nbuf = Vec::new();
        self.0.windows(2).all(|w| {
            nbuf.clear();
            pather.neighbors(&w[0], &mut nbuf);
            nbuf.contains(&w[1])
        })
    }

    /// Whether no node appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|n| seen.insert(n))
    }
}

impl<N> Default for Path<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N> From<Vec<N>> for Path<N> {
    #[inline]
    fn from(nodes: Vec<N>) -> Self {
        Self(nodes)
    }
}

impl<N> Deref for Path<N> {
    type Target = [N];

    #[inline]
    fn deref(&self) -> &[N] {
        &self.0
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Formats as `[n0, n1, ...]` using each node's `Display`.
impl<N: fmt::Display> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("]")
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wayseek_core::Coord;

    #[test]
    fn path_serializes_as_sequence() {
        let p = Path::from(vec![Coord::new(6, 0), Coord::new(6, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"row":6,"col":0},{"row":6,"col":1}]"#);
        let back: Path<Coord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
