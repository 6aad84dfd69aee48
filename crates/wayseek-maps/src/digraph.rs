//! Directed graphs over named vertices.

use std::collections::{BTreeSet, HashMap};

use wayseek_core::Label;
use wayseek_paths::Pather;

/// A directed graph stored as adjacency lists.
///
/// Each vertex keeps its successors in insertion order, which is the order
/// searches explore them in. Looking up a vertex with no entry yields no
/// successors rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Digraph {
    adj: HashMap<Label, Vec<Label>>,
}

impl Digraph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append edges `from -> to...`, creating `from` even when `to` is empty.
    pub fn add_edges<I>(&mut self, from: impl Into<Label>, to: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Label>,
    {
        self.adj
            .entry(from.into())
            .or_default()
            .extend(to.into_iter().map(Into::into));
        self
    }

    /// Builder form of [`add_edges`](Self::add_edges) for static names.
    pub fn with_edges(mut self, from: &'static str, to: &[&'static str]) -> Self {
        self.add_edges(from, to.iter().copied());
        self
    }

    /// Successors of `v` in insertion order. Empty if `v` has no entry.
    pub fn successors(&self, v: &str) -> &[Label] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `v` has an adjacency entry (possibly empty).
    pub fn contains(&self, v: &str) -> bool {
        self.adj.contains_key(v)
    }

    /// Number of vertices with an adjacency entry.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    /// Vertices that appear as a successor but have no entry of their own,
    /// sorted by name. Empty for a well-formed graph.
    pub fn dangling(&self) -> Vec<&Label> {
        self.adj
            .values()
            .flatten()
            .filter(|v| !self.adj.contains_key(*v))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Pather<Label> for Digraph {
    fn neighbors(&self, node: &Label, buf: &mut Vec<Label>) {
        buf.extend_from_slice(self.successors(node.as_str()));
    }
}

impl<L: Into<Label>> FromIterator<(L, Vec<L>)> for Digraph {
    fn from_iter<T: IntoIterator<Item = (L, Vec<L>)>>(iter: T) -> Self {
        let mut g = Digraph::new();
        for (from, to) in iter {
            g.add_edges(from, to);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayseek_paths::{bfs, dfs, dls};

    fn names(path: &[Label]) -> Vec<&str> {
        path.iter().map(Label::as_str).collect()
    }

    #[test]
    fn successors_keep_insertion_order() {
        let g = Digraph::new().with_edges("B", &["D", "C"]).with_edges("B", &["A"]);
        assert_eq!(names(g.successors("B")), ["D", "C", "A"]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn unknown_vertex_has_no_successors() {
        let g = Digraph::new().with_edges("A", &["B"]);
        assert!(g.successors("Z").is_empty());
        assert!(!g.contains("Z"));
        let mut buf = Vec::new();
        g.neighbors(&Label::new("Z"), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn leaves_can_be_listed_or_left_out() {
        let listed = Digraph::new().with_edges("A", &["B"]).with_edges("B", &[]);
        let unlisted = Digraph::new().with_edges("A", &["B"]);
        assert!(listed.dangling().is_empty());
        assert_eq!(unlisted.dangling(), [&Label::new("B")]);

        // Searches behave the same either way.
        let (a, b) = (Label::new("A"), Label::new("B"));
        assert_eq!(bfs(&listed, &a, &b), bfs(&unlisted, &a, &b));
        assert!(!bfs(&unlisted, &b, &a).is_found());
    }

    #[test]
    fn collects_from_pairs() {
        let g: Digraph = [
            (String::from("x"), vec![String::from("y")]),
            (String::from("y"), vec![]),
        ]
        .into_iter()
        .collect();
        assert_eq!(g.len(), 2);
        assert_eq!(names(g.successors("x")), ["y"]);
    }

    #[test]
    fn searches_on_a_cyclic_graph() {
        // A -> B -> C -> A, C -> D.
        let g = Digraph::new()
            .with_edges("A", &["B"])
            .with_edges("B", &["C"])
            .with_edges("C", &["A", "D"])
            .with_edges("D", &[]);
        let (a, d) = (Label::new("A"), Label::new("D"));
        for path in [bfs(&g, &a, &d), dfs(&g, &a, &d), dls(&g, &a, &d, 3)] {
            assert_eq!(names(&path), ["A", "B", "C", "D"]);
        }
        assert!(!dls(&g, &a, &d, 2).is_found());
    }
}
