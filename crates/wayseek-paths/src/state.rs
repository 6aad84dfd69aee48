use std::collections::HashSet;

use crate::parents::{ParentMap, reconstruct};
use crate::path::Path;
use crate::traits::Node;

/// Per-search bookkeeping shared by BFS and DFS.
///
/// The frontier lives with the algorithm since its discipline (queue or
/// stack) is what distinguishes them.
pub(crate) struct SearchState<N> {
    visited: HashSet<N>,
    parents: ParentMap<N>,
    pub(crate) expanded: usize,
}

impl<N: Node> SearchState<N> {
    /// State with `start` visited and recorded as the origin.
    pub(crate) fn new(start: &N) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut parents = ParentMap::new();
        parents.insert(start.clone(), None);
        Self {
            visited,
            parents,
            expanded: 0,
        }
    }

    /// Mark `node` visited with `parent` as its predecessor.
    ///
    /// Returns `false` and changes nothing if `node` was already visited, so
    /// the first discoverer keeps the claim.
    pub(crate) fn discover(&mut self, node: &N, parent: &N) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.parents.insert(node.clone(), Some(parent.clone()));
        true
    }

    /// Number of nodes discovered so far, origin included.
    pub(crate) fn visited(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn path_to(&self, goal: &N) -> Path<N> {
        reconstruct(goal, &self.parents)
    }
}
