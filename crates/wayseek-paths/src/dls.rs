//! Depth-limited search.
//!
//! Two drivers for the same search: [`dls`] recurses natively, [`dls_stack`]
//! keeps its frames on the heap. Both explore neighbors in pather order,
//! stop at the first route that reaches the goal, and only forbid nodes
//! already on the current route, so a node abandoned on backtrack can be
//! reached again through a sibling branch.

use std::collections::HashSet;

use log::{debug, trace};

use crate::path::Path;
use crate::traits::{Node, Pather};

/// Depth-limited search from `start` to `goal`, taking at most `limit` moves.
///
/// Returns the first path found in depth-first order, which need not be the
/// shortest, or an empty path if no route of at most `limit` edges avoids
/// revisiting its own nodes. With `limit == 0` only `start == goal` succeeds.
///
/// Recursion depth is bounded by `limit`; prefer [`dls_stack`] for limits in
/// the tens of thousands.
pub fn dls<N: Node, P: Pather<N>>(pather: &P, start: &N, goal: &N, limit: usize) -> Path<N> {
    let mut search = Recursive {
        pather,
        goal,
        on_path: HashSet::new(),
        expanded: 0,
    };
    let path = match search.recurse(start, limit) {
        Some(mut nodes) => {
            nodes.reverse();
            Path::from(nodes)
        }
        None => Path::empty(),
    };
    log_outcome("dls", &path, goal, limit, search.expanded);
    path
}

struct Recursive<'a, N, P> {
    pather: &'a P,
    goal: &'a N,
    on_path: HashSet<N>,
    expanded: usize,
}

impl<N: Node, P: Pather<N>> Recursive<'_, N, P> {
    /// Returns the route from `node` to the goal in reverse (goal first).
    fn recurse(&mut self, node: &N, remaining: usize) -> Option<Vec<N>> {
        self.on_path.insert(node.clone());

        if node == self.goal {
            return Some(vec![node.clone()]);
        }
        if remaining == 0 {
            self.on_path.remove(node);
            return None;
        }

        trace!("dls: expanding {node:?} with {remaining} moves left");
        self.expanded += 1;
        let mut nbuf = Vec::new();
        self.pather.neighbors(node, &mut nbuf);

        for next in &nbuf {
            if self.on_path.contains(next) {
                continue;
            }
            if let Some(mut found) = self.recurse(next, remaining - 1) {
                found.push(node.clone());
                return Some(found);
            }
        }

        self.on_path.remove(node);
        None
    }
}

/// A node being expanded by [`dls_stack`].
struct Frame<N> {
    node: N,
    remaining: usize,
    neighbors: Vec<N>,
    cursor: usize,
}

struct Stacked<'a, N, P> {
    pather: &'a P,
    goal: &'a N,
    on_path: HashSet<N>,
    frames: Vec<Frame<N>>,
    expanded: usize,
}

impl<N: Node, P: Pather<N>> Stacked<'_, N, P> {
    /// Step onto `node`. On the goal, returns the route held by the frames
    /// plus `node`. Out of moves, releases `node` at once. Otherwise pushes
    /// a frame for it.
    fn enter(&mut self, node: N, remaining: usize) -> Option<Path<N>> {
        self.on_path.insert(node.clone());

        if node == *self.goal {
            let mut nodes: Vec<N> = self.frames.iter().map(|f| f.node.clone()).collect();
            nodes.push(node);
            return Some(Path::from(nodes));
        }
        if remaining == 0 {
            self.on_path.remove(&node);
            return None;
        }

        trace!("dls_stack: expanding {node:?} with {remaining} moves left");
        self.expanded += 1;
        let mut neighbors = Vec::new();
        self.pather.neighbors(&node, &mut neighbors);
        self.frames.push(Frame {
            node,
            remaining,
            neighbors,
            cursor: 0,
        });
        None
    }

    /// Advance the top frame to its next neighbor that is not on the route,
    /// or pop the frame once it has none left. Returns `None` when no frames
    /// remain, otherwise the goal route if this step reached it.
    fn step(&mut self) -> Option<Option<Path<N>>> {
        let top = self.frames.last_mut()?;

        let mut next = None;
        while top.cursor < top.neighbors.len() {
            let candidate = &top.neighbors[top.cursor];
            top.cursor += 1;
            if !self.on_path.contains(candidate) {
                next = Some(candidate.clone());
                break;
            }
        }

        match next {
            Some(node) => {
                let remaining = top.remaining - 1;
                Some(self.enter(node, remaining))
            }
            None => {
                if let Some(done) = self.frames.pop() {
                    self.on_path.remove(&done.node);
                }
                Some(None)
            }
        }
    }
}

/// Depth-limited search driven by an explicit frame stack.
///
/// Returns exactly what [`dls`] returns for the same arguments, without
/// growing the call stack.
pub fn dls_stack<N: Node, P: Pather<N>>(
    pather: &P,
    start: &N,
    goal: &N,
    limit: usize,
) -> Path<N> {
    let mut search = Stacked {
        pather,
        goal,
        on_path: HashSet::new(),
        frames: Vec::new(),
        expanded: 0,
    };

    let mut found = search.enter(start.clone(), limit);
    while found.is_none() {
        match search.step() {
            Some(outcome) => found = outcome,
            None => break,
        }
    }

    let path = found.unwrap_or_default();
    log_outcome("dls_stack", &path, goal, limit, search.expanded);
    path
}

fn log_outcome<N: Node>(name: &str, path: &Path<N>, goal: &N, limit: usize, expanded: usize) {
    match path.moves() {
        Some(moves) => debug!(
            "{name}: reached {goal:?} in {moves} moves within limit {limit} ({expanded} expanded)"
        ),
        None => debug!("{name}: no route to {goal:?} within limit {limit} ({expanded} expanded)"),
    }
}
