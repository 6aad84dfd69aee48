use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::path::Path;
use crate::state::SearchState;
use crate::traits::{Node, Pather};

/// Breadth-first search from `start` to `goal`.
///
/// Nodes are expanded in non-decreasing distance from `start` through a
/// FIFO frontier, so the returned path has the fewest possible edges. A node
/// is marked visited and gets its parent when first discovered; the goal
/// test happens when a node is dequeued. Among equally short routes, the
/// one whose nodes were discovered first in pather order wins.
///
/// Returns an empty path if `goal` is unreachable.
pub fn bfs<N: Node, P: Pather<N>>(pather: &P, start: &N, goal: &N) -> Path<N> {
    let mut state = SearchState::new(start);
    let mut frontier = VecDeque::from([start.clone()]);
    let mut nbuf = Vec::new();

    while let Some(current) = frontier.pop_front() {
        if current == *goal {
            let path = state.path_to(&current);
            debug!(
                "bfs: reached {goal:?} in {} moves ({} expanded, {} visited)",
                path.len() - 1,
                state.expanded,
                state.visited()
            );
            return path;
        }

        trace!("bfs: expanding {current:?}");
        state.expanded += 1;
        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            if state.discover(&next, &current) {
                frontier.push_back(next);
            }
        }
    }

    debug!(
        "bfs: {goal:?} unreachable from {start:?} ({} expanded)",
        state.expanded
    );
    Path::empty()
}

/// Compute a multi-source breadth-first distance map.
///
/// Each edge costs 1 and every source starts at distance 0. Nodes farther
/// than `max_dist` from every source are left out. Returns the distance of
/// every reached node.
pub fn bfs_distances<N: Node, P: Pather<N>>(
    pather: &P,
    sources: &[N],
    max_dist: usize,
) -> HashMap<N, usize> {
    let mut dist: HashMap<N, usize> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    for src in sources {
        if dist.contains_key(src) {
            continue;
        }
        dist.insert(src.clone(), 0);
        queue.push_back(src.clone());
    }

    let mut nbuf = Vec::new();

    while let Some(current) = queue.pop_front() {
        let nd = dist[&current] + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            if dist.contains_key(&next) {
                continue;
            }
            dist.insert(next.clone(), nd);
            queue.push_back(next);
        }
    }

    dist
}
