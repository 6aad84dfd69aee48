use log::{debug, trace};

use crate::path::Path;
use crate::state::SearchState;
use crate::traits::{Node, Pather};

/// Depth-first search from `start` to `goal` with an explicit stack.
///
/// Unvisited neighbors are pushed in reverse pather order so that they pop
/// in forward order. Each pushed node is marked visited and assigned its
/// parent at push time, which decides who claims a node reachable from
/// several places. The goal test happens at pop time.
///
/// Finds *a* path when one exists, not necessarily the shortest. Returns an
/// empty path if `goal` is unreachable.
pub fn dfs<N: Node, P: Pather<N>>(pather: &P, start: &N, goal: &N) -> Path<N> {
    let mut state = SearchState::new(start);
    let mut frontier = vec![start.clone()];
    let mut nbuf = Vec::new();

    while let Some(current) = frontier.pop() {
        if current == *goal {
            let path = state.path_to(&current);
            debug!(
                "dfs: reached {goal:?} in {} moves ({} expanded, {} visited)",
                path.len() - 1,
                state.expanded,
                state.visited()
            );
            return path;
        }

        trace!("dfs: expanding {current:?}");
        state.expanded += 1;
        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..).rev() {
            if state.discover(&next, &current) {
                frontier.push(next);
            }
        }
    }

    debug!(
        "dfs: {goal:?} unreachable from {start:?} ({} expanded)",
        state.expanded
    );
    Path::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnPather, bfs};

    /// 0 -> [1, 2], 1 -> [3], 2 -> [4], 3 -> [5], 4 -> [5], 5 -> [].
    fn two_routes() -> FnPather<impl Fn(&u8, &mut Vec<u8>)> {
        FnPather(|n: &u8, buf: &mut Vec<u8>| {
            let adj: &[u8] = match n {
                0 => &[1, 2],
                1 => &[3],
                2 => &[4],
                3 | 4 => &[5],
                _ => &[],
            };
            buf.extend_from_slice(adj);
        })
    }

    #[test]
    fn explores_first_neighbor_first() {
        let path = dfs(&two_routes(), &0, &5);
        assert_eq!(path.as_slice(), &[0, 1, 3, 5]);
    }

    #[test]
    fn claims_at_push_time() {
        // 0 -> [1, 2], 1 -> [2, 3], 2 -> [3]. Node 2 is pushed by 0 before 1
        // is expanded, so 1 cannot re-parent it; 3 is claimed by 1.
        let g = FnPather(|n: &u8, buf: &mut Vec<u8>| {
            let adj: &[u8] = match n {
                0 => &[1, 2],
                1 => &[2, 3],
                2 => &[3],
                _ => &[],
            };
            buf.extend_from_slice(adj);
        });
        assert_eq!(dfs(&g, &0, &2).as_slice(), &[0, 2]);
        assert_eq!(dfs(&g, &0, &3).as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn may_return_longer_path_than_bfs() {
        // Long detour listed first: 0 -> [1, 5], 1 -> 2 -> 3 -> 9, 5 -> 9.
        let g = FnPather(|n: &u8, buf: &mut Vec<u8>| {
            let adj: &[u8] = match n {
                0 => &[1, 5],
                1 => &[2],
                2 => &[3],
                3 | 5 => &[9],
                _ => &[],
            };
            buf.extend_from_slice(adj);
        });
        let deep = dfs(&g, &0, &9);
        let wide = bfs(&g, &0, &9);
        assert!(deep.is_walk(&g, &0, &9));
        assert_eq!(deep.as_slice(), &[0, 1, 2, 3, 9]);
        assert_eq!(wide.as_slice(), &[0, 5, 9]);
    }

    #[test]
    fn unreachable_goal_is_empty() {
        assert!(!dfs(&two_routes(), &5, &0).is_found());
        assert!(dfs(&two_routes(), &5, &5).is_found());
    }

    #[test]
    fn cyclic_graph_terminates() {
        let ring = FnPather(|n: &u8, buf: &mut Vec<u8>| buf.push((n + 1) % 4));
        assert_eq!(dfs(&ring, &1, &0).as_slice(), &[1, 2, 3, 0]);
        assert!(!dfs(&ring, &1, &7).is_found());
    }
}
