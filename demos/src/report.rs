//! Text reports printed by the demo programs.

use wayseek_core::{Coord, Label};
use wayseek_maps::{Digraph, Maze, Tile};
use wayseek_paths::{Path, bfs, dfs, dls};

/// BFS and DFS from `start` to `goal` on a graph, one line each.
pub fn graph_report(graph: &Digraph, start: &Label, goal: &Label) -> String {
    let wide = bfs(graph, start, goal);
    let deep = dfs(graph, start, goal);
    format!(
        "BFS path from {start} to {goal}: {wide}\n\
         DFS path from {start} to {goal}: {deep}\n"
    )
}

/// BFS and DFS from the maze's start tile to its goal tile, with the
/// number of moves each takes.
pub fn grid_report(maze: &Maze) -> String {
    let (start, goal) = (maze.start(), maze.goal());
    let wide = bfs(maze, &start, &goal);
    let deep = dfs(maze, &start, &goal);
    format!(
        "{}\n{}",
        grid_section("BFS", &wide),
        grid_section("DFS", &deep)
    )
}

fn grid_section(name: &str, path: &Path<Coord>) -> String {
    let (from, to) = (Tile::Start.rune(), Tile::Goal.rune());
    let length = match path.moves() {
        Some(moves) => format!("{name} path length (moves): {moves}"),
        None => format!("No path found from {from} to {to}"),
    };
    format!("{name} path from {from} to {to}: {path}\n{length}\n")
}

/// Depth-limited search across the maze once per limit, in order.
pub fn dls_report(maze: &Maze, limits: &[usize]) -> String {
    let (start, goal) = (maze.start(), maze.goal());
    limits
        .iter()
        .map(|&limit| {
            let path = dls(maze, &start, &goal, limit);
            let length = match path.moves() {
                Some(moves) => format!("DLS path length (moves): {moves}"),
                None => format!("No path found within depth limit {limit}"),
            };
            format!("DLS path with limit = {limit}: {path}\n{length}\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The maze with its BFS route drawn in.
pub fn route_view(maze: &Maze) -> String {
    let path = bfs(maze, &maze.start(), &maze.goal());
    format!("{}\n", maze.render_path(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayseek_maps::fixtures::{GRAPH_GOAL, GRAPH_START, sample_graph, sample_maze};

    #[test]
    fn graph_output() {
        let out = graph_report(&sample_graph(), &GRAPH_START, &GRAPH_GOAL);
        assert_eq!(
            out,
            "BFS path from A to E: [A, B, C, E]\n\
             DFS path from A to E: [A, B, C, E]\n"
        );
    }

    #[test]
    fn graph_output_without_route() {
        let out = graph_report(&sample_graph(), &GRAPH_GOAL, &GRAPH_START);
        assert_eq!(
            out,
            "BFS path from E to A: []\n\
             DFS path from E to A: []\n"
        );
    }

    #[test]
    fn grid_output() {
        let out = grid_report(&sample_maze().unwrap());
        assert_eq!(
            out,
            "BFS path from A to B: [(6, 0), (6, 1), (6, 2), (5, 2), (4, 2), (4, 3), (3, 3)]\n\
             BFS path length (moves): 6\n\
             \n\
             DFS path from A to B: [(6, 0), (5, 0), (4, 0), (3, 0), (2, 0), (1, 0), (1, 1), \
             (1, 2), (1, 3), (2, 3), (3, 3)]\n\
             DFS path length (moves): 10\n"
        );
    }

    #[test]
    fn grid_output_without_route() {
        let walled = Maze::parse("A#\n#B").unwrap();
        assert_eq!(
            grid_report(&walled),
            "BFS path from A to B: []\nNo path found from A to B\n\n\
             DFS path from A to B: []\nNo path found from A to B\n"
        );
    }

    #[test]
    fn dls_output() {
        let out = dls_report(&sample_maze().unwrap(), &[4, 8]);
        assert_eq!(
            out,
            "DLS path with limit = 4: []\n\
             No path found within depth limit 4\n\
             \n\
             DLS path with limit = 8: [(6, 0), (6, 1), (6, 2), (5, 2), (4, 2), (4, 3), (3, 3)]\n\
             DLS path length (moves): 6\n"
        );
    }

    #[test]
    fn route_drawn_over_maze() {
        let out = route_view(&sample_maze().unwrap());
        assert_eq!(
            out,
            ".#####\n\
             ......\n\
             .##.##\n\
             .##B##\n\
             .#**##\n\
             .#*###\n\
             A**###\n"
        );
    }
}
