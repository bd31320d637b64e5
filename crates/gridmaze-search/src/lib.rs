//! Graph-search strategies for maze grids.
//!
//! This crate implements the three interchangeable policies used to route an
//! agent through a fixed 2-D maze:
//!
//! - **Depth-first** ([`Searcher::dfs_path`]) — LIFO frontier; returns the
//!   first path the stack order discovers, not necessarily the shortest
//! - **Breadth-first** ([`Searcher::bfs_path`]) — FIFO frontier; returns a
//!   path with the fewest edges
//! - **A\*** ([`Searcher::astar_path`]) — f-score priority frontier with the
//!   Manhattan heuristic; also returns a fewest-edges path
//!
//! All three share the same skeleton: a frontier seeded with the start cell,
//! a closed set guaranteeing at-most-once expansion, neighbor generation in
//! the fixed [`DIRECTIONS`] order, and a first-write-wins predecessor
//! relation from which the final path is rebuilt. An empty returned path
//! means the goal is unreachable.
//!
//! [`Searcher`] owns and reuses the internal caches so that repeated queries
//! incur zero allocations after warm-up. The free functions [`dfs`], [`bfs`]
//! and [`astar`] are one-shot conveniences over a fresh `Searcher`. Maps are
//! consumed through the [`Traversal`] trait, which `MazeGrid` implements.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod neighbors;
mod searcher;
mod strategy;
mod traits;

pub use distance::manhattan;
pub use neighbors::DIRECTIONS;
pub use searcher::Searcher;
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::Traversal;

use gridmaze_core::Point;

/// One-shot depth-first search from `from` to `to` on `map`.
pub fn dfs<M: Traversal>(map: &M, from: Point, to: Point) -> Vec<Point> {
    Searcher::new(map.bounds()).dfs_path(map, from, to)
}

/// One-shot breadth-first search from `from` to `to` on `map`.
pub fn bfs<M: Traversal>(map: &M, from: Point, to: Point) -> Vec<Point> {
    Searcher::new(map.bounds()).bfs_path(map, from, to)
}

/// One-shot A* search from `from` to `to` on `map`.
pub fn astar<M: Traversal>(map: &M, from: Point, to: Point) -> Vec<Point> {
    Searcher::new(map.bounds()).astar_path(map, from, to)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use gridmaze_core::{MazeGrid, Point};

    /// The application's fixed 10×11 maze: start (1, 1), goal (8, 9).
    pub(crate) const DEMO_MAZE: &str = "\
##########
#@.......#
#.##..##.#
#.#....#.#
#.#.##.#.#
#........#
#.#.##.#.#
#.#....#.#
#.##..##.#
#.......>#
##########";

    /// A maze whose goal is sealed off by walls.
    pub(crate) const SEALED_MAZE: &str = "\
######
#@...#
#.##.#
#.#>##
######";

    pub(crate) const START: Point = Point::new(1, 1);
    pub(crate) const GOAL: Point = Point::new(8, 9);

    pub(crate) fn demo() -> MazeGrid {
        MazeGrid::parse(DEMO_MAZE).unwrap()
    }

    pub(crate) fn sealed() -> MazeGrid {
        MazeGrid::parse(SEALED_MAZE).unwrap()
    }

    /// Assert `path` is a well-formed route from `from` to `to` on `maze`:
    /// correct endpoints, unit steps, traversable interior.
    pub(crate) fn assert_valid_path(maze: &MazeGrid, path: &[Point], from: Point, to: Point) {
        assert!(!path.is_empty(), "expected a path");
        assert_eq!(path[0], from, "path must begin at the start");
        assert_eq!(*path.last().unwrap(), to, "path must end at the goal");
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(
                d.x.abs() + d.y.abs(),
                1,
                "non-unit step {} -> {}",
                pair[0],
                pair[1]
            );
            assert!(
                maze.is_traversable(pair[1]),
                "step onto non-traversable cell {}",
                pair[1]
            );
        }
    }
}
