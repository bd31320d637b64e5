use std::collections::BinaryHeap;

use gridmaze_core::Point;

use crate::DIRECTIONS;
use crate::distance::manhattan;
use crate::searcher::{NodeRef, Searcher};
use crate::traits::Traversal;

impl Searcher {
    /// Find a shortest path from `from` to `to` using A*.
    ///
    /// Every step costs 1 and the Manhattan distance to the goal is the
    /// heuristic, which is admissible and consistent on a 4-connected
    /// uniform-cost grid, so the returned path has the minimum number of
    /// edges. The frontier pops the lowest f-score; among equal f-scores the
    /// higher g-score (the deeper node) wins. Returns the full path
    /// including both endpoints, or an empty vector if the goal is
    /// unreachable. `from == to` returns the single-cell path with no
    /// expansion.
    pub fn astar_path<M: Traversal>(&mut self, map: &M, from: Point, to: Point) -> Vec<Point> {
        if from == to {
            return vec![from];
        }
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return Vec::new();
        };

        // Bump generation to lazily invalidate all nodes.
        self.cost_generation = self.cost_generation.wrapping_add(1);
        let cur_gen = self.cost_generation;

        {
            let node = &mut self.cost_nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.cost_nodes[start_idx].f,
            g: 0,
        });

        let mut found = false;
        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip entries made stale by a later relaxation.
            if self.cost_nodes[ci].generation != cur_gen || !self.cost_nodes[ci].open {
                continue;
            }
            if ci == goal_idx {
                found = true;
                break;
            }

            // Move the cell to the closed set.
            self.cost_nodes[ci].open = false;
            let current_g = self.cost_nodes[ci].g;
            let cp = self.point(ci);

            for d in DIRECTIONS {
                let np = cp + d;
                if !map.traversable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.cost_nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Already in the closed set.
                        continue;
                    }
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    g: n.g,
                });
            }
        }

        if !found {
            log::debug!("astar: no path from {} to {}", from, to);
            return Vec::new();
        }
        self.rebuild_path(goal_idx, |i| self.cost_nodes[i].parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{GOAL, START, assert_valid_path, demo, sealed};

    #[test]
    fn finds_a_shortest_path() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        let path = sr.astar_path(&maze, START, GOAL);
        assert_valid_path(&maze, &path, START, GOAL);
        assert_eq!(path.len() - 1, 15);
    }

    #[test]
    fn matches_bfs_length() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        let astar = sr.astar_path(&maze, START, GOAL);
        let bfs = sr.bfs_path(&maze, START, GOAL);
        assert_eq!(astar.len(), bfs.len());
    }

    #[test]
    fn start_equals_goal() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        assert_eq!(sr.astar_path(&maze, START, START), vec![START]);
    }

    #[test]
    fn sealed_goal_is_unreachable() {
        let maze = sealed();
        let mut sr = Searcher::new(maze.bounds());
        assert!(
            sr.astar_path(&maze, Point::new(1, 1), Point::new(3, 3))
                .is_empty()
        );
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        let first = sr.astar_path(&maze, START, GOAL);
        let second = sr.astar_path(&maze, START, GOAL);
        assert_eq!(first, second);
    }
}
