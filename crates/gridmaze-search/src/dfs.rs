use gridmaze_core::Point;

use crate::DIRECTIONS;
use crate::searcher::Searcher;
use crate::traits::Traversal;

impl Searcher {
    /// Find a path from `from` to `to` with a depth-first search.
    ///
    /// The frontier is a LIFO stack, so the result is whichever path the
    /// stack order discovers first — not necessarily the shortest. Returns
    /// the full path including both endpoints, or an empty vector if the
    /// goal is unreachable. `from == to` returns the single-cell path with
    /// no expansion.
    pub fn dfs_path<M: Traversal>(&mut self, map: &M, from: Point, to: Point) -> Vec<Point> {
        if from == to {
            return vec![from];
        }
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return Vec::new();
        };

        // Bump generation to lazily invalidate all nodes.
        self.walk_generation = self.walk_generation.wrapping_add(1);
        let cur_gen = self.walk_generation;

        {
            let node = &mut self.walk_nodes[start_idx];
            node.parent = usize::MAX;
            node.discovered = cur_gen;
        }

        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        stack.push(start_idx);

        let mut found = false;
        while let Some(ci) = stack.pop() {
            if ci == goal_idx {
                found = true;
                break;
            }
            // A cell may be pushed more than once before it is expanded, so
            // the closed check on pop is mandatory.
            if self.walk_nodes[ci].expanded == cur_gen {
                continue;
            }
            self.walk_nodes[ci].expanded = cur_gen;
            let cp = self.point(ci);

            for d in DIRECTIONS {
                let np = cp + d;
                if !map.traversable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.walk_nodes[ni];
                if n.expanded == cur_gen {
                    continue;
                }
                if n.discovered != cur_gen {
                    // First discovery wins; later pushes keep the original
                    // predecessor.
                    n.discovered = cur_gen;
                    n.parent = ci;
                }
                stack.push(ni);
            }
        }
        self.stack = stack;

        if !found {
            log::debug!("dfs: no path from {} to {}", from, to);
            return Vec::new();
        }
        self.rebuild_path(goal_idx, |i| self.walk_nodes[i].parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{GOAL, START, assert_valid_path, demo, sealed};
    use gridmaze_core::Range;

    #[test]
    fn finds_the_stack_order_path() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        let path = sr.dfs_path(&maze, START, GOAL);
        assert_valid_path(&maze, &path, START, GOAL);
        // With the down, right, up, left push order the most recently
        // pushed traversable neighbor pops first, so the walk sweeps the
        // top row before winding down to the goal.
        assert_eq!(path.len() - 1, 29);
        let expected: Vec<Point> = [
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (6, 1),
            (7, 1),
            (8, 1),
            (8, 2),
            (8, 3),
            (8, 4),
            (8, 5),
            (7, 5),
            (6, 5),
            (5, 5),
            (4, 5),
            (3, 5),
            (2, 5),
            (1, 5),
            (1, 6),
            (1, 7),
            (1, 8),
            (1, 9),
            (2, 9),
            (3, 9),
            (4, 9),
            (5, 9),
            (6, 9),
            (7, 9),
            (8, 9),
        ]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn start_equals_goal() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        assert_eq!(sr.dfs_path(&maze, START, START), vec![START]);
    }

    #[test]
    fn sealed_goal_is_unreachable() {
        let maze = sealed();
        let mut sr = Searcher::new(maze.bounds());
        assert!(sr.dfs_path(&maze, Point::new(1, 1), Point::new(3, 3)).is_empty());
    }

    #[test]
    fn repeated_calls_reuse_caches() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        let first = sr.dfs_path(&maze, START, GOAL);
        let second = sr.dfs_path(&maze, START, GOAL);
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_endpoints() {
        let maze = demo();
        let mut sr = Searcher::new(maze.bounds());
        let outside = Point::new(-3, 40);
        assert!(sr.dfs_path(&maze, outside, GOAL).is_empty());
        assert!(sr.dfs_path(&maze, START, outside).is_empty());
        // Coincident endpoints short-circuit before any bounds check.
        assert_eq!(sr.dfs_path(&maze, outside, outside), vec![outside]);
    }

    #[test]
    fn empty_searcher_range() {
        let maze = demo();
        let mut sr = Searcher::new(Range::default());
        assert!(sr.dfs_path(&maze, START, GOAL).is_empty());
    }
}
