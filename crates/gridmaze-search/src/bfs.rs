use gridmaze_core::Point;

use crate::DIRECTIONS;
use crate::searcher::Searcher;
use crate::traits::Traversal;

impl Searcher {
    /// Find a path from `from` to `to` with a breadth-first search.
    ///
    /// The frontier is a FIFO queue, so cells are expanded in nondecreasing
    /// distance from the start and the returned path has the minimum number
    /// of edges. Returns the full path including both endpoints, or an empty
    /// vector if the goal is unreachable. `from == to` returns the
    /// single-cell path with no expansion.
    pub fn bfs_path<M: Traversal>(&mut self, map: &M, from: Point, to: Point) -> Vec<Point> {
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

        let mut queue = std::mem::take(&mut self.queue);
        queue.clear();
        queue.push_back(start_idx);

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
            if ci == goal_idx {
                found = true;
                break;
            }
            // A cell may be enqueued more than once before it is expanded,
            // so the closed check on pop is mandatory.
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
                    // First discovery wins, which fixes each cell's
                    // predecessor at its shortest distance from the start.
                    n.discovered = cur_gen;
                    n.parent = ci;
                }
                queue.push_back(ni);
            }
        }
        self.queue = queue;

        if !found {
            log::debug!("bfs: no path from {} to {}", from, to);
            return Vec::new();
        }
        self.rebuild_path(goal_idx, |i| self.walk_nodes[i].parent)
    }
}
