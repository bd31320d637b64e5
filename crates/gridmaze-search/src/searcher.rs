use std::collections::VecDeque;

use gridmaze_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal nodes
// ---------------------------------------------------------------------------

/// Per-cell bookkeeping for the stack/queue searches (DFS, BFS).
#[derive(Clone)]
pub(crate) struct WalkNode {
    /// Index of the cell this one was first discovered from.
    pub(crate) parent: usize,
    /// Generation in which the cell was first discovered; the predecessor is
    /// only written then (first-write-wins).
    pub(crate) discovered: u32,
    /// Generation in which the cell was expanded (the closed set).
    pub(crate) expanded: u32,
}

impl Default for WalkNode {
    fn default() -> Self {
        Self {
            parent: usize::MAX,
            discovered: 0,
            expanded: 0,
        }
    }
}

/// Per-cell bookkeeping for the priority search (A*).
#[derive(Clone)]
pub(crate) struct CostNode {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for CostNode {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for the A* frontier.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on f so BinaryHeap (a max-heap) pops the lowest f first.
        // Among equal f, the higher g (deeper node) wins.
        other.f.cmp(&self.f).then(self.g.cmp(&other.g))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Central coordinator for maze searches.
///
/// `Searcher` owns the frontier buffers and per-cell node caches so that
/// repeated queries incur no allocations after the first use. A generation
/// counter is bumped at the start of every call, lazily invalidating all
/// state left by previous searches: each call behaves as if its bookkeeping
/// were freshly created.
pub struct Searcher {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // DFS / BFS caches
    pub(crate) walk_nodes: Vec<WalkNode>,
    pub(crate) walk_generation: u32,
    pub(crate) stack: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    // A* caches
    pub(crate) cost_nodes: Vec<CostNode>,
    pub(crate) cost_generation: u32,
}

impl Searcher {
    /// Create a new `Searcher` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            walk_nodes: vec![WalkNode::default(); len],
            walk_generation: 0,
            stack: Vec::new(),
            queue: VecDeque::new(),
            cost_nodes: vec![CostNode::default(); len],
            cost_generation: 0,
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    // -----------------------------------------------------------------------
    // Path reconstruction
    // -----------------------------------------------------------------------

    /// Rebuild the start-to-goal path implied by a predecessor relation.
    ///
    /// Walks parent indices backward from `goal` until the `usize::MAX`
    /// sentinel (the start has no predecessor), then reverses. A pure
    /// function of its inputs: rebuilding twice from the same relation
    /// yields the same path.
    pub(crate) fn rebuild_path(&self, goal: usize, parent_of: impl Fn(usize) -> usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = parent_of(ci);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_point_round_trip() {
        let sr = Searcher::new(Range::new(0, 0, 4, 3));
        for p in sr.range().iter() {
            let i = sr.idx(p).unwrap();
            assert_eq!(sr.point(i), p);
        }
        assert_eq!(sr.idx(Point::new(4, 0)), None);
        assert_eq!(sr.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn rebuild_path_is_idempotent() {
        let mut sr = Searcher::new(Range::new(0, 0, 3, 1));
        sr.walk_nodes[0].parent = usize::MAX;
        sr.walk_nodes[1].parent = 0;
        sr.walk_nodes[2].parent = 1;

        let first = sr.rebuild_path(2, |i| sr.walk_nodes[i].parent);
        let second = sr.rebuild_path(2, |i| sr.walk_nodes[i].parent);
        assert_eq!(
            first,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn rebuild_path_single_cell() {
        let sr = Searcher::new(Range::new(0, 0, 2, 2));
        let path = sr.rebuild_path(3, |_| usize::MAX);
        assert_eq!(path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn noderef_pops_lowest_f_then_highest_g() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 5, g: 1 });
        heap.push(NodeRef { idx: 1, f: 3, g: 1 });
        heap.push(NodeRef { idx: 2, f: 3, g: 3 });
        assert_eq!(heap.pop().unwrap().idx, 2);
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 0);
    }
}
