use gridmaze_core::{MazeGrid, Point, Range};

/// Minimal search interface — answers bounds and per-cell passability.
pub trait Traversal {
    /// The rectangle a search may explore.
    fn bounds(&self) -> Range;

    /// Whether a search may step onto `p`.
    ///
    /// The start coordinate of a search is seeded into the frontier without
    /// this check, so a map may report its own start cell as non-traversable
    /// and the search will still begin there.
    fn traversable(&self, p: Point) -> bool;
}

impl Traversal for MazeGrid {
    fn bounds(&self) -> Range {
        self.bounds()
    }

    fn traversable(&self, p: Point) -> bool {
        self.is_traversable(p)
    }
}
