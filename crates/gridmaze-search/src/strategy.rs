use std::fmt;
use std::str::FromStr;

use gridmaze_core::Point;

use crate::searcher::Searcher;
use crate::traits::Traversal;

/// The search policy used to route an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Depth-first: LIFO frontier, first discovered path.
    Dfs,
    /// Breadth-first: FIFO frontier, fewest edges.
    Bfs,
    /// A*: f-score priority frontier, fewest edges.
    Astar,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 3] = [Strategy::Dfs, Strategy::Bfs, Strategy::Astar];

    /// Run this strategy on `map` using `searcher`'s caches.
    pub fn search<M: Traversal>(
        self,
        searcher: &mut Searcher,
        map: &M,
        from: Point,
        to: Point,
    ) -> Vec<Point> {
        match self {
            Strategy::Dfs => searcher.dfs_path(map, from, to),
            Strategy::Bfs => searcher.bfs_path(map, from, to),
            Strategy::Astar => searcher.astar_path(map, from, to),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
            Strategy::Astar => "astar",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Strategy::Dfs),
            "bfs" => Ok(Strategy::Bfs),
            "astar" | "a*" => Ok(Strategy::Astar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d}, expected one of dfs, bfs, astar",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}
