//! The fixed maze grid a search explores.
//!
//! A [`MazeGrid`] parses an ASCII map (or the equivalent integer rows) into
//! a rectangular grid of [`CellKind`] values and answers the passability
//! queries the search engine needs.

use crate::geom::{Point, Range};
use std::fmt;

/// What occupies a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Impassable wall.
    Wall,
    /// Open floor.
    Open,
    /// The start marker.
    Start,
    /// The goal marker.
    Goal,
}

impl CellKind {
    /// Map a map character to a cell kind (`#` `.` `@` `>`).
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Open),
            '@' => Some(Self::Start),
            '>' => Some(Self::Goal),
            _ => None,
        }
    }

    /// The map character for this kind.
    pub const fn rune(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => '@',
            Self::Goal => '>',
        }
    }

    /// Map a layout integer to a cell kind (0 = open, 1 = wall, 2 = start,
    /// 3 = goal).
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Open),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::Goal),
            _ => None,
        }
    }

    /// The layout integer for this kind.
    pub const fn value(self) -> i32 {
        match self {
            Self::Open => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::Goal => 3,
        }
    }
}

/// A rectangular maze of [`CellKind`] cells, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Vec<CellKind>,
    bounds: Range,
}

impl MazeGrid {
    /// Parse an ASCII map into a maze.
    ///
    /// Lines are separated by `'\n'` and must all have the same width.
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Only the characters `#` `.` `@` `>` are
    /// allowed.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        let mut cells = Vec::new();
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut w: i32 = -1;

        for ch in s.chars() {
            if ch == '\n' {
                if w < 0 {
                    w = x;
                } else if x != w {
                    return Err(MazeError::InconsistentSize { row: y });
                }
                x = 0;
                y += 1;
                continue;
            }
            let Some(kind) = CellKind::from_rune(ch) else {
                return Err(MazeError::InvalidRune {
                    ch,
                    pos: Point::new(x, y),
                });
            };
            cells.push(kind);
            x += 1;
        }
        if w < 0 {
            w = x;
        } else if x != w {
            return Err(MazeError::InconsistentSize { row: y });
        }

        let h = if cells.is_empty() { 0 } else { y + 1 };
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, w.max(0), h),
        })
    }

    /// Build a maze from the integer rows of the original layout format
    /// (0 = open, 1 = wall, 2 = start, 3 = goal).
    ///
    /// Every row must have the same length as the first.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, MazeError> {
        let w = rows.first().map_or(0, |r| r.len() as i32);
        let mut cells = Vec::with_capacity(rows.len() * w as usize);

        for (y, row) in rows.iter().enumerate() {
            if row.len() as i32 != w {
                return Err(MazeError::InconsistentSize { row: y as i32 });
            }
            for (x, &value) in row.iter().enumerate() {
                let Some(kind) = CellKind::from_value(value) else {
                    return Err(MazeError::InvalidValue {
                        value,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                cells.push(kind);
            }
        }

        let h = if cells.is_empty() { 0 } else { rows.len() as i32 };
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, w, h),
        })
    }

    /// The bounding range of the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the maze in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the maze in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the maze contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell kind at a point, or `None` if out of bounds.
    pub fn kind_at(&self, p: Point) -> Option<CellKind> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.bounds.width() + p.x) as usize])
    }

    /// Whether a search may step onto `p`: in bounds, and open floor or the
    /// goal marker.
    ///
    /// The start marker is not traversable by this check. A search begins at
    /// the start coordinate by seeding it into the frontier directly, and
    /// once that cell has been expanded it cannot be re-entered.
    pub fn is_traversable(&self, p: Point) -> bool {
        matches!(self.kind_at(p), Some(CellKind::Open | CellKind::Goal))
    }

    /// The first start-marked cell in row-major order, if any.
    pub fn start(&self) -> Option<Point> {
        self.iter()
            .find(|&(_, kind)| kind == CellKind::Start)
            .map(|(p, _)| p)
    }

    /// The first goal-marked cell in row-major order, if any.
    pub fn goal(&self) -> Option<Point> {
        self.iter()
            .find(|&(_, kind)| kind == CellKind::Goal)
            .map(|(p, _)| p)
    }

    /// Iterate over `(Point, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Errors that can occur when building a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A row has a different width from the first row.
    InconsistentSize { row: i32 },
    /// A character outside the map legend was found.
    InvalidRune { ch: char, pos: Point },
    /// An integer outside the layout legend was found.
    InvalidValue { value: i32, pos: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize { row } => {
                write!(f, "maze row {row} has a different width from the first row")
            }
            Self::InvalidRune { ch, pos } => {
                write!(
                    f,
                    "maze contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
            Self::InvalidValue { value, pos } => {
                write!(
                    f,
                    "maze contains invalid cell value {value} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for MazeError {}
