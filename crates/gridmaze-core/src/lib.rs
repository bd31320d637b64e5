//! **gridmaze-core** — maze grid model and geometry primitives.
//!
//! This crate provides the foundational types used across the *gridmaze*
//! workspace: integer geometry ([`Point`], [`Range`]) and the fixed
//! rectangular maze ([`MazeGrid`]) that the search crate explores.

pub mod geom;
pub mod maze;

pub use geom::{Point, Range};
pub use maze::{CellKind, MazeError, MazeGrid};
