//! Error type shared by the gridpath crates.

use crate::geom::Point;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when building a grid or calling a search.
///
/// An unreachable target is *not* an error: searches return their trace and
/// the caller checks whether the target was reached.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("point {point} is outside the {rows}x{cols} grid")]
    OutOfBounds { point: Point, rows: i32, cols: i32 },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no end cell")]
    MissingEnd,

    #[error("search source {0} is a wall")]
    Blocked(Point),

    #[error("weighted cell cost must be between 1 and 9, got {0}")]
    InvalidCost(u32),

    #[error("a {rows}x{cols} grid exceeds the limit of {limit} cells")]
    GridTooLarge { rows: i32, cols: i32, limit: usize },

    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    #[error("parent chain from {from} exceeds {limit} steps")]
    ParentCycle { from: Point, limit: usize },

    #[error("all-pairs search over {nodes} nodes exceeds the limit of {limit}")]
    TooLarge { nodes: usize, limit: usize },

    #[error("line {line}, column {column}: unexpected map character {found:?}")]
    Parse {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
