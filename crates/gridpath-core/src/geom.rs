//! Geometry primitive: [`Point`].
//!
//! Grid cells are addressed by `(row, col)`. Row grows downward, column grows
//! to the right, matching how a grid is printed.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate. Also used as a direction (e.g. `Point::UP`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };
    pub const UP: Self = Self { row: -1, col: 0 };
    pub const DOWN: Self = Self { row: 1, col: 0 };
    pub const LEFT: Self = Self { row: 0, col: -1 };
    pub const RIGHT: Self = Self { row: 0, col: 1 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Component-wise sign, turning an offset into a unit direction.
    #[inline]
    pub const fn signum(self) -> Self {
        Self {
            row: self.row.signum(),
            col: self.col.signum(),
        }
    }

    /// Whether this direction moves along both axes.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.col != 0
    }

    /// Whether `other` is one king move away (orthogonal or diagonal).
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let d = other - self;
        d != Self::ZERO && d.row.abs() <= 1 && d.col.abs() <= 1
    }

    /// The four orthogonal neighbours in search order: up, down, left, right.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self + Self::UP,
            self + Self::DOWN,
            self + Self::LEFT,
            self + Self::RIGHT,
        ]
    }

    /// All eight neighbours in row-major offset order.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(-1, -1),
            self.shift(-1, 0),
            self.shift(-1, 1),
            self.shift(0, -1),
            self.shift(0, 1),
            self.shift(1, -1),
            self.shift(1, 0),
            self.shift(1, 1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(Point::new(-4, 9).signum(), Point::new(-1, 1));
    }

    #[test]
    fn neighbors_4_order_is_up_down_left_right() {
        let p = Point::new(2, 2);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(1, 2),
                Point::new(3, 2),
                Point::new(2, 1),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn neighbors_8_skips_self() {
        let p = Point::new(5, 5);
        let n = p.neighbors_8();
        assert!(!n.contains(&p));
        assert!(n.iter().all(|&q| p.is_adjacent(q)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 3), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 3), Point::new(1, 0)]);
    }
}
