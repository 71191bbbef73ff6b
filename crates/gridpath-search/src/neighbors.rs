use gridpath_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating orthogonal (4-way) or all (8-way)
/// neighbors of a grid point, filtered by a predicate. The enumeration order
/// is fixed so that traces are reproducible.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the orthogonal neighbors of `p` in the order up, down, left,
    /// right, keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// Return 8-directional neighbors of `p` in row-major offset order,
    /// keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// In-bounds, non-wall neighbors of `p` on `grid`.
    pub fn walkable(&mut self, grid: &Grid, p: Point, diagonal: bool) -> &[Point] {
        let keep = |n: Point| grid.is_walkable(n);
        if diagonal {
            self.all(p, keep)
        } else {
            self.cardinal(p, keep)
        }
    }
}

/// In-bounds, non-wall neighbors of `p`.
///
/// Without `diagonal` this yields up to four points ordered up, down, left,
/// right; with it, up to eight in row-major offset order.
pub fn neighbors(grid: &Grid, p: Point, diagonal: bool) -> Vec<Point> {
    Neighbors::new().walkable(grid, p, diagonal).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_and_bounds() {
        let g = Grid::new(3, 3);
        assert_eq!(
            neighbors(&g, Point::new(1, 1), false),
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
        assert_eq!(
            neighbors(&g, Point::new(0, 0), false),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn walls_are_filtered() {
        let g = Grid::from_ascii(".#.\n#..\n...").unwrap();
        assert!(neighbors(&g, Point::new(0, 0), false).is_empty());
        assert_eq!(
            neighbors(&g, Point::new(0, 0), true),
            vec![Point::new(1, 1)]
        );
    }

    #[test]
    fn diagonal_yields_eight_in_open_space() {
        let g = Grid::new(3, 3);
        let n = neighbors(&g, Point::new(1, 1), true);
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Point::new(0, 0));
        assert_eq!(n[7], Point::new(2, 2));
        assert!(!n.contains(&Point::new(1, 1)));
    }

    #[test]
    fn buffer_is_reused() {
        let g = Grid::new(2, 2);
        let mut nb = Neighbors::new();
        assert_eq!(nb.walkable(&g, Point::new(0, 0), true).len(), 3);
        assert_eq!(nb.cardinal(Point::new(0, 0), |_| false).len(), 0);
    }
}
