//! Fixtures shared by the per-algorithm tests.

use gridpath_core::{Grid, Point};

use crate::{Algorithm, reconstruct_path};

pub(crate) const SOURCE: Point = Point::new(0, 0);
pub(crate) const TARGET: Point = Point::new(4, 4);

pub(crate) fn open_5x5() -> Grid {
    Grid::new(5, 5)
}

/// Solid wall in column 2 except for a gap at row 2.
pub(crate) fn wall_with_gap() -> Grid {
    Grid::from_ascii(
        "..#..
         ..#..
         .....
         ..#..
         ..#..",
    )
    .unwrap()
}

/// (4, 4) boxed in on all eight sides.
pub(crate) fn enclosed_target() -> Grid {
    Grid::from_ascii(
        ".....
         .....
         .....
         ...##
         ...#.",
    )
    .unwrap()
}

/// Run `alg` and return the reconstructed path to `TARGET`.
pub(crate) fn solve(alg: Algorithm, grid: &mut Grid) -> Vec<Point> {
    alg.run(grid, SOURCE, TARGET).unwrap();
    reconstruct_path(grid, TARGET).unwrap()
}

/// Source first, target last, every step to an adjacent walkable cell.
pub(crate) fn assert_valid_path(grid: &Grid, path: &[Point], diagonal: bool) {
    assert_eq!(path.first(), Some(&SOURCE));
    assert_eq!(path.last(), Some(&TARGET));
    for w in path.windows(2) {
        let d = w[1] - w[0];
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
        assert!(diagonal || !d.is_diagonal(), "{} -> {} is diagonal", w[0], w[1]);
        assert!(grid.is_walkable(w[1]));
    }
}
