//! Map generation for gridpath grids.
//!
//! [`MapGen`] pairs a [`Grid`] with a random number generator and offers a
//! few ways of filling it: uniform wall and weight scattering, and
//! recursive-division mazes. `Start` and `End` cells are never overwritten.

use gridpath_core::{Grid, MAX_COST, NodeKind, Point};
use rand::{Rng, RngExt};

/// Map generator operating on a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Turn each empty cell into a wall with probability `density`
    /// (clamped to 0.0–1.0).
    ///
    /// Returns the number of walls placed.
    pub fn scatter_walls(&mut self, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut placed = 0;
        for i in 0..self.grid.len() {
            if self.grid.at(i).kind != NodeKind::Empty {
                continue;
            }
            if self.rng.random::<f64>() < density {
                self.grid.at_mut(i).kind = NodeKind::Wall;
                placed += 1;
            }
        }
        log::debug!("mapgen: scattered {placed} walls");
        placed
    }

    /// Give each empty cell a random cost in `2..=max_cost` with
    /// probability `density`. `max_cost` is clamped to `2..=MAX_COST`.
    ///
    /// Returns the number of weighted cells.
    pub fn scatter_weights(&mut self, density: f64, max_cost: u32) -> usize {
        let density = density.clamp(0.0, 1.0);
        let max_cost = max_cost.clamp(2, MAX_COST);
        let mut placed = 0;
        for i in 0..self.grid.len() {
            if self.grid.at(i).kind != NodeKind::Empty {
                continue;
            }
            if self.rng.random::<f64>() < density {
                let cost = self.rng.random_range(2..=max_cost);
                let n = self.grid.at_mut(i);
                n.kind = NodeKind::Weight;
                n.cost = cost;
                placed += 1;
            }
        }
        log::debug!("mapgen: scattered {placed} weights up to {max_cost}");
        placed
    }

    /// Replace the current walls with a recursive-division maze.
    ///
    /// Walls are laid on odd rows and columns with one gap each on an even
    /// coordinate, so every cell with two even coordinates stays connected
    /// to every other. Weights under a new wall are lost.
    ///
    /// Returns the number of walls placed.
    pub fn recursive_division(&mut self) -> usize {
        self.grid.clear_walls();
        let mut placed = 0;
        let mut chambers = vec![(0, self.grid.rows() - 1, 0, self.grid.cols() - 1)];

        while let Some((r0, r1, c0, c1)) = chambers.pop() {
            let h = r1 - r0 + 1;
            let w = c1 - c0 + 1;
            if h < 3 || w < 3 {
                continue;
            }
            let horizontal = match h.cmp(&w) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => self.rng.random_bool(0.5),
            };

            if horizontal {
                let wall = r0 + 1 + 2 * self.rng.random_range(0..(h - 1) / 2);
                let gap = c0 + 2 * self.rng.random_range(0..=(w - 1) / 2);
                for c in c0..=c1 {
                    if c != gap && self.wall_at(Point::new(wall, c)) {
                        placed += 1;
                    }
                }
                chambers.push((r0, wall - 1, c0, c1));
                chambers.push((wall + 1, r1, c0, c1));
            } else {
                let wall = c0 + 1 + 2 * self.rng.random_range(0..(w - 1) / 2);
                let gap = r0 + 2 * self.rng.random_range(0..=(h - 1) / 2);
                for r in r0..=r1 {
                    if r != gap && self.wall_at(Point::new(r, wall)) {
                        placed += 1;
                    }
                }
                chambers.push((r0, r1, c0, wall - 1));
                chambers.push((r0, r1, wall + 1, c1));
            }
        }

        log::debug!("mapgen: recursive division placed {placed} walls");
        placed
    }

    /// Wall `p` unless it is an endpoint. Returns whether a wall was placed.
    fn wall_at(&mut self, p: Point) -> bool {
        let Some(n) = self.grid.node_mut(p) else {
            return false;
        };
        if matches!(n.kind, NodeKind::Start | NodeKind::End | NodeKind::Wall) {
            return false;
        }
        n.kind = NodeKind::Wall;
        n.cost = 1;
        true
    }
}
