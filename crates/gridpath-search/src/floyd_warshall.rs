//! Floyd–Warshall all-pairs shortest paths.
//!
//! Every non-wall cell becomes a matrix row, numbered in scan order. Memory
//! and time grow as `N²` and `N³` in the number of walkable cells, so callers
//! going through [`Solver`](crate::Solver) are capped by
//! [`SolverConfig::max_all_pairs_nodes`](crate::SolverConfig::max_all_pairs_nodes).

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::{Neighbors, Trace};

const NONE: u32 = u32::MAX;

/// Distance and successor matrices over all walkable cells of a grid.
#[derive(Debug, Clone)]
pub struct AllPairs {
    rows: i32,
    cols: i32,
    /// Grid index to matrix index, `NONE` for walls.
    index: Vec<u32>,
    points: Vec<Point>,
    dist: Vec<f64>,
    next: Vec<u32>,
}

impl AllPairs {
    /// Build the matrices for `grid`. Entering a cell costs its step cost.
    pub fn compute(grid: &Grid) -> Self {
        let mut index = vec![NONE; grid.len()];
        let mut points = Vec::new();
        for (i, node) in grid.iter().enumerate() {
            if !node.is_wall() {
                index[i] = points.len() as u32;
                points.push(node.pos);
            }
        }

        let n = points.len();
        let mut dist = vec![f64::INFINITY; n * n];
        let mut next = vec![NONE; n * n];
        let mut nb = Neighbors::new();

        for (a, &p) in points.iter().enumerate() {
            dist[a * n + a] = 0.0;
            next[a * n + a] = a as u32;
            for &q in nb.walkable(grid, p, false) {
                let Some(gi) = grid.idx(q) else {
                    continue;
                };
                let b = index[gi] as usize;
                dist[a * n + b] = f64::from(grid.at(gi).step_cost());
                next[a * n + b] = b as u32;
            }
        }

        for k in 0..n {
            for i in 0..n {
                let ik = dist[i * n + k];
                if ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let via = ik + dist[k * n + j];
                    if via < dist[i * n + j] {
                        dist[i * n + j] = via;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        log::debug!("floyd-warshall: {n} nodes indexed");
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            index,
            points,
            dist,
            next,
        }
    }

    /// Number of indexed (walkable) cells.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn slot(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= self.rows || p.col >= self.cols {
            return None;
        }
        let m = self.index[(p.row * self.cols + p.col) as usize];
        (m != NONE).then_some(m as usize)
    }

    /// Cost of the cheapest path from `from` to `to`; infinite when either
    /// point is not a walkable cell or no path exists.
    pub fn distance(&self, from: Point, to: Point) -> f64 {
        match (self.slot(from), self.slot(to)) {
            (Some(a), Some(b)) => self.dist[a * self.len() + b],
            _ => f64::INFINITY,
        }
    }

    /// Cheapest path from `from` to `to`, both ends included.
    pub fn path(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        let (a, b) = (self.slot(from)?, self.slot(to)?);
        let n = self.len();
        if self.dist[a * n + b] == f64::INFINITY {
            return None;
        }
        let mut out = vec![self.points[a]];
        let mut i = a;
        while i != b {
            i = self.next[i * n + b] as usize;
            out.push(self.points[i]);
        }
        Some(out)
    }
}

/// Compute all pairs, then extract `source` to `target`.
///
/// The trace is the extracted path, also written into `parent`, `distance`
/// and `visited`. It is empty when `target` cannot be reached.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (_, ti) = algorithm::prepare(grid, source, target)?;

    let pairs = AllPairs::compute(grid);
    let mut trace = Trace::new();

    if let Some(path) = pairs.path(source, target) {
        let mut prev: Option<Point> = None;
        let mut g = 0.0;
        for p in path {
            let Some(n) = grid.node_mut(p) else {
                continue;
            };
            if prev.is_some() {
                g += f64::from(n.step_cost());
            }
            n.parent = prev;
            n.distance = g;
            n.visited = true;
            trace.push(p);
            prev = Some(p);
        }
    }

    Ok(algorithm::finish(Algorithm::FloydWarshall, grid, ti, trace))
}
