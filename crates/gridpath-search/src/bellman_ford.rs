//! Bellman-Ford single-source shortest path.
//!
//! Relaxes every edge of the grid repeatedly instead of settling nodes one at
//! a time. Cell costs are always at least 1, so the negative-cycle check
//! after convergence never fires on a grid built through [`Grid`]'s API.

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::{Neighbors, Trace};

/// A directed move between adjacent walkable cells, priced at the cost of
/// entering `to`.
#[derive(Clone, Copy)]
struct Edge {
    from: usize,
    to: usize,
    cost: f64,
}

/// Every edge in row-major order of `from`, neighbours up, down, left, right.
fn edges(grid: &Grid) -> Vec<Edge> {
    let mut nb = Neighbors::new();
    let mut out = Vec::new();
    for from in 0..grid.len() {
        if grid.at(from).is_wall() {
            continue;
        }
        let p = grid.point(from);
        for &np in nb.walkable(grid, p, false) {
            if let Some(to) = grid.idx(np) {
                let cost = f64::from(grid.at(to).step_cost());
                out.push(Edge { from, to, cost });
            }
        }
    }
    out
}

/// One pass over every edge. Returns whether any distance improved.
fn relax(grid: &mut Grid, edges: &[Edge], trace: &mut Trace) -> bool {
    let mut changed = false;
    for e in edges {
        let d = grid.at(e.from).distance;
        if d.is_infinite() {
            continue;
        }
        let from = grid.point(e.from);
        let n = grid.at_mut(e.to);
        let candidate = d + e.cost;
        if candidate < n.distance {
            if n.distance.is_infinite() {
                trace.push(n.pos);
            }
            n.distance = candidate;
            n.parent = Some(from);
            changed = true;
        }
    }
    changed
}

/// Compute distances from `source` to every reachable cell.
///
/// A node enters the trace the first time it receives a finite distance.
/// After convergence every reached node is marked visited. If an extra pass
/// still improves a distance, the trace is flagged with
/// [`Trace::negative_cycle`] and its parent links must not be trusted.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;

    let mut trace = Trace::new();
    grid.at_mut(si).distance = 0.0;
    trace.push(source);

    if si == ti {
        grid.at_mut(si).visited = true;
        return Ok(algorithm::finish(Algorithm::BellmanFord, grid, ti, trace));
    }

    let edges = edges(grid);
    let passes = grid.walkable_count().saturating_sub(1);
    for pass in 0..passes {
        if !relax(grid, &edges, &mut trace) {
            log::trace!("bellman-ford: converged after {pass} passes");
            break;
        }
    }

    let still_relaxes = edges.iter().any(|e| {
        let d = grid.at(e.from).distance;
        d.is_finite() && d + e.cost < grid.at(e.to).distance
    });
    if still_relaxes {
        log::warn!("bellman-ford: negative cycle reachable from {source}");
        trace.flag_negative_cycle();
        return Ok(algorithm::finish(Algorithm::BellmanFord, grid, ti, trace));
    }

    for i in 0..grid.len() {
        let n = grid.at_mut(i);
        if n.distance.is_finite() {
            n.visited = true;
        }
    }

    Ok(algorithm::finish(Algorithm::BellmanFord, grid, ti, trace))
}
