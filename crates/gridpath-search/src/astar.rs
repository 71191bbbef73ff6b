//! A* search with the Manhattan heuristic.

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::distance::manhattan;
use crate::frontier::{OpenSet, TieBreak};
use crate::{Neighbors, Trace};

/// Compute the shortest weighted path from `source` to `target` using A*
/// with the Manhattan heuristic.
///
/// Cell costs are at least 1, so the heuristic never overestimates and the
/// path found is optimal. Nodes are closed (marked visited) and recorded in
/// the trace when removed from the open set; equal priorities are removed in
/// the order they were admitted.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;
    let h = |p: Point| f64::from(manhattan(p, target));

    let mut trace = Trace::new();
    let mut open = OpenSet::new(grid.len(), TieBreak::Insertion);
    let mut nb = Neighbors::new();

    {
        let n = grid.at_mut(si);
        n.distance = 0.0;
        n.priority = h(source);
        open.push(si, n.priority);
    }

    while let Some(ci) = open.pop() {
        let cp = grid.point(ci);
        let current_g = {
            let n = grid.at_mut(ci);
            n.visited = true;
            n.distance
        };
        trace.push(cp);
        if ci == ti {
            break;
        }

        for &np in nb.walkable(grid, cp, false) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let n = grid.at_mut(ni);
            if n.visited {
                continue;
            }
            let tentative_g = current_g + f64::from(n.step_cost());
            if tentative_g < n.distance {
                n.parent = Some(cp);
                n.distance = tentative_g;
                n.priority = tentative_g + h(np);
                open.push(ni, n.priority);
            }
        }
    }

    Ok(algorithm::finish(Algorithm::AStar, grid, ti, trace))
}
