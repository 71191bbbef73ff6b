//! Dijkstra's single-source shortest path.

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::frontier::{OpenSet, TieBreak};
use crate::{Neighbors, Trace};

/// Settle nodes in order of increasing distance until `target` is settled or
/// every remaining node is unreachable.
///
/// Equal distances settle in row-major grid order. Entering a cell costs its
/// [`step_cost`](gridpath_core::Node::step_cost).
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;

    let mut trace = Trace::new();
    let mut open = OpenSet::new(grid.len(), TieBreak::ScanOrder);
    let mut nb = Neighbors::new();

    grid.at_mut(si).distance = 0.0;
    open.push(si, 0.0);

    while let Some(ci) = open.pop() {
        let cp = grid.point(ci);
        let current_d = {
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
            let tentative = current_d + f64::from(n.step_cost());
            if tentative < n.distance {
                n.distance = tentative;
                n.parent = Some(cp);
                open.push(ni, tentative);
            }
        }
    }

    Ok(algorithm::finish(Algorithm::Dijkstra, grid, ti, trace))
}
