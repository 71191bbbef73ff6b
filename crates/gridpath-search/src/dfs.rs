//! Depth-first search.
//!
//! Explores one branch as deep as it goes before backtracking. The path it
//! finds is whatever branch reached the target first, usually not the
//! shortest.

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::{Neighbors, Trace};

/// Search from `source` until `target` is popped or the stack empties.
///
/// Nodes are marked visited and given their parent when pushed, and
/// recorded in the trace when popped.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;

    let mut trace = Trace::new();
    let mut stack = vec![si];
    let mut nb = Neighbors::new();

    {
        let n = grid.at_mut(si);
        n.visited = true;
        n.distance = 0.0;
    }

    while let Some(ci) = stack.pop() {
        let cp = grid.point(ci);
        trace.push(cp);
        if ci == ti {
            break;
        }
        let next = grid.at(ci).distance + 1.0;

        for &np in nb.walkable(grid, cp, false) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let n = grid.at_mut(ni);
            if n.visited {
                continue;
            }
            n.visited = true;
            n.parent = Some(cp);
            n.distance = next;
            stack.push(ni);
        }
    }

    Ok(algorithm::finish(Algorithm::Dfs, grid, ti, trace))
}
