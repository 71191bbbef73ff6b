//! Breadth-first search.
//!
//! Ignores weights; the path it finds has the fewest steps.

use std::collections::VecDeque;

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::{Neighbors, Trace};

/// Search from `source` until `target` is dequeued or the queue empties.
///
/// Nodes are marked visited, given their parent and recorded in the trace
/// when they are first discovered.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;

    let mut trace = Trace::new();
    let mut queue = VecDeque::new();
    let mut nb = Neighbors::new();

    {
        let n = grid.at_mut(si);
        n.visited = true;
        n.distance = 0.0;
    }
    trace.push(source);
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        if ci == ti {
            break;
        }
        let cp = grid.point(ci);
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
            trace.push(np);
            queue.push_back(ni);
        }
    }

    Ok(algorithm::finish(Algorithm::Bfs, grid, ti, trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;

    #[test]
    fn open_grid_path_is_manhattan() {
        let mut g = open_5x5();
        let path = solve(Algorithm::Bfs, &mut g);
        assert_eq!(path.len(), 9);
        assert_valid_path(&g, &path, false);
    }

    #[test]
    fn trace_is_discovery_order() {
        let mut g = open_5x5();
        let trace = run(&mut g, SOURCE, TARGET).unwrap();
        // Source first, then its neighbours down before right.
        assert_eq!(
            &trace.as_slice()[..3],
            &[SOURCE, Point::new(1, 0), Point::new(0, 1)]
        );
        // Target discovered last among distance-8 cells.
        assert_eq!(trace.last(), Some(TARGET));
        assert_eq!(trace.len(), 25);
    }

    #[test]
    fn funnels_through_gap() {
        let mut g = wall_with_gap();
        let path = solve(Algorithm::Bfs, &mut g);
        assert!(path.contains(&Point::new(2, 2)));
        assert_eq!(path.len(), 9);
        assert_valid_path(&g, &path, false);
    }

    #[test]
    fn ignores_weights() {
        let mut g = Grid::from_ascii("S9.\n...").unwrap();
        run(&mut g, Point::new(0, 0), Point::new(0, 2)).unwrap();
        let path = crate::reconstruct_path(&g, Point::new(0, 2)).unwrap();
        assert_eq!(path, vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]);
    }

    #[test]
    fn same_source_and_target() {
        let mut g = open_5x5();
        let trace = run(&mut g, SOURCE, SOURCE).unwrap();
        assert_eq!(trace.as_slice(), &[SOURCE]);
    }

    #[test]
    fn enclosed_target_is_never_visited() {
        let mut g = enclosed_target();
        let trace = run(&mut g, SOURCE, TARGET).unwrap();
        assert_eq!(trace.len(), 21);
        assert!(!trace.contains(TARGET));
        assert!(!g.node(TARGET).unwrap().visited);
        assert_eq!(crate::reconstruct_path(&g, TARGET).unwrap(), vec![TARGET]);
    }
}
