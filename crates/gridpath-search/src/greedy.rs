//! Greedy best-first search.
//!
//! Orders the frontier purely by Manhattan distance to the target and admits
//! each node at most once, so the first route that looks promising is the
//! one kept. Fast on open maps but not optimal.

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::distance::manhattan;
use crate::frontier::{OpenSet, TieBreak};
use crate::{Neighbors, Trace};

/// Search from `source` towards `target`, always expanding the open node
/// that is closest to the target.
///
/// A node's parent is fixed by whichever node discovered it first, even if a
/// cheaper route turns up later.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;
    let h = |p: Point| f64::from(manhattan(p, target));

    let mut trace = Trace::new();
    let mut open = OpenSet::new(grid.len(), TieBreak::Insertion);
    let mut discovered = vec![false; grid.len()];
    let mut nb = Neighbors::new();

    {
        let n = grid.at_mut(si);
        n.distance = 0.0;
        n.priority = h(source);
        open.push(si, n.priority);
    }
    discovered[si] = true;

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
            if discovered[ni] {
                continue;
            }
            discovered[ni] = true;
            let n = grid.at_mut(ni);
            n.parent = Some(cp);
            n.distance = current_g + f64::from(n.step_cost());
            n.priority = h(np);
            open.push(ni, n.priority);
        }
    }

    Ok(algorithm::finish(Algorithm::Greedy, grid, ti, trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_cost;
    use crate::testutil::*;

    #[test]
    fn heads_straight_for_the_target() {
        let mut g = Grid::new(7, 7);
        let s = Point::new(3, 0);
        let t = Point::new(3, 6);
        let trace = run(&mut g, s, t).unwrap();
        assert_eq!(trace.len(), 7);
        assert!(trace.iter().all(|p| p.row == 3));
    }

    #[test]
    fn ignores_weights_and_overpays() {
        let mut g = Grid::from_ascii(
            "S9E
             ...",
        )
        .unwrap();
        let mut d = g.clone();
        let (s, t) = g.endpoints().unwrap();
        run(&mut g, s, t).unwrap();
        crate::dijkstra::run(&mut d, s, t).unwrap();
        let greedy_cost = path_cost(&g, &crate::reconstruct_path(&g, t).unwrap());
        let best_cost = path_cost(&d, &crate::reconstruct_path(&d, t).unwrap());
        assert_eq!(greedy_cost, 10);
        assert_eq!(best_cost, 4);
        assert!(greedy_cost >= best_cost);
    }

    #[test]
    fn first_discovery_keeps_parent() {
        // (1, 0) is discovered from the source and keeps that parent.
        let mut g = wall_with_gap();
        let path = solve(Algorithm::Greedy, &mut g);
        assert_valid_path(&g, &path, false);
        assert!(path.contains(&Point::new(2, 2)));
        assert_eq!(g.node(Point::new(1, 0)).unwrap().parent, Some(SOURCE));
    }

    #[test]
    fn unreachable_target() {
        let mut g = enclosed_target();
        let trace = run(&mut g, SOURCE, TARGET).unwrap();
        assert_eq!(trace.len(), 21);
        assert!(!g.node(TARGET).unwrap().visited);
    }

    #[test]
    fn same_source_and_target() {
        let mut g = open_5x5();
        let trace = run(&mut g, SOURCE, SOURCE).unwrap();
        assert_eq!(trace.as_slice(), &[SOURCE]);
    }
}
