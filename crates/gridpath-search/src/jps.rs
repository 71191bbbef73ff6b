//! Jump Point Search (JPS) on uniform-cost grids.
//!
//! JPS is an A* variant for 8-directional movement where every step costs
//! its Euclidean length. It "jumps" along straight and diagonal lines, only
//! adding nodes to the open list at *jump points*: the target, or positions
//! with forced neighbours. Cell weights are ignored.

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::distance::euclidean;
use crate::frontier::{OpenSet, TieBreak};
use crate::{Neighbors, Trace};

/// Compute a shortest 8-directional path from `source` to `target`.
///
/// The trace holds jump points in the order they were closed. On success the
/// parent chain of `target` is expanded into single steps, so
/// [`reconstruct_path`](crate::reconstruct_path) yields adjacent cells.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;

    let mut trace = Trace::new();
    let mut open = OpenSet::new(grid.len(), TieBreak::Insertion);
    let mut nb = Neighbors::new();
    let mut successors = Vec::with_capacity(8);

    {
        let n = grid.at_mut(si);
        n.distance = 0.0;
        n.priority = euclidean(source, target);
        open.push(si, n.priority);
    }

    let found = 'search: loop {
        let Some(ci) = open.pop() else {
            break 'search false;
        };
        let cp = grid.point(ci);
        let (current_g, parent) = {
            let n = grid.at_mut(ci);
            n.visited = true;
            (n.distance, n.parent)
        };
        trace.push(cp);
        if ci == ti {
            break 'search true;
        }

        // The source has no travel direction: try every neighbour.
        successors.clear();
        match parent {
            None => successors.extend_from_slice(nb.walkable(grid, cp, true)),
            Some(pp) => pruned_neighbors(grid, cp, pp, &mut successors),
        }

        for &next in &successors {
            let Some(jp) = jump(grid, next, cp, target) else {
                continue;
            };
            let Some(ji) = grid.idx(jp) else {
                continue;
            };
            let n = grid.at_mut(ji);
            if n.visited {
                continue;
            }
            let tentative_g = current_g + euclidean(cp, jp);
            if tentative_g < n.distance {
                n.parent = Some(cp);
                n.distance = tentative_g;
                n.priority = tentative_g + euclidean(jp, target);
                open.push(ji, n.priority);
            }
        }
    };

    if found {
        interpolate_parents(grid, ti);
    }

    Ok(algorithm::finish(Algorithm::JumpPoint, grid, ti, trace))
}

// ---------------------------------------------------------------------------
// JPS internals
// ---------------------------------------------------------------------------

/// `(blocker, forced)` pairs for travel direction `d` at `p`: `forced` is a
/// forced neighbour when `blocker` is not walkable and `forced` is.
fn forced_candidates(p: Point, d: Point) -> [(Point, Point); 2] {
    if d.is_diagonal() {
        [
            (p.shift(-d.row, 0), p.shift(-d.row, d.col)),
            (p.shift(0, -d.col), p.shift(d.row, -d.col)),
        ]
    } else if d.row == 0 {
        // Horizontal
        [
            (p.shift(1, 0), p.shift(1, d.col)),
            (p.shift(-1, 0), p.shift(-1, d.col)),
        ]
    } else {
        // Vertical
        [
            (p.shift(0, 1), p.shift(d.row, 1)),
            (p.shift(0, -1), p.shift(d.row, -1)),
        ]
    }
}

fn has_forced(grid: &Grid, p: Point, d: Point) -> bool {
    forced_candidates(p, d)
        .iter()
        .any(|&(blocker, forced)| !grid.is_walkable(blocker) && grid.is_walkable(forced))
}

/// Natural and forced neighbours of `p` when arriving from `parent`.
fn pruned_neighbors(grid: &Grid, p: Point, parent: Point, out: &mut Vec<Point>) {
    let d = (p - parent).signum();

    if d.is_diagonal() {
        for q in [p.shift(d.row, 0), p.shift(0, d.col), p + d] {
            if grid.is_walkable(q) {
                out.push(q);
            }
        }
    } else if grid.is_walkable(p + d) {
        out.push(p + d);
    }

    for (blocker, forced) in forced_candidates(p, d) {
        if !grid.is_walkable(blocker) && grid.is_walkable(forced) {
            out.push(forced);
        }
    }
}

/// Walk from `start` in the direction `start - from` until a jump point is
/// found or the walk leaves walkable space.
///
/// The walk is a loop, not recursion: diagonal travel probes the two
/// straight sub-directions at every step, and straight probes never branch.
/// Every loop advances towards the grid edge, which bounds it.
fn jump(grid: &Grid, start: Point, from: Point, target: Point) -> Option<Point> {
    let d = (start - from).signum();
    if !d.is_diagonal() {
        return jump_straight(grid, start, d, target);
    }

    let vertical = Point::new(d.row, 0);
    let horizontal = Point::new(0, d.col);
    let mut p = start;
    loop {
        if !grid.is_walkable(p) {
            return None;
        }
        if p == target || has_forced(grid, p, d) {
            return Some(p);
        }
        if jump_straight(grid, p + vertical, vertical, target).is_some()
            || jump_straight(grid, p + horizontal, horizontal, target).is_some()
        {
            return Some(p);
        }
        p = p + d;
    }
}

fn jump_straight(grid: &Grid, start: Point, d: Point, target: Point) -> Option<Point> {
    let mut p = start;
    loop {
        if !grid.is_walkable(p) {
            return None;
        }
        if p == target || has_forced(grid, p, d) {
            return Some(p);
        }
        p = p + d;
    }
}

/// Expand the jump-point chain ending at `target_idx` into single steps,
/// rewriting `parent` and `distance` on every cell in between.
fn interpolate_parents(grid: &mut Grid, target_idx: usize) {
    let mut jumps = vec![grid.point(target_idx)];
    let mut i = target_idx;
    for _ in 0..grid.len() {
        let Some(p) = grid.at(i).parent else {
            break;
        };
        let Some(pi) = grid.idx(p) else {
            break;
        };
        jumps.push(p);
        i = pi;
    }
    jumps.reverse();

    for w in jumps.windows(2) {
        let (mut c, b) = (w[0], w[1]);
        while c != b {
            let next = c + (b - c).signum();
            let reached = grid.node(c).map_or(f64::INFINITY, |n| n.distance);
            if let Some(n) = grid.node_mut(next) {
                n.parent = Some(c);
                n.distance = reached + euclidean(c, next);
            }
            c = next;
        }
    }
}
