//! Bidirectional breadth-first search.
//!
//! Two BFS frontiers grow from the source and from the target, one node
//! each per round, until they meet. Each side keeps its own visited set and
//! parent map, keyed by flat grid index.

use std::collections::VecDeque;

use gridpath_core::{Grid, Point, Result};

use crate::algorithm::{self, Algorithm};
use crate::{Neighbors, Trace};

/// One search frontier.
struct Side {
    queue: VecDeque<usize>,
    seen: Vec<bool>,
    depth: Vec<u32>,
    parent: Vec<Option<usize>>,
}

impl Side {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            seen: vec![false; len],
            depth: vec![0; len],
            parent: vec![None; len],
        }
    }

    fn root(&mut self, idx: usize) {
        self.seen[idx] = true;
        self.queue.push_back(idx);
    }

    fn head_depth(&self) -> Option<u32> {
        self.queue.front().map(|&i| self.depth[i])
    }

    /// Chain from `idx` back to this side's root, `idx` first.
    fn chain(&self, idx: usize) -> Vec<usize> {
        let mut out = vec![idx];
        let mut i = idx;
        while let Some(p) = self.parent[i] {
            out.push(p);
            i = p;
        }
        out
    }
}

/// Best meeting so far: `(grid index, source-to-target length)`.
type Meeting = Option<(usize, u32)>;

/// Search from both ends until the frontiers meet or either one empties.
///
/// The trace interleaves discoveries of both sides, each cell at most once.
/// On success the stitched path is written into `parent`, `distance` and
/// `visited`, so [`reconstruct_path`](crate::reconstruct_path) from `target`
/// returns it.
pub fn run(grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
    let (si, ti) = algorithm::prepare(grid, source, target)?;

    let mut trace = Trace::new();
    {
        let n = grid.at_mut(si);
        n.visited = true;
        n.distance = 0.0;
    }
    trace.push(source);
    if si == ti {
        return Ok(algorithm::finish(Algorithm::Bidirectional, grid, ti, trace));
    }

    let mut fwd = Side::new(grid.len());
    let mut bwd = Side::new(grid.len());
    let mut nb = Neighbors::new();
    fwd.root(si);
    // A walled target leaves the backward side empty from the start.
    if !grid.at(ti).is_wall() {
        bwd.root(ti);
    }

    let mut best: Meeting = None;
    let meeting = 'search: loop {
        for forward in [true, false] {
            let (Some(f), Some(b)) = (fwd.head_depth(), bwd.head_depth()) else {
                break 'search best;
            };
            // Any path not yet seen from both sides is longer than f + b.
            if best.is_some_and(|(_, len)| len <= f + b + 1) {
                break 'search best;
            }
            if forward {
                expand(grid, &mut fwd, &bwd, true, &mut nb, &mut trace, &mut best);
            } else {
                expand(grid, &mut bwd, &fwd, false, &mut nb, &mut trace, &mut best);
            }
        }
    };

    if let Some((meet, len)) = meeting {
        log::trace!("bidirectional: frontiers met at {} ({len} steps)", grid.point(meet));
        let mut path = fwd.chain(meet);
        path.reverse();
        path.extend(bwd.chain(meet).into_iter().skip(1));
        stitch(grid, &path);
        if !trace.contains(target) {
            trace.push(target);
        }
    }

    Ok(algorithm::finish(Algorithm::Bidirectional, grid, ti, trace))
}

/// Pop one node from `side` and discover its neighbours, recording any
/// cell the `other` side has already seen as a candidate meeting.
fn expand(
    grid: &mut Grid,
    side: &mut Side,
    other: &Side,
    forward: bool,
    nb: &mut Neighbors,
    trace: &mut Trace,
    best: &mut Meeting,
) {
    let Some(ci) = side.queue.pop_front() else {
        return;
    };
    let cp = grid.point(ci);
    let next = side.depth[ci] + 1;

    for &np in nb.walkable(grid, cp, false) {
        let Some(ni) = grid.idx(np) else {
            continue;
        };
        if side.seen[ni] {
            continue;
        }
        side.seen[ni] = true;
        side.depth[ni] = next;
        side.parent[ni] = Some(ci);
        side.queue.push_back(ni);

        let n = grid.at_mut(ni);
        if forward {
            n.parent = Some(cp);
            n.distance = f64::from(next);
        }
        if !n.visited {
            n.visited = true;
            trace.push(np);
        }

        if other.seen[ni] {
            let len = next + other.depth[ni];
            if best.is_none_or(|(_, l)| len < l) {
                *best = Some((ni, len));
            }
        }
    }
}

/// Write `path` (grid indices, source first) into the grid's search state.
fn stitch(grid: &mut Grid, path: &[usize]) {
    let mut prev: Option<Point> = None;
    for (step, &i) in path.iter().enumerate() {
        let p = grid.point(i);
        let n = grid.at_mut(i);
        n.parent = prev;
        n.distance = step as f64;
        n.visited = true;
        prev = Some(p);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::testutil::*;

    #[test]
    fn open_grid_path_matches_bfs() {
        let mut g = open_5x5();
        let path = solve(Algorithm::Bidirectional, &mut g);
        assert_eq!(path.len(), 9);
        assert_valid_path(&g, &path, false);
        assert_eq!(g.node(TARGET).unwrap().distance, 8.0);
    }

    #[test]
    fn frontiers_interleave() {
        let mut g = open_5x5();
        let trace = run(&mut g, SOURCE, TARGET).unwrap();
        assert_eq!(
            &trace.as_slice()[..5],
            &[
                SOURCE,
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(3, 4),
                Point::new(4, 3)
            ]
        );
        let unique: HashSet<_> = trace.iter().collect();
        assert_eq!(unique.len(), trace.len());
    }

    #[test]
    fn funnels_through_gap() {
        let mut g = wall_with_gap();
        let path = solve(Algorithm::Bidirectional, &mut g);
        assert_valid_path(&g, &path, false);
        assert_eq!(path.len(), 9);
        assert!(path.contains(&Point::new(2, 2)));
    }

    #[test]
    fn adjacent_endpoints() {
        let mut g = open_5x5();
        let t = Point::new(0, 1);
        run(&mut g, SOURCE, t).unwrap();
        assert_eq!(crate::reconstruct_path(&g, t).unwrap(), vec![SOURCE, t]);
    }

    #[test]
    fn same_source_and_target() {
        let mut g = open_5x5();
        let trace = run(&mut g, SOURCE, SOURCE).unwrap();
        assert_eq!(trace.as_slice(), &[SOURCE]);
        assert_eq!(crate::reconstruct_path(&g, SOURCE).unwrap(), vec![SOURCE]);
    }

    #[test]
    fn unreachable_target() {
        let mut g = enclosed_target();
        let trace = run(&mut g, SOURCE, TARGET).unwrap();
        assert!(!trace.contains(TARGET));
        assert!(!g.node(TARGET).unwrap().visited);
        assert_eq!(crate::reconstruct_path(&g, TARGET).unwrap(), vec![TARGET]);
    }

    #[test]
    fn walled_target() {
        let mut g = open_5x5();
        g.set_wall(TARGET).unwrap();
        let trace = run(&mut g, SOURCE, TARGET).unwrap();
        assert_eq!(trace.as_slice(), &[SOURCE]);
        assert!(!g.node(TARGET).unwrap().visited);
    }
}
