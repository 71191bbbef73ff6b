//! Path reconstruction from parent links.

use gridpath_core::{Error, Grid, Point, Result};

/// Walk `parent` links from `terminal` back to the node that has none.
///
/// The result is ordered source first, `terminal` last. A node that was never
/// reached yields just `[terminal]`. A chain longer than the number of cells
/// can only come from a cycle and is reported as [`Error::ParentCycle`].
pub fn reconstruct_path(grid: &Grid, terminal: Point) -> Result<Vec<Point>> {
    let mut idx = grid.checked_idx(terminal)?;
    let limit = grid.len();
    let mut path = vec![terminal];

    while let Some(p) = grid.at(idx).parent {
        if path.len() >= limit {
            return Err(Error::ParentCycle {
                from: terminal,
                limit,
            });
        }
        idx = grid.checked_idx(p)?;
        path.push(p);
    }

    path.reverse();
    Ok(path)
}

/// Like [`reconstruct_path`], and also sets `on_path` on every node of the
/// result.
pub fn mark_path(grid: &mut Grid, terminal: Point) -> Result<Vec<Point>> {
    let path = reconstruct_path(grid, terminal)?;
    for &p in &path {
        if let Some(n) = grid.node_mut(p) {
            n.on_path = true;
        }
    }
    Ok(path)
}

/// Total cost of walking `path`: the sum of the step costs of every cell
/// entered after the first.
pub fn path_cost(grid: &Grid, path: &[Point]) -> u64 {
    path.iter()
        .skip(1)
        .filter_map(|&p| grid.node(p))
        .map(|n| u64::from(n.step_cost()))
        .sum()
}
