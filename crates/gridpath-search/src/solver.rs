//! Call-boundary wrapper that runs a search on a private copy of the grid.

use gridpath_core::{Error, Grid, Point, Result};

use crate::{Algorithm, Trace, mark_path, path_cost, reconstruct_path};

/// Tunables for [`Solver`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Largest number of walkable cells Floyd–Warshall will index.
    pub max_all_pairs_nodes: usize,
    /// Whether to set `on_path` on the cells of a found path.
    pub mark_path: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_all_pairs_nodes: 2_500,
            mark_path: true,
        }
    }
}

/// Everything one search produced.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub algorithm: Algorithm,
    pub trace: Trace,
    /// Source to target, empty when the target was not reached.
    pub path: Vec<Point>,
    pub reached: bool,
    /// Summed step costs along `path` (octile length for jump point
    /// search), `None` when the target was not reached.
    pub cost: Option<f64>,
    /// The searched grid with its per-node state.
    pub grid: Grid,
}

/// Runs algorithms without touching the caller's grid.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search a reset copy of `grid` from `source` to `target`.
    pub fn solve(
        &self,
        grid: &Grid,
        algorithm: Algorithm,
        source: Point,
        target: Point,
    ) -> Result<Solution> {
        let mut snapshot = grid.clone();
        snapshot.reset_search_state();

        if snapshot.is_empty() {
            log::debug!("{algorithm}: empty grid, nothing to search");
            return Ok(Solution {
                algorithm,
                trace: Trace::new(),
                path: Vec::new(),
                reached: false,
                cost: None,
                grid: snapshot,
            });
        }

        if algorithm == Algorithm::FloydWarshall {
            let nodes = snapshot.walkable_count();
            let limit = self.config.max_all_pairs_nodes;
            if nodes > limit {
                return Err(Error::TooLarge { nodes, limit });
            }
        }

        let trace = algorithm.run(&mut snapshot, source, target)?;
        let reached = snapshot.node(target).is_some_and(|n| n.visited);

        let path = match (reached, self.config.mark_path) {
            (false, _) => Vec::new(),
            (true, true) => mark_path(&mut snapshot, target)?,
            (true, false) => reconstruct_path(&snapshot, target)?,
        };

        let cost = if !reached {
            None
        } else if algorithm.uses_diagonals() {
            snapshot.node(target).map(|n| n.distance)
        } else {
            Some(path_cost(&snapshot, &path) as f64)
        };

        log::debug!(
            "{algorithm}: {} traced, path of {} cells, cost {cost:?}",
            trace.len(),
            path.len()
        );

        Ok(Solution {
            algorithm,
            trace,
            path,
            reached,
            cost,
            grid: snapshot,
        })
    }

    /// [`solve`](Self::solve) between the grid's `Start` and `End` cells.
    pub fn solve_endpoints(&self, grid: &Grid, algorithm: Algorithm) -> Result<Solution> {
        let (source, target) = grid.endpoints()?;
        self.solve(grid, algorithm, source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;

    #[test]
    fn caller_grid_is_untouched() {
        let g = wall_with_gap();
        let before = g.clone();
        let sol = Solver::default()
            .solve(&g, Algorithm::AStar, SOURCE, TARGET)
            .unwrap();
        assert_eq!(g, before);
        assert!(sol.reached);
        assert_eq!(sol.path.len(), 9);
        assert_eq!(sol.cost, Some(8.0));
        assert!(sol.path.iter().all(|&p| sol.grid.node(p).unwrap().on_path));
    }

    #[test]
    fn stale_state_in_the_input_is_ignored() {
        let mut g = open_5x5();
        Algorithm::Dfs.run(&mut g, SOURCE, TARGET).unwrap();
        assert!(!g.is_pristine());
        let sol = Solver::default()
            .solve(&g, Algorithm::Bfs, SOURCE, TARGET)
            .unwrap();
        assert_eq!(sol.path.len(), 9);
    }

    #[test]
    fn unreached_target() {
        let g = enclosed_target();
        for alg in Algorithm::ALL {
            let sol = Solver::default().solve(&g, alg, SOURCE, TARGET).unwrap();
            assert!(!sol.reached, "{alg}");
            assert!(sol.path.is_empty());
            assert_eq!(sol.cost, None);
        }
    }

    #[test]
    fn endpoints_from_the_grid() {
        let g = Grid::from_ascii("S9E\n...").unwrap();
        let solver = Solver::default();
        let sol = solver.solve_endpoints(&g, Algorithm::Dijkstra).unwrap();
        assert_eq!(sol.cost, Some(4.0));
        let sol = solver.solve_endpoints(&g, Algorithm::Bfs).unwrap();
        assert_eq!(sol.cost, Some(10.0));
        assert_eq!(
            solver.solve_endpoints(&Grid::new(2, 2), Algorithm::Bfs).unwrap_err(),
            Error::MissingStart
        );
    }

    #[test]
    fn jump_point_cost_is_octile() {
        let sol = Solver::default()
            .solve(&open_5x5(), Algorithm::JumpPoint, SOURCE, TARGET)
            .unwrap();
        let cost = sol.cost.unwrap();
        assert!((cost - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(sol.path.len(), 5);
    }

    #[test]
    fn all_pairs_limit() {
        let solver = Solver::new(SolverConfig {
            max_all_pairs_nodes: 10,
            ..SolverConfig::default()
        });
        assert_eq!(solver.config().max_all_pairs_nodes, 10);
        assert_eq!(
            solver
                .solve(&open_5x5(), Algorithm::FloydWarshall, SOURCE, TARGET)
                .unwrap_err(),
            Error::TooLarge {
                nodes: 25,
                limit: 10
            }
        );
        // Other algorithms are not limited.
        assert!(solver.solve(&open_5x5(), Algorithm::Bfs, SOURCE, TARGET).is_ok());
    }

    #[test]
    fn empty_grid_is_an_empty_solution() {
        let sol = Solver::default()
            .solve(&Grid::new(0, 0), Algorithm::Bfs, SOURCE, SOURCE)
            .unwrap();
        assert!(sol.trace.is_empty());
        assert!(!sol.reached);
    }

    #[test]
    fn path_marking_can_be_disabled() {
        let solver = Solver::new(SolverConfig {
            mark_path: false,
            ..SolverConfig::default()
        });
        let sol = solver.solve(&open_5x5(), Algorithm::Bfs, SOURCE, TARGET).unwrap();
        assert_eq!(sol.path.len(), 9);
        assert!(sol.grid.iter().all(|n| !n.on_path));
    }
}
