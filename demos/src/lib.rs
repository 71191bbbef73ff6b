//! Shared pieces of the `gridpath` demo: grid construction, config loading
//! and report formatting.

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use gridpath_core::{Grid, MAX_COST, Point};
use gridpath_mapgen::MapGen;
use gridpath_search::{Algorithm, Solution, SolverConfig, UnknownAlgorithm};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub const DEFAULT_SIZE: Size = Size { rows: 15, cols: 30 };

/// Grid dimensions written as `ROWSxCOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: i32,
    pub cols: i32,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, c) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
        let rows: i32 = r.trim().parse().map_err(|e| format!("rows: {e}"))?;
        let cols: i32 = c.trim().parse().map_err(|e| format!("cols: {e}"))?;
        if rows < 1 || cols < 1 {
            return Err(format!("grid must be at least 1x1, got {rows}x{cols}"));
        }
        let cells = (rows as usize).checked_mul(cols as usize);
        if cells.is_none_or(|n| n > Grid::MAX_CELLS) {
            return Err(format!(
                "a {rows}x{cols} grid exceeds the limit of {} cells",
                Grid::MAX_CELLS
            ));
        }
        Ok(Size { rows, cols })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// How to fill a generated grid.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// RNG seed; a random one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Wall probability per empty cell.
    pub walls: f64,
    /// Weight probability per empty cell.
    pub weights: f64,
    /// Highest weight cost, clamped to `2..=MAX_COST`.
    pub max_cost: u32,
    /// Lay a recursive-division maze before scattering.
    pub maze: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            seed: None,
            walls: 0.25,
            weights: 0.0,
            max_cost: MAX_COST,
            maze: false,
        }
    }
}

/// Build a random grid with `Start` in the top-left corner and `End` in the
/// bottom-right one. In maze mode `End` sits on the last cell with even
/// coordinates, which recursive division never walls off.
pub fn generate(size: Size, opts: &GenOptions) -> gridpath_core::Result<Grid> {
    let mut grid = Grid::try_new(size.rows, size.cols)?;
    let end = if opts.maze {
        Point::new((size.rows - 1) / 2 * 2, (size.cols - 1) / 2 * 2)
    } else {
        Point::new(size.rows - 1, size.cols - 1)
    };
    grid.set_start(Point::new(0, 0))?;
    grid.set_end(end)?;

    let seed = opts.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating {size} grid with seed {seed}");

    let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(seed));
    if opts.maze {
        mg.recursive_division();
    }
    if opts.walls > 0.0 {
        mg.scatter_walls(opts.walls);
    }
    if opts.weights > 0.0 {
        mg.scatter_weights(opts.weights, opts.max_cost);
    }
    Ok(mg.into_grid())
}

/// Read an ASCII map file.
pub fn load_grid(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(Grid::from_ascii(&text)?)
}

/// Read a JSON [`SolverConfig`]; missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SolverConfig, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// `all` or a single algorithm name.
pub fn parse_algorithms(s: &str) -> Result<Vec<Algorithm>, UnknownAlgorithm> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![s.parse()?])
}

/// One line per solution: name, trace length, path length and cost.
pub fn summary(sol: &Solution) -> String {
    match sol.cost {
        Some(cost) if sol.reached => format!(
            "{:<15} traced {:>5}  path {:>4}  cost {:.2}",
            sol.algorithm.name(),
            sol.trace.len(),
            sol.path.len(),
            cost
        ),
        _ => format!(
            "{:<15} traced {:>5}  target unreached",
            sol.algorithm.name(),
            sol.trace.len()
        ),
    }
}

/// Summary line followed by the grid overlay.
pub fn report(sol: &Solution) -> String {
    let mut out = summary(sol);
    out.push('\n');
    out.push_str(&sol.grid.to_ascii_overlay());
    out
}

#[cfg(test)]
mod tests {
    use gridpath_search::Solver;

    use super::*;

    #[test]
    fn size_parsing() {
        assert_eq!("21x41".parse::<Size>(), Ok(Size { rows: 21, cols: 41 }));
        assert_eq!(" 3 X 4 ".parse::<Size>(), Ok(Size { rows: 3, cols: 4 }));
        assert!("21".parse::<Size>().is_err());
        assert!("0x5".parse::<Size>().is_err());
        assert!("ax5".parse::<Size>().is_err());
        assert!("2048x2048".parse::<Size>().is_ok());
        let err = "50000x50000".parse::<Size>().unwrap_err();
        assert!(err.contains("exceeds the limit"), "{err}");
        assert!(
            generate(Size { rows: 50_000, cols: 50_000 }, &GenOptions::default()).is_err()
        );
        assert_eq!(DEFAULT_SIZE.to_string(), "15x30");
    }

    #[test]
    fn algorithm_lists() {
        assert_eq!(parse_algorithms("ALL").unwrap().len(), 9);
        assert_eq!(parse_algorithms("jps").unwrap(), vec![Algorithm::JumpPoint]);
        assert!(parse_algorithms("teleport").is_err());
    }

    #[test]
    fn generated_grid_is_seeded_and_has_endpoints() {
        let opts = GenOptions {
            seed: Some(9),
            weights: 0.2,
            ..GenOptions::default()
        };
        let a = generate(Size { rows: 10, cols: 12 }, &opts).unwrap();
        let b = generate(Size { rows: 10, cols: 12 }, &opts).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.endpoints().unwrap(), (Point::new(0, 0), Point::new(9, 11)));
    }

    #[test]
    fn maze_end_is_reachable() {
        let opts = GenOptions {
            seed: Some(3),
            walls: 0.0,
            maze: true,
            ..GenOptions::default()
        };
        let g = generate(Size { rows: 12, cols: 20 }, &opts).unwrap();
        assert_eq!(g.end(), Some(Point::new(10, 18)));
        let sol = Solver::default().solve_endpoints(&g, Algorithm::Bfs).unwrap();
        assert!(sol.reached);
    }

    #[test]
    fn report_shows_summary_and_overlay() {
        let g = Grid::from_ascii("S..\n.#.\n..E").unwrap();
        let sol = Solver::default().solve_endpoints(&g, Algorithm::Bfs).unwrap();
        let text = report(&sol);
        let mut lines = text.lines();
        let head = lines.next().unwrap();
        assert!(head.starts_with("bfs"));
        assert!(head.contains("path    5"));
        assert!(head.contains("cost 4.00"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn unreached_summary() {
        let g = Grid::from_ascii("S#\n#E").unwrap();
        let sol = Solver::default().solve_endpoints(&g, Algorithm::Dfs).unwrap();
        assert!(summary(&sol).ends_with("target unreached"));
    }
}
