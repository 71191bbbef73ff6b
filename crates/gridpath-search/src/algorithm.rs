use std::fmt;
use std::str::FromStr;

use gridpath_core::{Error, Grid, Point, Result};

use crate::Trace;
use crate::{astar, bellman_ford, bfs, bidirectional, dfs, dijkstra, floyd_warshall, greedy, jps};

/// The nine interchangeable searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    AStar,
    Greedy,
    JumpPoint,
    Bidirectional,
    FloydWarshall,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::AStar,
        Algorithm::Greedy,
        Algorithm::JumpPoint,
        Algorithm::Bidirectional,
        Algorithm::FloydWarshall,
    ];

    /// Kebab-case name, accepted back by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::AStar => "a-star",
            Algorithm::Greedy => "greedy",
            Algorithm::JumpPoint => "jump-point",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }

    /// Whether cell weights influence the result.
    pub const fn is_weighted(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra
                | Algorithm::BellmanFord
                | Algorithm::AStar
                | Algorithm::FloydWarshall
        )
    }

    /// Whether a found path is a minimum-cost path under the algorithm's own
    /// cost model (edge count for BFS and bidirectional, octile distance for
    /// JPS, cell weights otherwise).
    pub const fn guarantees_shortest(self) -> bool {
        !matches!(self, Algorithm::Dfs | Algorithm::Greedy)
    }

    /// Whether the search moves diagonally.
    pub const fn uses_diagonals(self) -> bool {
        matches!(self, Algorithm::JumpPoint)
    }

    /// Search `grid` from `source` to `target`.
    ///
    /// The grid's search state is wiped first; walls and weights are kept.
    pub fn run(self, grid: &mut Grid, source: Point, target: Point) -> Result<Trace> {
        match self {
            Algorithm::Bfs => bfs::run(grid, source, target),
            Algorithm::Dfs => dfs::run(grid, source, target),
            Algorithm::Dijkstra => dijkstra::run(grid, source, target),
            Algorithm::BellmanFord => bellman_ford::run(grid, source, target),
            Algorithm::AStar => astar::run(grid, source, target),
            Algorithm::Greedy => greedy::run(grid, source, target),
            Algorithm::JumpPoint => jps::run(grid, source, target),
            Algorithm::Bidirectional => bidirectional::run(grid, source, target),
            Algorithm::FloydWarshall => floyd_warshall::run(grid, source, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let alg = match key.as_str() {
            "bfs" | "breadth-first" => Algorithm::Bfs,
            "dfs" | "depth-first" => Algorithm::Dfs,
            "dijkstra" => Algorithm::Dijkstra,
            "bellman-ford" | "bellman" => Algorithm::BellmanFord,
            "a-star" | "astar" | "a*" => Algorithm::AStar,
            "greedy" | "greedy-best-first" | "best-first" => Algorithm::Greedy,
            "jump-point" | "jps" | "jump-point-search" => Algorithm::JumpPoint,
            "bidirectional" | "bidi" => Algorithm::Bidirectional,
            "floyd-warshall" | "floyd" => Algorithm::FloydWarshall,
            _ => return Err(UnknownAlgorithm(s.to_string())),
        };
        Ok(alg)
    }
}

// ---------------------------------------------------------------------------
// Shared entry/exit for every search
// ---------------------------------------------------------------------------

/// Validate the endpoints and wipe stale search state.
///
/// Returns the flat indices of `source` and `target`.
pub(crate) fn prepare(grid: &mut Grid, source: Point, target: Point) -> Result<(usize, usize)> {
    let si = grid.checked_idx(source)?;
    let ti = grid.checked_idx(target)?;
    if grid.at(si).is_wall() {
        return Err(Error::Blocked(source));
    }
    grid.reset_search_state();
    Ok((si, ti))
}

pub(crate) fn finish(alg: Algorithm, grid: &Grid, target_idx: usize, trace: Trace) -> Trace {
    log::debug!(
        "{alg}: recorded {} nodes, target {} {}",
        trace.len(),
        grid.at(target_idx).pos,
        if grid.at(target_idx).visited {
            "reached"
        } else {
            "unreached"
        }
    );
    trace
}
