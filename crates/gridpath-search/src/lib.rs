//! Grid search algorithms with replayable visitation traces.
//!
//! Nine interchangeable searches share one calling convention: each module
//! exposes `run(grid, source, target) -> Result<Trace>`, mutates the grid's
//! per-node search state in place, and returns the order nodes were settled
//! or discovered.
//!
//! - **Unweighted**: [`bfs`], [`dfs`], [`bidirectional`]
//! - **Weighted single-source**: [`dijkstra`], [`bellman_ford`]
//! - **Heuristic**: [`astar`], [`greedy`], [`jps`] (8-directional)
//! - **All pairs**: [`floyd_warshall`] ([`AllPairs`])
//!
//! After a run, [`reconstruct_path`] follows parent links back from any
//! reached node. [`Solver`] wraps the whole sequence on a private copy of
//! the grid and returns a [`Solution`].
//!
//! | Algorithm | Weights | Shortest | Trace records |
//! |---|---|---|---|
//! | BFS | no | edges | discovery |
//! | DFS | no | no | pop |
//! | Dijkstra | yes | yes | settle |
//! | Bellman-Ford | yes | yes | first finite distance |
//! | A* | yes | yes | close |
//! | Greedy | no | no | close |
//! | JPS | no | octile | jump point close |
//! | Bidirectional | no | edges | discovery, both sides |
//! | Floyd–Warshall | yes | yes | the path |

mod algorithm;
pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;
mod distance;
pub mod floyd_warshall;
mod frontier;
pub mod greedy;
pub mod jps;
mod neighbors;
mod path;
mod solver;
mod trace;

#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use distance::{euclidean, manhattan};
pub use floyd_warshall::AllPairs;
pub use neighbors::{Neighbors, neighbors};
pub use path::{mark_path, path_cost, reconstruct_path};
pub use solver::{Solution, Solver, SolverConfig};
pub use trace::Trace;
