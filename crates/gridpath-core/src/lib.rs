//! **gridpath-core** — the grid model shared by every gridpath search.
//!
//! This crate provides the coordinate type ([`Point`]), the per-cell
//! [`Node`] with its persistent layout (`kind`, `cost`) and its resettable
//! search state (`distance`, `priority`, `visited`, `on_path`, `parent`),
//! and the fixed-size [`Grid`] that owns them.
//!
//! Search state is wiped with [`Grid::reset_search_state`]; walls and
//! weights survive it.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::{Error, Result};
pub use geom::Point;
pub use grid::Grid;
pub use node::{MAX_COST, Node, NodeKind};
