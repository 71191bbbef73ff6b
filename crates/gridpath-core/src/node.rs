//! Grid cells: [`NodeKind`] and [`Node`].

use crate::geom::Point;

/// Highest cost a weighted cell may carry, so that every cost has a
/// single-digit map glyph.
pub const MAX_COST: u32 = 9;

/// What a cell holds, as drawn by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    #[default]
    Empty,
    Start,
    End,
    Wall,
    Weight,
}

impl NodeKind {
    /// Map glyph used by [`Grid::to_ascii`](crate::Grid::to_ascii).
    /// Weighted cells are drawn with their cost digit instead.
    pub const fn glyph(self) -> char {
        match self {
            NodeKind::Empty => '.',
            NodeKind::Start => 'S',
            NodeKind::End => 'E',
            NodeKind::Wall => '#',
            NodeKind::Weight => 'w',
        }
    }
}

/// One grid cell.
///
/// `kind` and `cost` describe the map and survive between searches. The
/// remaining fields are per-search state, wiped by [`Node::reset_search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub kind: NodeKind,
    /// Cost of entering this cell, `1..=MAX_COST`; only differs from 1 for
    /// `Weight` cells.
    pub cost: u32,
    /// Tentative distance from the search source.
    #[cfg_attr(feature = "serde", serde(with = "unbounded"))]
    pub distance: f64,
    /// Ordering key for heuristic searches.
    #[cfg_attr(feature = "serde", serde(with = "unbounded"))]
    pub priority: f64,
    pub visited: bool,
    pub on_path: bool,
    /// The neighbour that discovered this node, one step closer to the source.
    pub parent: Option<Point>,
}

impl Node {
    /// A fresh empty cell at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            kind: NodeKind::Empty,
            cost: 1,
            distance: f64::INFINITY,
            priority: f64::INFINITY,
            visited: false,
            on_path: false,
            parent: None,
        }
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.kind == NodeKind::Wall
    }

    /// Cost paid when a search steps into this cell.
    #[inline]
    pub fn step_cost(&self) -> u32 {
        if self.kind == NodeKind::Weight {
            self.cost
        } else {
            1
        }
    }

    /// Whether the search state is untouched since the last reset.
    pub fn is_pristine(&self) -> bool {
        self.distance == f64::INFINITY
            && self.priority == f64::INFINITY
            && !self.visited
            && !self.on_path
            && self.parent.is_none()
    }

    /// Wipe the per-search fields, keeping `kind` and `cost`.
    pub fn reset_search(&mut self) {
        self.distance = f64::INFINITY;
        self.priority = f64::INFINITY;
        self.visited = false;
        self.on_path = false;
        self.parent = None;
    }
}

/// JSON has no infinity: unbounded distances travel as `null`.
#[cfg(feature = "serde")]
mod unbounded {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        v.is_finite().then_some(*v).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
