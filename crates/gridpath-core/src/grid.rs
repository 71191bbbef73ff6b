//! A fixed-size grid of [`Node`]s.
//!
//! [`Grid`] owns its nodes in a flat row-major `Vec`. Every point is keyed by
//! its flat index `row * cols + col`; searches use that key for their
//! auxiliary sets instead of comparing node references.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geom::Point;
use crate::node::{MAX_COST, Node, NodeKind};

/// A `rows × cols` grid with at most one start and at most one end cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    rows: i32,
    cols: i32,
    nodes: Vec<Node>,
}

impl Grid {
    /// Largest number of cells a grid may hold.
    pub const MAX_CELLS: usize = 1 << 22;

    /// Create a grid of empty cells. Negative sizes are clamped to zero.
    ///
    /// # Panics
    ///
    /// Panics if the grid would hold more than [`Grid::MAX_CELLS`] cells.
    /// Use [`Grid::try_new`] for sizes that come from user input.
    pub fn new(rows: i32, cols: i32) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a grid of empty cells, or [`Error::GridTooLarge`] when
    /// `rows * cols` exceeds [`Grid::MAX_CELLS`].
    pub fn try_new(rows: i32, cols: i32) -> Result<Self> {
        let len = Self::cell_count(rows, cols)?;
        let rows = rows.max(0);
        let cols = cols.max(0);
        let mut nodes = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(Node::new(Point::new(row, col)));
            }
        }
        Ok(Self { rows, cols, nodes })
    }

    fn cell_count(rows: i32, cols: i32) -> Result<usize> {
        (rows.max(0) as usize)
            .checked_mul(cols.max(0) as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(Error::GridTooLarge {
                rows,
                cols,
                limit: Self::MAX_CELLS,
            })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Flat index of `p`, or [`Error::OutOfBounds`].
    pub fn checked_idx(&self, p: Point) -> Result<usize> {
        self.idx(p).ok_or(Error::OutOfBounds {
            point: p,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    // -----------------------------------------------------------------------
    // Node access
    // -----------------------------------------------------------------------

    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.idx(p).map(move |i| &mut self.nodes[i])
    }

    /// Node at a flat index. Panics if `idx >= len()`.
    #[inline]
    pub fn at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Mutable node at a flat index. Panics if `idx >= len()`.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| !n.is_wall())
    }

    /// Number of non-wall cells.
    pub fn walkable_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_wall()).count()
    }

    // -----------------------------------------------------------------------
    // Layout editing
    // -----------------------------------------------------------------------

    /// Set the kind of the cell at `p`.
    ///
    /// Placing a start (or end) demotes any previous start (or end) to
    /// `Empty`. Leaving the `Weight` kind resets the cost to 1.
    pub fn set_kind(&mut self, p: Point, kind: NodeKind) -> Result<()> {
        let i = self.checked_idx(p)?;
        if matches!(kind, NodeKind::Start | NodeKind::End) {
            for n in self.nodes.iter_mut().filter(|n| n.kind == kind) {
                n.kind = NodeKind::Empty;
            }
        }
        let n = &mut self.nodes[i];
        n.kind = kind;
        if kind != NodeKind::Weight {
            n.cost = 1;
        }
        Ok(())
    }

    pub fn set_start(&mut self, p: Point) -> Result<()> {
        self.set_kind(p, NodeKind::Start)
    }

    pub fn set_end(&mut self, p: Point) -> Result<()> {
        self.set_kind(p, NodeKind::End)
    }

    pub fn set_wall(&mut self, p: Point) -> Result<()> {
        self.set_kind(p, NodeKind::Wall)
    }

    /// Turn `p` into a weighted cell entered at `cost` (`1..=MAX_COST`).
    pub fn set_weight(&mut self, p: Point, cost: u32) -> Result<()> {
        if !(1..=MAX_COST).contains(&cost) {
            return Err(Error::InvalidCost(cost));
        }
        self.set_kind(p, NodeKind::Weight)?;
        if let Some(n) = self.node_mut(p) {
            n.cost = cost;
        }
        Ok(())
    }

    /// Reset `p` to an empty cell.
    pub fn clear(&mut self, p: Point) -> Result<()> {
        self.set_kind(p, NodeKind::Empty)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for n in self.nodes.iter_mut().filter(|n| n.is_wall()) {
            n.kind = NodeKind::Empty;
        }
    }

    /// Remove every weight.
    pub fn clear_weights(&mut self) {
        for n in self.nodes.iter_mut().filter(|n| n.kind == NodeKind::Weight) {
            n.kind = NodeKind::Empty;
            n.cost = 1;
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.find(NodeKind::Start)
    }

    pub fn end(&self) -> Option<Point> {
        self.find(NodeKind::End)
    }

    /// The start and end cells, failing fast if either is missing.
    pub fn endpoints(&self) -> Result<(Point, Point)> {
        let start = self.start().ok_or(Error::MissingStart)?;
        let end = self.end().ok_or(Error::MissingEnd)?;
        Ok((start, end))
    }

    fn find(&self, kind: NodeKind) -> Option<Point> {
        self.nodes.iter().find(|n| n.kind == kind).map(|n| n.pos)
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Wipe distance, priority, visited, on-path and parent on every node.
    pub fn reset_search_state(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset_search();
        }
    }

    /// Whether no node carries search state.
    pub fn is_pristine(&self) -> bool {
        self.nodes.iter().all(Node::is_pristine)
    }

    /// Points marked visited, in row-major order.
    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().filter(|n| n.visited).map(|n| n.pos)
    }

    // -----------------------------------------------------------------------
    // ASCII maps
    // -----------------------------------------------------------------------

    /// Parse a map drawn with `.` (empty), `#` (wall), `S` (start), `E` (end)
    /// and `1`–`9` (cost of entering the cell; `1` is a plain empty cell).
    ///
    /// Blank lines and surrounding whitespace are ignored. Every row must
    /// have the same width.
    pub fn from_ascii(map: &str) -> Result<Grid> {
        let lines: Vec<(usize, &str)> = map
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        let Some(&(_, first)) = lines.first() else {
            return Ok(Grid::new(0, 0));
        };
        let cols = first.chars().count();
        let mut grid = Grid::try_new(
            i32::try_from(lines.len()).unwrap_or(i32::MAX),
            i32::try_from(cols).unwrap_or(i32::MAX),
        )?;

        for (row, &(line, text)) in lines.iter().enumerate() {
            let found = text.chars().count();
            if found != cols {
                return Err(Error::RaggedRow {
                    line,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in text.chars().enumerate() {
                let p = Point::new(row as i32, col as i32);
                match ch {
                    '.' | '1' => {}
                    '#' => grid.set_wall(p)?,
                    'S' => grid.set_start(p)?,
                    'E' => grid.set_end(p)?,
                    '2'..='9' => grid.set_weight(p, ch as u32 - '0' as u32)?,
                    _ => {
                        return Err(Error::Parse {
                            line,
                            column: col + 1,
                            found: ch,
                        });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Render the layout in the format accepted by [`Grid::from_ascii`].
    pub fn to_ascii(&self) -> String {
        self.render(Self::layout_glyph)
    }

    /// Render the layout with search results on top: `*` for cells on the
    /// path, `o` for visited cells. Start and end keep their glyphs.
    pub fn to_ascii_overlay(&self) -> String {
        self.render(|n| match n.kind {
            NodeKind::Start | NodeKind::End | NodeKind::Wall => n.kind.glyph(),
            _ if n.on_path => '*',
            _ if n.visited => 'o',
            _ => Self::layout_glyph(n),
        })
    }

    /// Costs edited outside `1..=MAX_COST` through [`Grid::node_mut`] are
    /// drawn clamped, so the output always parses.
    fn layout_glyph(n: &Node) -> char {
        match n.kind {
            NodeKind::Weight => {
                char::from_digit(n.cost.clamp(1, MAX_COST), 10).unwrap_or(NodeKind::Weight.glyph())
            }
            k => k.glyph(),
        }
    }

    fn render(&self, glyph: impl Fn(&Node) -> char) -> String {
        let mut out = String::with_capacity(self.nodes.len() + self.rows as usize);
        for row in self.nodes.chunks(self.cols.max(1) as usize) {
            out.extend(row.iter().map(&glyph));
            out.push('\n');
        }
        out
    }
}

/// Serialized form of a [`Grid`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: i32,
    cols: i32,
    nodes: Vec<Node>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let RawGrid { rows, cols, nodes } = raw;
        if rows < 0 || cols < 0 {
            return Err(Error::MalformedGrid(format!("negative size {rows}x{cols}")));
        }
        let len = Self::cell_count(rows, cols)?;
        if nodes.len() != len {
            return Err(Error::MalformedGrid(format!(
                "{rows}x{cols} grid needs {len} nodes, found {}",
                nodes.len()
            )));
        }

        let grid = Self { rows, cols, nodes };
        let (mut starts, mut ends) = (0, 0);
        for (i, n) in grid.nodes.iter().enumerate() {
            let expected = grid.point(i);
            if n.pos != expected {
                return Err(Error::MalformedGrid(format!(
                    "node {i} is at {}, expected {expected}",
                    n.pos
                )));
            }
            match n.kind {
                NodeKind::Start => starts += 1,
                NodeKind::End => ends += 1,
                NodeKind::Weight if !(1..=MAX_COST).contains(&n.cost) => {
                    return Err(Error::InvalidCost(n.cost));
                }
                _ => {}
            }
            if let Some(parent) = n.parent.filter(|&q| !grid.contains(q)) {
                return Err(Error::MalformedGrid(format!(
                    "parent {parent} of {} is out of bounds",
                    n.pos
                )));
            }
        }
        if starts > 1 || ends > 1 {
            return Err(Error::MalformedGrid(format!(
                "{starts} start and {ends} end cells, at most one of each allowed"
            )));
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::from_ascii(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::from_ascii("S#\n4E").unwrap();
        g.node_mut(Point::new(1, 0)).unwrap().visited = true;
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_ascii(), g.to_ascii());
        assert!(back.node(Point::new(1, 0)).unwrap().visited);
    }

    #[test]
    fn malformed_grids_are_rejected() {
        let short = serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"nodes":[]}"#);
        assert!(short.unwrap_err().to_string().contains("needs 9 nodes, found 0"));

        let mut json = serde_json::to_value(Grid::new(1, 2)).unwrap();
        json["nodes"][1]["pos"]["col"] = 0.into();
        let moved = serde_json::from_value::<Grid>(json).unwrap_err();
        assert!(moved.to_string().contains("node 1 is at (0, 0)"));

        let mut json = serde_json::to_value(Grid::new(1, 2)).unwrap();
        json["nodes"][0]["kind"] = "start".into();
        json["nodes"][1]["kind"] = "start".into();
        assert!(serde_json::from_value::<Grid>(json).is_err());

        let mut json = serde_json::to_value(Grid::new(1, 2)).unwrap();
        json["nodes"][0]["kind"] = "weight".into();
        json["nodes"][0]["cost"] = 12.into();
        assert!(serde_json::from_value::<Grid>(json).is_err());

        let mut json = serde_json::to_value(Grid::new(1, 2)).unwrap();
        json["nodes"][0]["parent"] = serde_json::json!({"row": 4, "col": 0});
        assert!(serde_json::from_value::<Grid>(json).is_err());
    }
}
