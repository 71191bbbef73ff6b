use std::ops::Index;

use gridpath_core::Point;

/// The order in which a search settled or discovered nodes.
///
/// This is what an animation layer replays step by step. Each point
/// appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    order: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(default))]
    negative_cycle: bool,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.order.push(p);
    }

    pub(crate) fn flag_negative_cycle(&mut self) {
        self.negative_cycle = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.order.iter()
    }

    pub fn first(&self) -> Option<Point> {
        self.order.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.order.last().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.order.contains(&p)
    }

    /// Set when Bellman-Ford still relaxed an edge after convergence. Parent
    /// links from such a run are not a valid shortest-path tree.
    pub fn negative_cycle(&self) -> bool {
        self.negative_cycle
    }
}

impl From<Vec<Point>> for Trace {
    fn from(order: Vec<Point>) -> Self {
        Self {
            order,
            negative_cycle: false,
        }
    }
}

impl Index<usize> for Trace {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.order[i]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Trace {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn trace_round_trip() {
        let t = Trace::from(vec![Point::new(0, 0), Point::new(0, 1)]);
        let json = serde_json::to_string(&t).unwrap();
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
        assert!(!back.negative_cycle());
    }
}
