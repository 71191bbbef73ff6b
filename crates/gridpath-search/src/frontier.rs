//! Priority open set shared by Dijkstra, A*, Greedy and JPS.
//!
//! Membership is keyed by the node's flat grid index, never by reference.
//! Priority updates push a fresh heap entry; outdated entries are skipped
//! lazily on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// How equal priorities are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TieBreak {
    /// Earliest admission to the open set wins.
    Insertion,
    /// Lowest row-major grid index wins.
    ScanOrder,
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// priority first, then the smallest sequence number.
#[derive(Clone, Copy)]
struct NodeRef {
    idx: usize,
    priority: f64,
    seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) struct OpenSet {
    heap: BinaryHeap<NodeRef>,
    /// Sequence number of each current member, `None` when absent.
    member: Vec<Option<u64>>,
    priority: Vec<f64>,
    next_seq: u64,
    tie: TieBreak,
}

impl OpenSet {
    pub(crate) fn new(len: usize, tie: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            member: vec![None; len],
            priority: vec![f64::INFINITY; len],
            next_seq: 0,
            tie,
        }
    }

    /// Admit `idx`, or lower its priority if it is already a member. A
    /// member keeps its original admission slot for tie-breaking.
    pub(crate) fn push(&mut self, idx: usize, priority: f64) {
        let seq = match self.member[idx] {
            Some(seq) => seq,
            None => {
                let seq = match self.tie {
                    TieBreak::Insertion => {
                        self.next_seq += 1;
                        self.next_seq
                    }
                    TieBreak::ScanOrder => idx as u64,
                };
                self.member[idx] = Some(seq);
                seq
            }
        };
        self.priority[idx] = priority;
        self.heap.push(NodeRef { idx, priority, seq });
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.member[idx].is_some()
    }

    /// Remove and return the member with the smallest priority.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let i = entry.idx;
            // Skip stale entries.
            if self.member[i] != Some(entry.seq)
                || self.priority[i].to_bits() != entry.priority.to_bits()
            {
                continue;
            }
            self.member[i] = None;
            return Some(i);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut open = OpenSet::new(4, TieBreak::Insertion);
        open.push(0, 5.0);
        open.push(1, 2.0);
        open.push(2, 9.0);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn ties_follow_insertion_order() {
        let mut open = OpenSet::new(4, TieBreak::Insertion);
        open.push(3, 1.0);
        open.push(0, 1.0);
        open.push(2, 1.0);
        assert_eq!(open.pop(), Some(3));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(2));
    }

    #[test]
    fn ties_follow_scan_order() {
        let mut open = OpenSet::new(4, TieBreak::ScanOrder);
        open.push(3, 1.0);
        open.push(0, 1.0);
        open.push(2, 1.0);
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(3));
    }

    #[test]
    fn decrease_key_keeps_one_member() {
        let mut open = OpenSet::new(3, TieBreak::Insertion);
        open.push(0, 4.0);
        open.push(1, 3.0);
        open.push(0, 1.0);
        assert!(open.contains(0));
        assert_eq!(open.pop(), Some(0));
        assert!(!open.contains(0));
        assert_eq!(open.pop(), Some(1));
        // The outdated entry for 0 is discarded.
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn updated_member_keeps_admission_slot() {
        let mut open = OpenSet::new(3, TieBreak::Insertion);
        open.push(0, 5.0);
        open.push(1, 2.0);
        open.push(0, 2.0);
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(1));
    }
}
