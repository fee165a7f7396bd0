//! Priority frontier for Dijkstra, A* and greedy best-first search.
//!
//! Entries are ordered by `(priority, creation_order)`, so equal priorities
//! pop in insertion order and runs are deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use algoscope_kernel::model::Coord;

/// Ordering key: lower priority first, then earlier insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u32,
    pub creation_order: u64,
}

/// A frontier entry wrapping a cell with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    cell: Coord,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier with FIFO tie-breaking and high-water tracking.
///
/// Does not deduplicate: a cell pushed twice (after a cost improvement) pops
/// twice, and callers skip the stale copy.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_order: u64,
    high_water: usize,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `cell` with `priority`.
    pub fn push(&mut self, priority: u32, cell: Coord) {
        let key = FrontierKey {
            priority,
            creation_order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            cell,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the lowest-priority cell, earliest first among equals.
    pub fn pop(&mut self) -> Option<(u32, Coord)> {
        self.heap.pop().map(|e| (e.key.0.priority, e.cell))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier ever reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
