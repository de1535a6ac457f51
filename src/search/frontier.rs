//! Frontier disciplines for the shared traversal.
//!
//! The traversal loop is identical for every algorithm; what differs is
//! the order entries leave the frontier and when a cell counts as seen:
//!
//! | Discipline | Pop order | Marked seen | Neighbor push order |
//! |------------|-----------|-------------|---------------------|
//! | FIFO (BFS) | oldest | on discovery | declared |
//! | LIFO (DFS) | newest | on expansion | reversed |
//! | Priority (A*) | lowest f, then oldest | on expansion, g relaxed | declared |

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::core::GridCoord;

/// A queued cell with its path cost and priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub coord: GridCoord,
    /// Cost from start (edge count)
    pub g: u32,
    /// Priority (g + h for A*, unused otherwise)
    pub f: u32,
}

/// How a frontier treats discovery and relaxation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Discipline {
    Fifo,
    Lifo,
    Priority,
}

/// Container of discovered-but-not-expanded cells.
pub(crate) trait Frontier {
    /// Discovery and relaxation rules for this frontier
    const DISCIPLINE: Discipline;

    fn push(&mut self, entry: FrontierEntry);

    fn pop(&mut self) -> Option<FrontierEntry>;

    fn len(&self) -> usize;

    /// Queued cells in the order they would be popped
    fn positions(&self) -> Vec<GridCoord>;
}

/// FIFO queue (breadth-first)
#[derive(Debug, Default)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier for FifoFrontier {
    const DISCIPLINE: Discipline = Discipline::Fifo;

    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn positions(&self) -> Vec<GridCoord> {
        self.queue.iter().map(|e| e.coord).collect()
    }
}

/// Explicit stack (depth-first)
#[derive(Debug, Default)]
pub(crate) struct LifoFrontier {
    stack: Vec<FrontierEntry>,
}

impl Frontier for LifoFrontier {
    const DISCIPLINE: Discipline = Discipline::Lifo;

    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn positions(&self) -> Vec<GridCoord> {
        self.stack.iter().rev().map(|e| e.coord).collect()
    }
}

/// Heap node ordered by f, then insertion sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeapNode {
    entry: FrontierEntry,
    seq: u64,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal f pops FIFO
        other
            .entry
            .f
            .cmp(&self.entry.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue on f with FIFO tie-break (A*)
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<HeapNode>,
    next_seq: u64,
}

impl Frontier for PriorityFrontier {
    const DISCIPLINE: Discipline = Discipline::Priority;

    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(HeapNode {
            entry,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|n| n.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn positions(&self) -> Vec<GridCoord> {
        let mut nodes: Vec<HeapNode> = self.heap.iter().copied().collect();
        // Max-heap order of HeapNode is pop order
        nodes.sort_by(|a, b| b.cmp(a));
        nodes.into_iter().map(|n| n.entry.coord).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: i32, f: u32) -> FrontierEntry {
        FrontierEntry {
            coord: GridCoord::new(x, 0),
            g: 0,
            f,
        }
    }

    fn drain<F: Frontier>(mut frontier: F) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(e) = frontier.pop() {
            out.push(e.coord.x);
        }
        out
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = FifoFrontier::default();
        for x in 0..3 {
            frontier.push(entry(x, 0));
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(frontier), vec![0, 1, 2]);
    }

    #[test]
    fn test_lifo_order() {
        let mut frontier = LifoFrontier::default();
        for x in 0..3 {
            frontier.push(entry(x, 0));
        }
        assert_eq!(
            frontier.positions(),
            vec![
                GridCoord::new(2, 0),
                GridCoord::new(1, 0),
                GridCoord::new(0, 0)
            ]
        );
        assert_eq!(drain(frontier), vec![2, 1, 0]);
    }

    #[test]
    fn test_priority_order_with_fifo_ties() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(entry(0, 5));
        frontier.push(entry(1, 3));
        frontier.push(entry(2, 5));
        frontier.push(entry(3, 3));
        frontier.push(entry(4, 1));

        let expected = vec![4, 1, 3, 0, 2];
        let positions: Vec<i32> = frontier.positions().iter().map(|c| c.x).collect();
        assert_eq!(positions, expected);
        assert_eq!(drain(frontier), expected);
    }
}
