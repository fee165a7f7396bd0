//! Unweighted searches: breadth-first, depth-first, bidirectional BFS.
//!
//! Parents are recorded only when a cell is first discovered, so parent
//! maps stay acyclic.

use std::collections::VecDeque;

use algoscope_kernel::model::{Coord, Grid, GridTrace, StepKind};
use algoscope_kernel::tape::GridTape;

use super::{is_well_formed, neighbors, reconstruct_path, CellSet, ParentMap};

/// Breadth-first search. Finds a shortest path.
#[must_use]
pub fn bfs(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    let mut tape = GridTape::new("bfs", grid);
    if !is_well_formed(grid, start, end) {
        tape.not_found();
        return tape.finish();
    }
    let mut discovered = CellSet::new(grid);
    let mut parents = ParentMap::new(grid);
    let mut queue = VecDeque::from([start]);
    discovered.insert(start);
    while let Some(current) = queue.pop_front() {
        tape.record(StepKind::Visit, current, None);
        if current == end {
            tape.found(end, &reconstruct_path(&parents, end));
            return tape.finish();
        }
        for next in neighbors(grid, current) {
            if discovered.insert(next) {
                parents.set(next, current);
                tape.record(StepKind::Explore, next, None);
                queue.push_back(next);
            }
        }
    }
    tape.not_found();
    tape.finish()
}

/// Depth-first search with an explicit stack. The path it finds is valid
/// but not necessarily shortest.
#[must_use]
pub fn dfs(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    let mut tape = GridTape::new("dfs", grid);
    if !is_well_formed(grid, start, end) {
        tape.not_found();
        return tape.finish();
    }
    let mut discovered = CellSet::new(grid);
    let mut expanded = CellSet::new(grid);
    let mut parents = ParentMap::new(grid);
    let mut stack = vec![start];
    discovered.insert(start);
    while let Some(current) = stack.pop() {
        if !expanded.insert(current) {
            continue;
        }
        tape.record(StepKind::Visit, current, None);
        if current == end {
            tape.found(end, &reconstruct_path(&parents, end));
            return tape.finish();
        }
        for next in neighbors(grid, current) {
            if discovered.insert(next) {
                parents.set(next, current);
                tape.record(StepKind::Explore, next, None);
                stack.push(next);
            }
        }
    }
    tape.not_found();
    tape.finish()
}

/// One side of a bidirectional search.
struct Side {
    queue: VecDeque<Coord>,
    discovered: CellSet,
    parents: ParentMap,
    visit: StepKind,
    explore: StepKind,
}

impl Side {
    fn new(grid: &Grid, root: Coord, visit: StepKind, explore: StepKind) -> Self {
        let mut discovered = CellSet::new(grid);
        discovered.insert(root);
        Self {
            queue: VecDeque::from([root]),
            discovered,
            parents: ParentMap::new(grid),
            visit,
            explore,
        }
    }

    /// Expand one node. Returns it if the other side already discovered it.
    fn expand(&mut self, tape: &mut GridTape, grid: &Grid, other: &Side) -> Option<Coord> {
        let current = self.queue.pop_front()?;
        tape.record(self.visit, current, None);
        if other.discovered.contains(current) {
            return Some(current);
        }
        for next in neighbors(grid, current) {
            if self.discovered.insert(next) {
                self.parents.set(next, current);
                tape.record(self.explore, next, None);
                self.queue.push_back(next);
            }
        }
        None
    }
}

/// Bidirectional BFS: alternate one expansion from the start side and one
/// from the end side until a popped node was already discovered by the
/// opposite side. The `found` step carries the meeting cell.
#[must_use]
pub fn bidirectional(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    let mut tape = GridTape::new("bidirectional", grid);
    if !is_well_formed(grid, start, end) {
        tape.not_found();
        return tape.finish();
    }
    let mut from_start = Side::new(grid, start, StepKind::VisitStart, StepKind::ExploreStart);
    let mut from_end = Side::new(grid, end, StepKind::VisitEnd, StepKind::ExploreEnd);
    while !from_start.queue.is_empty() && !from_end.queue.is_empty() {
        let meeting = from_start
            .expand(&mut tape, grid, &from_end)
            .or_else(|| from_end.expand(&mut tape, grid, &from_start));
        if let Some(meet) = meeting {
            let mut path = reconstruct_path(&from_start.parents, meet);
            let mut tail = reconstruct_path(&from_end.parents, meet);
            tail.pop();
            tail.reverse();
            path.extend(tail);
            tape.found(meet, &path);
            return tape.finish();
        }
    }
    tape.not_found();
    tape.finish()
}
