//! Priority-driven searches: Dijkstra, A*, greedy best-first, and jump
//! point search (delegated to A*).
//!
//! Every move costs 1 and the heuristic is the Manhattan distance to the
//! end, which is consistent on a 4-connected grid. Dijkstra and A* may
//! re-parent a discovered, unexpanded cell when its cost strictly improves;
//! greedy search keeps the first parent.

use algoscope_kernel::model::{Auxiliary, Coord, Grid, GridTrace, StepKind};
use algoscope_kernel::tape::GridTape;

use super::{is_well_formed, neighbors, reconstruct_path, CellSet, ParentMap, PriorityFrontier};

/// Flat cost table with `u32::MAX` as "unreached".
struct Costs {
    cols: usize,
    values: Vec<u32>,
}

impl Costs {
    fn new(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            values: vec![u32::MAX; grid.len()],
        }
    }

    fn get(&self, at: Coord) -> u32 {
        self.values[at.row * self.cols + at.col]
    }

    fn set(&mut self, at: Coord, cost: u32) {
        self.values[at.row * self.cols + at.col] = cost;
    }
}

/// Shared best-first loop. `priority(g, cell)` orders the frontier and
/// `aux(priority)` labels visit/explore steps.
fn cost_search(
    algorithm: &'static str,
    grid: &Grid,
    start: Coord,
    end: Coord,
    priority: impl Fn(u32, Coord) -> u32,
    aux: impl Fn(u32) -> Auxiliary,
) -> GridTrace {
    let mut tape = GridTape::new(algorithm, grid);
    if !is_well_formed(grid, start, end) {
        tape.not_found();
        return tape.finish();
    }
    let mut g = Costs::new(grid);
    let mut expanded = CellSet::new(grid);
    let mut parents = ParentMap::new(grid);
    let mut frontier = PriorityFrontier::new();
    g.set(start, 0);
    frontier.push(priority(0, start), start);
    while let Some((key, current)) = frontier.pop() {
        if !expanded.insert(current) {
            continue;
        }
        tape.record(StepKind::Visit, current, Some(aux(key)));
        if current == end {
            tape.found(end, &reconstruct_path(&parents, end));
            tracing::debug!(algorithm, high_water = frontier.high_water(), "path found");
            return tape.finish();
        }
        let through = g.get(current) + 1;
        for next in neighbors(grid, current) {
            if expanded.contains(next) || through >= g.get(next) {
                continue;
            }
            g.set(next, through);
            parents.set(next, current);
            let key = priority(through, next);
            tape.record(StepKind::Explore, next, Some(aux(key)));
            frontier.push(key, next);
        }
    }
    tape.not_found();
    tape.finish()
}

/// Dijkstra's algorithm with unit edge costs. Steps carry the tentative
/// distance.
#[must_use]
pub fn dijkstra(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    cost_search("dijkstra", grid, start, end, |g, _| g, Auxiliary::Distance)
}

/// A* with the Manhattan heuristic. Steps carry `f = g + h`.
#[must_use]
pub fn astar(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    cost_search(
        "astar",
        grid,
        start,
        end,
        |g, at| g + at.manhattan(end),
        Auxiliary::FScore,
    )
}

/// Jump point search. Delegates to [`astar`] and labels the trace `jps`.
#[must_use]
pub fn jps(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    astar(grid, start, end).relabel("jps")
}

/// Greedy best-first search ordered by the heuristic alone. Fast, not
/// optimal. Steps carry `h`.
#[must_use]
pub fn greedy(grid: &Grid, start: Coord, end: Coord) -> GridTrace {
    let mut tape = GridTape::new("greedy", grid);
    if !is_well_formed(grid, start, end) {
        tape.not_found();
        return tape.finish();
    }
    let mut discovered = CellSet::new(grid);
    let mut expanded = CellSet::new(grid);
    let mut parents = ParentMap::new(grid);
    let mut frontier = PriorityFrontier::new();
    discovered.insert(start);
    frontier.push(start.manhattan(end), start);
    while let Some((h, current)) = frontier.pop() {
        if !expanded.insert(current) {
            continue;
        }
        tape.record(StepKind::Visit, current, Some(Auxiliary::Heuristic(h)));
        if current == end {
            tape.found(end, &reconstruct_path(&parents, end));
            return tape.finish();
        }
        for next in neighbors(grid, current) {
            if discovered.insert(next) {
                parents.set(next, current);
                let h = next.manhattan(end);
                tape.record(StepKind::Explore, next, Some(Auxiliary::Heuristic(h)));
                frontier.push(h, next);
            }
        }
    }
    tape.not_found();
    tape.finish()
}
