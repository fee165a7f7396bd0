//! Grid traversal helpers shared by every pathfinder.

use algoscope_kernel::model::{Coord, Grid};

/// Orthogonal neighbour offsets in emission order: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// In-bounds, non-wall orthogonal neighbours of `at`, in up/down/left/right
/// order. Callers filter their own visited sets.
#[must_use]
pub fn neighbors(grid: &Grid, at: Coord) -> Vec<Coord> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| {
            let row = at.row.checked_add_signed(dr)?;
            let col = at.col.checked_add_signed(dc)?;
            let next = Coord::new(row, col);
            grid.is_open(next).then_some(next)
        })
        .collect()
}

/// Parent links keyed by flattened cell index.
#[derive(Debug, Clone)]
pub struct ParentMap {
    cols: usize,
    parents: Vec<Option<Coord>>,
}

impl ParentMap {
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            parents: vec![None; grid.len()],
        }
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    pub fn set(&mut self, child: Coord, parent: Coord) {
        let i = self.index(child);
        self.parents[i] = Some(parent);
    }

    #[must_use]
    pub fn get(&self, child: Coord) -> Option<Coord> {
        self.parents.get(self.index(child)).copied().flatten()
    }
}

/// Walk parent links from `node` back to the root; returns root→node.
///
/// The walk takes at most one step per grid cell.
#[must_use]
pub fn reconstruct_path(parents: &ParentMap, node: Coord) -> Vec<Coord> {
    let mut path = vec![node];
    let mut current = node;
    for _ in 0..parents.parents.len() {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Flat visited/discovered flags over a grid.
#[derive(Debug, Clone)]
pub struct CellSet {
    cols: usize,
    flags: Vec<bool>,
}

impl CellSet {
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            flags: vec![false; grid.len()],
        }
    }

    /// Insert `at`; returns `false` if it was already present.
    pub fn insert(&mut self, at: Coord) -> bool {
        let i = at.row * self.cols + at.col;
        !std::mem::replace(&mut self.flags[i], true)
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        self.flags[at.row * self.cols + at.col]
    }
}
