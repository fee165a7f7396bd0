//! `GridTape`: cell-level recorder for pathfinding runs.

use std::sync::Arc;

use crate::model::{Auxiliary, Coord, Grid, GridTrace, Step, StepKind, Trace};

/// Recorder over a frozen grid.
///
/// The grid never changes during a search, so every step shares the same
/// `Arc<Grid>` snapshot.
#[derive(Debug)]
pub struct GridTape {
    algorithm: &'static str,
    grid: Arc<Grid>,
    steps: Vec<Step<Arc<Grid>>>,
}

impl GridTape {
    #[must_use]
    pub fn new(algorithm: &'static str, grid: &Grid) -> Self {
        Self {
            algorithm,
            grid: Arc::new(grid.clone()),
            steps: Vec::new(),
        }
    }

    /// The frozen grid being searched.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Record a cell step.
    pub fn record(&mut self, kind: StepKind, at: Coord, auxiliary: Option<Auxiliary>) {
        self.steps.push(Step {
            kind,
            indices: vec![at.row, at.col],
            snapshot: Arc::clone(&self.grid),
            auxiliary,
        });
    }

    /// Record `found` at `at` followed by one `path` step per cell.
    pub fn found(&mut self, at: Coord, path: &[Coord]) {
        self.record(StepKind::Found, at, None);
        for &cell in path {
            self.record(StepKind::Path, cell, None);
        }
    }

    /// Record the `not_found` terminal step (no cell).
    pub fn not_found(&mut self) {
        self.steps.push(Step {
            kind: StepKind::NotFound,
            indices: Vec::new(),
            snapshot: Arc::clone(&self.grid),
            auxiliary: None,
        });
    }

    #[must_use]
    pub fn finish(self) -> GridTrace {
        Trace::from_steps(self.algorithm, self.steps)
    }
}
