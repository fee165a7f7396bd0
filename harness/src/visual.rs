//! Visual state: what a renderer needs after each applied step.
//!
//! The state accumulates across a playback. Array traces fill the
//! highlight, elimination and outcome fields; grid traces fill the
//! visited, explored and path sets. [`Frame`] ties a snapshot type to the
//! way its steps fold into the state and sound.

use std::collections::BTreeSet;
use std::sync::Arc;

use algoscope_kernel::model::{Coord, Element, Grid, Snapshot, Step, StepKind};

use crate::audio::{
    frequency_for_cell, frequency_for_value, Tone, ARRAY_TONE_SECONDS, GRID_TONE_SECONDS,
};

/// How a search or pathfinding run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Array position of the match, or row-major index of the goal cell.
    Found(usize),
    NotFound,
}

/// Accumulated presentation state of one playback.
#[derive(Debug, Clone)]
pub struct VisualState<S> {
    snapshot: Option<S>,
    highlighted: Vec<usize>,
    kind: Option<StepKind>,
    eliminated: BTreeSet<usize>,
    visited: BTreeSet<Coord>,
    explored: BTreeSet<Coord>,
    path: Vec<Coord>,
    current_cell: Option<Coord>,
    outcome: Option<SearchOutcome>,
    applied: usize,
}

impl<S> Default for VisualState<S> {
    fn default() -> Self {
        Self {
            snapshot: None,
            highlighted: Vec::new(),
            kind: None,
            eliminated: BTreeSet::new(),
            visited: BTreeSet::new(),
            explored: BTreeSet::new(),
            path: Vec::new(),
            current_cell: None,
            outcome: None,
            applied: 0,
        }
    }
}

impl<S: Frame> VisualState<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step into the state.
    pub fn apply(&mut self, step: &Step<S>) {
        self.snapshot = Some(step.snapshot.clone());
        self.highlighted.clone_from(&step.indices);
        self.kind = Some(step.kind);
        self.applied += 1;
        S::apply(self, step);
    }
}

impl<S> VisualState<S> {
    /// State after the latest step, `None` before the first.
    #[must_use]
    pub fn snapshot(&self) -> Option<&S> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    #[must_use]
    pub fn kind(&self) -> Option<StepKind> {
        self.kind
    }

    #[must_use]
    pub fn eliminated(&self) -> &BTreeSet<usize> {
        &self.eliminated
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<Coord> {
        &self.visited
    }

    #[must_use]
    pub fn explored(&self) -> &BTreeSet<Coord> {
        &self.explored
    }

    /// Path cells revealed so far, start first.
    #[must_use]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    #[must_use]
    pub fn current_cell(&self) -> Option<Coord> {
        self.current_cell
    }

    #[must_use]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Number of steps applied.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.applied
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A snapshot type the scheduler can play back.
pub trait Frame: Snapshot + Send + Sync + 'static {
    /// Update the family-specific parts of `state` for `step`.
    fn apply(state: &mut VisualState<Self>, step: &Step<Self>);

    /// The tone for `step`, derived from its first index.
    fn tone(step: &Step<Self>) -> Option<Tone>;
}

impl Frame for Vec<Element> {
    fn apply(state: &mut VisualState<Self>, step: &Step<Self>) {
        match step.kind {
            StepKind::Eliminate => state.eliminated.extend(step.indices.iter().copied()),
            StepKind::Found => state.outcome = step.indices.first().copied().map(SearchOutcome::Found),
            StepKind::NotFound => state.outcome = Some(SearchOutcome::NotFound),
            _ => {}
        }
    }

    fn tone(step: &Step<Self>) -> Option<Tone> {
        let element = step.snapshot.get(*step.indices.first()?)?;
        Some(Tone {
            hz: frequency_for_value(element.value),
            seconds: ARRAY_TONE_SECONDS,
        })
    }
}

impl Frame for Arc<Grid> {
    fn apply(state: &mut VisualState<Self>, step: &Step<Self>) {
        let cell = step.cell();
        match step.kind {
            StepKind::Visit | StepKind::VisitStart | StepKind::VisitEnd => {
                state.visited.extend(cell);
                state.current_cell = cell;
            }
            StepKind::Explore | StepKind::ExploreStart | StepKind::ExploreEnd => {
                state.explored.extend(cell);
            }
            StepKind::Path => state.path.extend(cell),
            StepKind::Found => {
                state.outcome = cell.map(|c| SearchOutcome::Found(step.snapshot.index(c)));
            }
            StepKind::NotFound => state.outcome = Some(SearchOutcome::NotFound),
            _ => {}
        }
    }

    fn tone(step: &Step<Self>) -> Option<Tone> {
        let cell = step.cell()?;
        let grid = &step.snapshot;
        Some(Tone {
            hz: frequency_for_cell(cell.row, cell.col, grid.rows(), grid.cols()),
            seconds: GRID_TONE_SECONDS,
        })
    }
}
