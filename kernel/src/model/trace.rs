//! `Trace`: the finished, immutable record of one algorithm run.

use std::sync::Arc;

use super::element::Element;
use super::grid::Grid;
use super::step::{Step, StepKind};

/// A complete, ordered, finite sequence of steps.
///
/// Immutable once produced: there are no mutable accessors. Consumers read
/// snapshots forward; nothing is recomputed during playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<S> {
    algorithm: &'static str,
    steps: Vec<Step<S>>,
}

/// Trace over element arrays (sorting and searching).
pub type ArrayTrace = Trace<Vec<Element>>;

/// Trace over a frozen grid (pathfinding).
pub type GridTrace = Trace<Arc<Grid>>;

impl<S> Trace<S> {
    /// Wrap an already-recorded step list.
    #[must_use]
    pub fn from_steps(algorithm: &'static str, steps: Vec<Step<S>>) -> Self {
        Self { algorithm, steps }
    }

    /// Registry id of the algorithm that produced this trace.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Same steps under another algorithm id (used by delegating algorithms).
    #[must_use]
    pub fn relabel(self, algorithm: &'static str) -> Self {
        Self {
            algorithm,
            steps: self.steps,
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> {
        self.steps.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Step<S>> {
        self.steps.last()
    }

    /// Snapshot of the last step, if any.
    #[must_use]
    pub fn final_snapshot(&self) -> Option<&S> {
        self.steps.last().map(|s| &s.snapshot)
    }

    /// Number of steps of `kind`.
    #[must_use]
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Steps of `kind`, in order.
    pub fn of_kind(&self, kind: StepKind) -> impl Iterator<Item = &Step<S>> {
        self.steps.iter().filter(move |s| s.kind == kind)
    }

    /// The first `found` / `not_found` step.
    #[must_use]
    pub fn terminal(&self) -> Option<&Step<S>> {
        self.steps.iter().find(|s| s.kind.is_terminal())
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
