//! `ArrayTape`: instrumented primitives over a private element array.
//!
//! Comparisons, relocations and markers are recorded as a side channel; the
//! tape never decides anything for the algorithm. Every mutating primitive
//! snapshots after the mutation so consecutive snapshots differ exactly by
//! the recorded effect.

use std::cmp::Ordering;
use std::ops::Range;

use crate::model::{ArrayTrace, Auxiliary, Element, Step, StepKind, Trace};

/// Recorder for sorting and searching runs.
#[derive(Debug)]
pub struct ArrayTape {
    algorithm: &'static str,
    work: Vec<Element>,
    steps: Vec<Step<Vec<Element>>>,
    marked: Vec<bool>,
}

impl ArrayTape {
    /// Start a run over a private copy of `input`.
    #[must_use]
    pub fn new(algorithm: &'static str, input: &[Element]) -> Self {
        Self {
            algorithm,
            work: input.to_vec(),
            steps: Vec::new(),
            marked: vec![false; input.len()],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.work.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.work.is_empty()
    }

    /// Current working array.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.work
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Element {
        self.work[i]
    }

    #[must_use]
    pub fn value(&self, i: usize) -> i64 {
        self.work[i].value
    }

    /// Number of steps recorded so far.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Append a step with an explicit kind, snapshotting the current state.
    pub fn record(&mut self, kind: StepKind, indices: Vec<usize>, auxiliary: Option<Auxiliary>) {
        self.steps.push(Step {
            kind,
            indices,
            snapshot: self.work.clone(),
            auxiliary,
        });
    }

    // -----------------------------------------------------------------------
    // Comparisons
    // -----------------------------------------------------------------------

    /// Compare the values at `i` and `j`, recording `compare [i, j]`.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.record(StepKind::Compare, vec![i, j], None);
        self.work[i].value.cmp(&self.work[j].value)
    }

    /// `work[i] < work[j]`, recorded.
    pub fn less(&mut self, i: usize, j: usize) -> bool {
        self.compare(i, j) == Ordering::Less
    }

    /// `work[i] > work[j]`, recorded.
    pub fn greater(&mut self, i: usize, j: usize) -> bool {
        self.compare(i, j) == Ordering::Greater
    }

    /// Compare the value at `i` with a value held outside the array.
    ///
    /// `roles` are the indices recorded on the step (the first is usually `i`).
    pub fn compare_value(&mut self, i: usize, value: i64, roles: Vec<usize>) -> Ordering {
        self.record(StepKind::Compare, roles, None);
        self.work[i].value.cmp(&value)
    }

    /// Compare two values held outside the array; `roles` name the positions
    /// the renderer should highlight.
    pub fn compare_values(&mut self, a: i64, b: i64, roles: Vec<usize>) -> Ordering {
        self.record(StepKind::Compare, roles, None);
        a.cmp(&b)
    }

    // -----------------------------------------------------------------------
    // Relocations
    // -----------------------------------------------------------------------

    /// Exchange positions `i` and `j`. Swapping a position with itself is a
    /// no-op and records nothing.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.work.swap(i, j);
        self.record(StepKind::Swap, vec![i, j], None);
    }

    /// Overwrite position `i`.
    pub fn write(&mut self, i: usize, element: Element) {
        self.work[i] = element;
        self.record(StepKind::Overwrite, vec![i], None);
    }

    /// Overwrite `elements.len()` consecutive positions from `start` as one step.
    pub fn write_run(&mut self, start: usize, elements: &[Element]) {
        if elements.is_empty() {
            return;
        }
        self.work[start..start + elements.len()].copy_from_slice(elements);
        self.record(
            StepKind::Overwrite,
            (start..start + elements.len()).collect(),
            None,
        );
    }

    /// Overwrite the whole array as one batched step.
    pub fn write_all(&mut self, elements: &[Element]) {
        debug_assert_eq!(elements.len(), self.work.len());
        self.write_run(0, elements);
    }

    /// Drop every position from `len` onwards.
    ///
    /// Records an `overwrite` listing the removed positions. Only lossy
    /// algorithms shrink the collection.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.work.len() {
            return;
        }
        let removed: Vec<usize> = (len..self.work.len()).collect();
        self.work.truncate(len);
        self.marked.truncate(len);
        self.record(StepKind::Overwrite, removed, None);
    }

    // -----------------------------------------------------------------------
    // Markers
    // -----------------------------------------------------------------------

    pub fn pivot(&mut self, i: usize) {
        self.record(StepKind::Pivot, vec![i], None);
    }

    /// Mark position `i` as final. Already-marked positions are skipped.
    pub fn mark_sorted(&mut self, i: usize) {
        if i < self.marked.len() && !self.marked[i] {
            self.marked[i] = true;
            self.record(StepKind::Sorted, vec![i], None);
        }
    }

    pub fn mark_sorted_range(&mut self, range: Range<usize>) {
        for i in range {
            self.mark_sorted(i);
        }
    }

    /// Replace the working array with an already-ordered arrangement of the
    /// same elements and record one `sorted` step over every position.
    ///
    /// This is the opaque setup step of the ordered searches.
    pub fn setup_sorted(&mut self, ordered: Vec<Element>) {
        debug_assert_eq!(ordered.len(), self.work.len());
        self.work = ordered;
        let all = (0..self.work.len()).collect();
        self.record(StepKind::Sorted, all, None);
    }

    // -----------------------------------------------------------------------
    // Completion
    // -----------------------------------------------------------------------

    /// Finish a run whose array is final: every unmarked position gets a
    /// `sorted` step, in ascending order.
    #[must_use]
    pub fn finish(mut self) -> ArrayTrace {
        self.mark_sorted_range(0..self.work.len());
        Trace::from_steps(self.algorithm, self.steps)
    }

    /// Finish without adding markers (searches, capped give-ups).
    #[must_use]
    pub fn finish_unsorted(self) -> ArrayTrace {
        Trace::from_steps(self.algorithm, self.steps)
    }
}
