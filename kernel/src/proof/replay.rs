//! Replay verification: check that a trace's snapshots are explained by
//! its recorded effects.
//!
//! The verifier walks the trace from the initial state and, for every step,
//! compares the snapshot against the previous one:
//!
//! | kind        | allowed change                                       |
//! |-------------|------------------------------------------------------|
//! | `swap`      | exactly the two listed positions exchanged           |
//! | `overwrite` | changed or removed positions all listed; never grows |
//! | `sorted`    | listed positions permuted among themselves           |
//! | otherwise   | none                                                 |
//!
//! Grid traces never change the grid at all.

use crate::model::{ArrayTrace, Element, Grid, GridTrace, StepFamily, StepKind};

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// Every step is consistent with its predecessor.
    Match,
    /// The first inconsistent step.
    Divergence { step_index: usize, detail: String },
}

impl ReplayVerdict {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

fn diverge(step_index: usize, detail: impl Into<String>) -> ReplayVerdict {
    ReplayVerdict::Divergence {
        step_index,
        detail: detail.into(),
    }
}

/// Verify an array trace against the collection it started from.
#[must_use]
pub fn verify_array_trace(initial: &[Element], trace: &ArrayTrace) -> ReplayVerdict {
    let mut prev: &[Element] = initial;
    for (i, step) in trace.iter().enumerate() {
        if step.kind.family() == StepFamily::Pathfind {
            return diverge(i, format!("pathfinding kind {} in array trace", step.kind));
        }
        if let Some(&bad) = step.indices.iter().find(|&&ix| ix >= prev.len()) {
            return diverge(i, format!("index {bad} out of bounds (len {})", prev.len()));
        }
        let next = step.snapshot.as_slice();
        let outcome = match step.kind {
            StepKind::Swap => check_swap(prev, next, &step.indices),
            StepKind::Overwrite => check_overwrite(prev, next, &step.indices),
            StepKind::Sorted => check_permuted(prev, next, &step.indices),
            _ if prev == next => Ok(()),
            kind => Err(format!("{kind} step changed the snapshot")),
        };
        if let Err(detail) = outcome {
            return diverge(i, detail);
        }
        prev = next;
    }
    ReplayVerdict::Match
}

fn check_swap(prev: &[Element], next: &[Element], indices: &[usize]) -> Result<(), String> {
    let &[a, b] = indices else {
        return Err(format!("swap lists {} positions", indices.len()));
    };
    if a == b {
        return Err(format!("swap of position {a} with itself"));
    }
    let mut expected = prev.to_vec();
    expected.swap(a, b);
    if expected == next {
        Ok(())
    } else {
        Err(format!("snapshot is not prev with {a} and {b} exchanged"))
    }
}

fn check_overwrite(prev: &[Element], next: &[Element], indices: &[usize]) -> Result<(), String> {
    if next.len() > prev.len() {
        return Err(format!("collection grew from {} to {}", prev.len(), next.len()));
    }
    for p in 0..prev.len() {
        if next.get(p) != Some(&prev[p]) && !indices.contains(&p) {
            return Err(format!("position {p} changed but is not listed"));
        }
    }
    Ok(())
}

fn check_permuted(prev: &[Element], next: &[Element], indices: &[usize]) -> Result<(), String> {
    if next.len() != prev.len() {
        return Err("sorted step changed the collection length".to_string());
    }
    let mut before = Vec::with_capacity(indices.len());
    let mut after = Vec::with_capacity(indices.len());
    for p in 0..prev.len() {
        if indices.contains(&p) {
            before.push(prev[p]);
            after.push(next[p]);
        } else if prev[p] != next[p] {
            return Err(format!("position {p} changed but is not listed"));
        }
    }
    let key = |e: &Element| (e.id, e.value);
    before.sort_by_key(key);
    after.sort_by_key(key);
    if before == after {
        Ok(())
    } else {
        Err("sorted step is not a permutation of the listed positions".to_string())
    }
}

/// Verify a pathfinding trace against the grid it searched.
#[must_use]
pub fn verify_grid_trace(grid: &Grid, trace: &GridTrace) -> ReplayVerdict {
    for (i, step) in trace.iter().enumerate() {
        match step.kind.family() {
            StepFamily::Pathfind | StepFamily::Terminal => {}
            _ => return diverge(i, format!("kind {} in grid trace", step.kind)),
        }
        if *step.snapshot != *grid {
            return diverge(i, "grid snapshot differs from the searched grid");
        }
        match (step.kind, step.cell()) {
            (StepKind::NotFound, _) if step.indices.is_empty() => {}
            (StepKind::NotFound, _) => return diverge(i, "not_found carries a cell"),
            (_, Some(at)) if grid.contains(at) => {}
            (_, Some(at)) => return diverge(i, format!("cell {at} outside the grid")),
            (kind, None) => return diverge(i, format!("{kind} step without a cell")),
        }
    }
    ReplayVerdict::Match
}
