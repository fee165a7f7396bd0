//! Merge sorts: top-down merge, Timsort, adaptive (natural) merge, block
//! insertion + merge, rotation-based in-place merges, strand, patience.

use std::cmp::Ordering;

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

use super::{insertion_range, merge_buffered, merge_rotating, rotate, Placement};

/// Run length for Timsort's insertion phase.
pub const TIM_RUN: usize = 32;

/// Top-down merge sort. Stable; positions are marked at the end.
#[must_use]
pub fn merge(input: &[Element]) -> ArrayTrace {
    fn split(tape: &mut ArrayTape, lo: usize, hi: usize) {
        if hi - lo < 2 {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        split(tape, lo, mid);
        split(tape, mid, hi);
        merge_buffered(tape, lo, mid, hi);
    }
    let mut tape = ArrayTape::new("merge", input);
    let n = tape.len();
    split(&mut tape, 0, n);
    tape.finish()
}

/// Bottom-up merging of consecutive runs of width `width`, doubling.
fn merge_passes(tape: &mut ArrayTape, mut width: usize) {
    let n = tape.len();
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let hi = (lo + 2 * width).min(n);
            merge_buffered(tape, lo, lo + width, hi);
            lo = hi;
        }
        width *= 2;
    }
}

/// Simplified Timsort: insertion-sorted runs of [`TIM_RUN`], then
/// bottom-up buffered merges. Stable.
#[must_use]
pub fn tim(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("tim", input);
    let n = tape.len();
    for lo in (0..n).step_by(TIM_RUN) {
        insertion_range(&mut tape, lo, (lo + TIM_RUN).min(n));
    }
    merge_passes(&mut tape, TIM_RUN);
    tape.finish()
}

/// Adaptive merge sort: detect natural non-decreasing runs, then merge
/// neighbouring runs pairwise until one remains. Stable.
#[must_use]
pub fn adaptive_merge(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("adaptive_merge", input);
    let n = tape.len();
    if n < 2 {
        return tape.finish();
    }
    let mut bounds = vec![0];
    for i in 1..n {
        if tape.greater(i - 1, i) {
            bounds.push(i);
        }
    }
    bounds.push(n);
    while bounds.len() > 2 {
        let mut merged = vec![0];
        let mut k = 0;
        while k + 2 < bounds.len() {
            merge_buffered(&mut tape, bounds[k], bounds[k + 1], bounds[k + 2]);
            merged.push(bounds[k + 2]);
            k += 2;
        }
        if k + 1 < bounds.len() && merged.last() != Some(&n) {
            merged.push(n);
        }
        bounds = merged;
    }
    tape.finish()
}

/// Block sort: insertion-sort blocks of `ceil(sqrt n)`, then merge blocks
/// bottom-up through a buffer. Stable.
#[must_use]
pub fn block(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("block", input);
    let n = tape.len();
    let size = block_size(n);
    for lo in (0..n).step_by(size) {
        insertion_range(&mut tape, lo, (lo + size).min(n));
    }
    merge_passes(&mut tape, size);
    tape.finish()
}

/// `ceil(sqrt(n))`, at least 1.
fn block_size(n: usize) -> usize {
    let mut size = 1;
    while size * size < n {
        size += 1;
    }
    size
}

/// Franceschini-style in-place merge sort: bottom-up passes whose merges
/// rotate each run of smaller right-hand elements in front of the left
/// cursor. Stable, no buffer.
#[must_use]
pub fn in_place_merge(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("in_place_merge", input);
    let n = tape.len();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let hi = (lo + 2 * width).min(n);
            merge_by_runs(&mut tape, lo, lo + width, hi);
            lo = hi;
        }
        width *= 2;
    }
    tape.finish()
}

fn merge_by_runs(tape: &mut ArrayTape, mut lo: usize, mut mid: usize, hi: usize) {
    while lo < mid && mid < hi {
        if !tape.greater(lo, mid) {
            lo += 1;
            continue;
        }
        let mut end = mid + 1;
        while end < hi && tape.less(end, lo) {
            end += 1;
        }
        rotate(tape, lo, mid, end);
        lo += end - mid + 1;
        mid = end;
    }
}

/// Grail-style block merge sort: insertion-sort `sqrt n` blocks, then merge
/// block pairs in place by binary-searched rotations. Stable.
#[must_use]
pub fn block_merge(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("block_merge", input);
    let n = tape.len();
    let size = block_size(n);
    for lo in (0..n).step_by(size) {
        insertion_range(&mut tape, lo, (lo + size).min(n));
    }
    let mut width = size;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let hi = (lo + 2 * width).min(n);
            merge_rotating(&mut tape, lo, lo + width, hi);
            lo = hi;
        }
        width *= 2;
    }
    tape.finish()
}

/// Strand sort: repeatedly pull an increasing strand out of the remaining
/// elements and merge it into the result. Stable.
///
/// Layout after every round is `result ++ remaining`, written as one
/// overwrite.
#[must_use]
pub fn strand(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("strand", input);
    let mut result: Vec<Element> = Vec::new();
    let mut remaining: Vec<Element> = input.to_vec();
    while !remaining.is_empty() {
        let base = result.len();
        let mut strand = vec![(0, remaining[0])];
        let mut rest = Vec::new();
        for (k, &element) in remaining.iter().enumerate().skip(1) {
            let (last_k, last) = strand[strand.len() - 1];
            let roles = vec![base + k, base + last_k];
            if tape.compare_values(element.value, last.value, roles) == Ordering::Less {
                rest.push(element);
            } else {
                strand.push((k, element));
            }
        }

        let mut merged = Vec::with_capacity(result.len() + strand.len());
        let (mut i, mut j) = (0, 0);
        while i < result.len() && j < strand.len() {
            let (k, element) = strand[j];
            let roles = vec![i, base + k];
            if tape.compare_values(element.value, result[i].value, roles) == Ordering::Less {
                merged.push(element);
                j += 1;
            } else {
                merged.push(result[i]);
                i += 1;
            }
        }
        merged.extend_from_slice(&result[i..]);
        merged.extend(strand[j..].iter().map(|&(_, e)| e));

        result = merged;
        remaining = rest;
        let layout: Vec<Element> = result.iter().chain(&remaining).copied().collect();
        if layout != tape.as_slice() {
            tape.write_all(&layout);
        }
    }
    tape.finish()
}

/// Patience sort: deal onto piles (leftmost pile whose top is greater),
/// then repeatedly take the smallest top, leftmost on ties. Stable.
#[must_use]
pub fn patience(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("patience", input);
    let n = tape.len();
    let mut piles: Vec<Vec<usize>> = Vec::new();
    for source in 0..n {
        let (mut lo, mut hi) = (0, piles.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let top = piles[mid][piles[mid].len() - 1];
            if tape.greater(top, source) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        if lo == piles.len() {
            piles.push(vec![source]);
        } else {
            piles[lo].push(source);
        }
    }

    let mut placement = Placement::identity(n);
    for target in 0..n {
        let mut best: Option<usize> = None;
        for p in 0..piles.len() {
            let Some(&top) = piles[p].last() else { continue };
            best = match best {
                None => Some(p),
                Some(b) => {
                    let current = piles[b][piles[b].len() - 1];
                    let roles = vec![placement.position(top), placement.position(current)];
                    let ord = tape.compare_values(input[top].value, input[current].value, roles);
                    if ord == Ordering::Less {
                        Some(p)
                    } else {
                        Some(b)
                    }
                }
            };
        }
        let Some(b) = best else { break };
        if let Some(source) = piles[b].pop() {
            placement.place(&mut tape, source, target);
        }
    }
    tape.finish()
}
