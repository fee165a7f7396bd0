//! Sorting family.
//!
//! Every procedure has the shape `fn(&[Element]) -> ArrayTrace`. The input
//! is copied into an [`ArrayTape`]; comparisons and relocations go through
//! the tape so each one lands in the trace with a post-effect snapshot.
//!
//! Procedures are grouped by technique:
//!
//! - [`exchange`] -- adjacent/gapped exchanges (bubble, cocktail, comb, ...)
//! - [`selection`] -- select-and-place (selection, heap, cycle, tournament, ...)
//! - [`insertion`] -- insertion variants (insertion, shell, library, tree)
//! - [`merge`] -- buffered and in-place merges (merge, tim, patience, ...)
//! - [`partition`] -- quicksort variants (quick, dual pivot, intro, pdq)
//! - [`distribution`] -- key-distribution sorts (counting, radix, flash, ...)
//! - [`network`] -- data-oblivious comparator networks
//! - [`novelty`] -- bogo, stupid, stooge, stalin

pub mod distribution;
pub mod exchange;
pub mod insertion;
pub mod merge;
pub mod network;
pub mod novelty;
pub mod partition;
pub mod selection;

use std::cmp::Ordering;

use algoscope_kernel::tape::ArrayTape;

// ---------------------------------------------------------------------------
// Shared in-place primitives
// ---------------------------------------------------------------------------

/// Straight insertion over `lo..hi`, adjacent swaps only. Stable.
pub(crate) fn insertion_range(tape: &mut ArrayTape, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && tape.greater(j - 1, j) {
            tape.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Restore the max-heap property below `root` for the heap stored in
/// `lo..end` (children of `lo + k` at `lo + 2k + 1`, `lo + 2k + 2`).
pub(crate) fn sift_down(tape: &mut ArrayTape, lo: usize, mut root: usize, end: usize) {
    loop {
        let child = lo + 2 * (root - lo) + 1;
        if child >= end {
            return;
        }
        let mut largest = child;
        if child + 1 < end && tape.greater(child + 1, child) {
            largest = child + 1;
        }
        if tape.greater(largest, root) {
            tape.swap(root, largest);
            root = largest;
        } else {
            return;
        }
    }
}

/// Heapsort over `lo..hi`. With `mark`, each extracted maximum is marked
/// sorted as it lands.
pub(crate) fn heapsort_range(tape: &mut ArrayTape, lo: usize, hi: usize, mark: bool) {
    let len = hi - lo;
    if len < 2 {
        return;
    }
    for root in (lo..lo + len / 2).rev() {
        sift_down(tape, lo, root, hi);
    }
    for end in (lo + 1..hi).rev() {
        tape.swap(lo, end);
        if mark {
            tape.mark_sorted(end);
        }
        sift_down(tape, lo, lo, end);
    }
}

/// Reverse `lo..hi` with swaps.
pub(crate) fn reverse(tape: &mut ArrayTape, lo: usize, hi: usize) {
    if hi <= lo + 1 {
        return;
    }
    let (mut i, mut j) = (lo, hi - 1);
    while i < j {
        tape.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Rotate `lo..hi` so `mid..hi` comes first (three reversals).
pub(crate) fn rotate(tape: &mut ArrayTape, lo: usize, mid: usize, hi: usize) {
    if lo == mid || mid == hi {
        return;
    }
    reverse(tape, lo, mid);
    reverse(tape, mid, hi);
    reverse(tape, lo, hi);
}

/// Stable merge of the sorted runs `lo..mid` and `mid..hi` through a
/// scratch buffer. Comparisons are recorded against the runs' positions;
/// the merged run is written back as one overwrite.
pub(crate) fn merge_buffered(tape: &mut ArrayTape, lo: usize, mid: usize, hi: usize) {
    if lo >= mid || mid >= hi {
        return;
    }
    let left = tape.as_slice()[lo..mid].to_vec();
    let right = tape.as_slice()[mid..hi].to_vec();
    let mut merged = Vec::with_capacity(hi - lo);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        let ord = tape.compare_values(left[i].value, right[j].value, vec![lo + i, mid + j]);
        if ord == Ordering::Greater {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    tape.write_run(lo, &merged);
}

/// Stable in-place merge without a buffer: divide at a midpoint, binary
/// search the cut in the other run, rotate, recurse.
pub(crate) fn merge_rotating(tape: &mut ArrayTape, lo: usize, mid: usize, hi: usize) {
    let (len1, len2) = (mid - lo, hi - mid);
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if tape.less(mid, lo) {
            tape.swap(lo, mid);
        }
        return;
    }
    let (cut1, cut2) = if len1 >= len2 {
        let cut1 = lo + len1 / 2;
        (cut1, lower_bound(tape, mid, hi, cut1))
    } else {
        let cut2 = mid + len2 / 2;
        (upper_bound(tape, lo, mid, cut2), cut2)
    };
    rotate(tape, cut1, mid, cut2);
    let new_mid = cut1 + (cut2 - mid);
    merge_rotating(tape, lo, cut1, new_mid);
    merge_rotating(tape, new_mid, cut2, hi);
}

/// First position in `lo..hi` whose value is not less than the value at `key`.
pub(crate) fn lower_bound(tape: &mut ArrayTape, mut lo: usize, mut hi: usize, key: usize) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if tape.less(mid, key) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// First position in `lo..hi` whose value is greater than the value at `key`.
pub(crate) fn upper_bound(tape: &mut ArrayTape, mut lo: usize, mut hi: usize, key: usize) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if tape.less(key, mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// `true` if `lo..hi` is non-decreasing. Stops at the first inversion.
pub(crate) fn is_sorted_range(tape: &mut ArrayTape, lo: usize, hi: usize) -> bool {
    (lo + 1..hi).all(|i| !tape.greater(i - 1, i))
}

/// Positions of the minimum and maximum of `lo..hi`, found with recorded
/// comparisons. `None` for an empty range.
pub(crate) fn extremes(tape: &mut ArrayTape, lo: usize, hi: usize) -> Option<(usize, usize)> {
    if lo >= hi {
        return None;
    }
    let (mut min, mut max) = (lo, lo);
    for i in lo + 1..hi {
        if tape.less(i, min) {
            min = i;
        } else if tape.greater(i, max) {
            max = i;
        }
    }
    Some((min, max))
}

/// Partition `lo..hi` into `buckets` classes in place by cycle-leader swaps
/// (the American flag permutation). `key` must map every value into
/// `0..buckets`. Returns the `buckets + 1` class boundaries.
pub(crate) fn permute_by_key(
    tape: &mut ArrayTape,
    lo: usize,
    hi: usize,
    buckets: usize,
    key: impl Fn(i64) -> usize,
) -> Vec<usize> {
    let mut counts = vec![0usize; buckets];
    for i in lo..hi {
        counts[key(tape.value(i))] += 1;
    }
    let mut bounds = Vec::with_capacity(buckets + 1);
    bounds.push(lo);
    for count in &counts {
        let last = bounds[bounds.len() - 1];
        bounds.push(last + count);
    }
    let mut next = bounds[..buckets].to_vec();
    for b in 0..buckets {
        while next[b] < bounds[b + 1] {
            let d = key(tape.value(next[b]));
            if d == b {
                next[b] += 1;
            } else {
                tape.swap(next[b], next[d]);
                next[d] += 1;
            }
        }
    }
    bounds
}

/// Unsigned offset of `value` above `min`.
pub(crate) fn offset(value: i64, min: i64) -> u64 {
    value.abs_diff(min)
}

/// Class of `value` among `classes` equal-width classes spanning
/// `min..=min + span`.
pub(crate) fn class_of(value: i64, min: i64, span: u64, classes: usize) -> usize {
    if span == 0 || classes <= 1 {
        return 0;
    }
    let scaled = u128::from(offset(value, min)) * (classes as u128 - 1) / u128::from(span);
    #[allow(clippy::cast_possible_truncation)]
    let class = scaled as usize;
    class.min(classes - 1)
}

/// Realizes a computed order with swaps while tracking where every input
/// element currently sits.
pub(crate) struct Placement {
    /// `position[source]` is the current position of input element `source`.
    position: Vec<usize>,
    /// `source_at[p]` is the input element currently at position `p`.
    source_at: Vec<usize>,
}

impl Placement {
    pub(crate) fn identity(len: usize) -> Self {
        Self {
            position: (0..len).collect(),
            source_at: (0..len).collect(),
        }
    }

    pub(crate) fn position(&self, source: usize) -> usize {
        self.position[source]
    }

    /// Move input element `source` to position `target` with one swap.
    pub(crate) fn place(&mut self, tape: &mut ArrayTape, source: usize, target: usize) {
        let from = self.position[source];
        if from == target {
            return;
        }
        tape.swap(target, from);
        let displaced = self.source_at[target];
        self.source_at.swap(target, from);
        self.position[source] = target;
        self.position[displaced] = from;
    }
}
