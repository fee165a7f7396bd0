//! Partition sorts: quicksort (Lomuto), dual-pivot quicksort, introsort,
//! pattern-defeating quicksort.

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

use super::{heapsort_range, insertion_range};

/// Introsort switches to insertion sort below this length.
pub const INTRO_SMALL: usize = 16;

/// PDQ switches to insertion sort below this length.
pub const PDQ_SMALL: usize = 24;

/// Lomuto partition of `lo..hi` around the last element. Returns the
/// pivot's final position.
fn lomuto(tape: &mut ArrayTape, lo: usize, hi: usize) -> usize {
    let pivot = hi - 1;
    tape.pivot(pivot);
    let mut store = lo;
    for j in lo..pivot {
        if tape.less(j, pivot) {
            tape.swap(store, j);
            store += 1;
        }
    }
    tape.swap(store, pivot);
    store
}

/// `floor(log2 n)` for `n >= 1`.
fn floor_log2(n: usize) -> usize {
    (usize::BITS - 1 - n.leading_zeros()) as usize
}

/// Quicksort with Lomuto partitioning and a last-element pivot.
#[must_use]
pub fn quick(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, lo: usize, hi: usize) {
        if hi <= lo {
            return;
        }
        if hi - lo == 1 {
            tape.mark_sorted(lo);
            return;
        }
        let p = lomuto(tape, lo, hi);
        tape.mark_sorted(p);
        recurse(tape, lo, p);
        recurse(tape, p + 1, hi);
    }
    let mut tape = ArrayTape::new("quick", input);
    let n = tape.len();
    recurse(&mut tape, 0, n);
    tape.finish()
}

/// Yaroslavskiy dual-pivot quicksort: two pivots split the range into
/// `< p`, `p..=q`, `> q`.
#[must_use]
pub fn dual_pivot_quick(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, lo: usize, hi: usize) {
        if hi <= lo {
            return;
        }
        if hi - lo == 1 {
            tape.mark_sorted(lo);
            return;
        }
        let (left, right) = (lo, hi - 1);
        if tape.greater(left, right) {
            tape.swap(left, right);
        }
        tape.pivot(left);
        tape.pivot(right);
        let (mut lt, mut gt, mut k) = (left + 1, right - 1, left + 1);
        while k <= gt {
            if tape.less(k, left) {
                tape.swap(k, lt);
                lt += 1;
            } else if tape.greater(k, right) {
                while k < gt && tape.greater(gt, right) {
                    gt -= 1;
                }
                tape.swap(k, gt);
                gt -= 1;
                if tape.less(k, left) {
                    tape.swap(k, lt);
                    lt += 1;
                }
            }
            k += 1;
        }
        lt -= 1;
        gt += 1;
        tape.swap(left, lt);
        tape.swap(right, gt);
        tape.mark_sorted(lt);
        tape.mark_sorted(gt);
        recurse(tape, lo, lt);
        recurse(tape, lt + 1, gt);
        recurse(tape, gt + 1, hi);
    }
    let mut tape = ArrayTape::new("dual_pivot_quick", input);
    let n = tape.len();
    recurse(&mut tape, 0, n);
    tape.finish()
}

/// Introsort: Lomuto quicksort that falls back to heapsort once recursion
/// exceeds `2 * floor(log2 n)`, with insertion sort below [`INTRO_SMALL`].
#[must_use]
pub fn intro(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, lo: usize, hi: usize, depth: usize) {
        if hi - lo < INTRO_SMALL {
            insertion_range(tape, lo, hi);
            return;
        }
        if depth == 0 {
            heapsort_range(tape, lo, hi, false);
            return;
        }
        let p = lomuto(tape, lo, hi);
        recurse(tape, lo, p, depth - 1);
        recurse(tape, p + 1, hi, depth - 1);
    }
    let mut tape = ArrayTape::new("intro", input);
    let n = tape.len();
    if n > 1 {
        recurse(&mut tape, 0, n, 2 * floor_log2(n));
    }
    tape.finish()
}

/// Pattern-defeating quicksort (simplified): median-of-three pivot,
/// insertion sort below [`PDQ_SMALL`], heapsort after `log2 n` badly
/// unbalanced partitions. Recurses into the smaller side, loops on the
/// larger.
#[must_use]
pub fn pdq(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, mut lo: usize, mut hi: usize, mut bad_allowed: usize) {
        loop {
            let len = hi - lo;
            if len < PDQ_SMALL {
                insertion_range(tape, lo, hi);
                return;
            }
            if bad_allowed == 0 {
                heapsort_range(tape, lo, hi, false);
                return;
            }
            let mid = lo + len / 2;
            median_of_three(tape, lo, mid, hi - 1);
            tape.swap(mid, hi - 1);
            let p = lomuto(tape, lo, hi);
            if (p - lo).min(hi - p - 1) < len / 8 {
                bad_allowed -= 1;
            }
            if p - lo < hi - p - 1 {
                recurse(tape, lo, p, bad_allowed);
                lo = p + 1;
            } else {
                recurse(tape, p + 1, hi, bad_allowed);
                hi = p;
            }
        }
    }
    let mut tape = ArrayTape::new("pdq", input);
    let n = tape.len();
    if n > 1 {
        recurse(&mut tape, 0, n, floor_log2(n));
    }
    tape.finish()
}

/// Order positions `a <= b <= c` by value so `b` holds the median.
fn median_of_three(tape: &mut ArrayTape, a: usize, b: usize, c: usize) {
    if tape.less(b, a) {
        tape.swap(a, b);
    }
    if tape.less(c, b) {
        tape.swap(b, c);
    }
    if tape.less(b, a) {
        tape.swap(a, b);
    }
}
