//! Exchange sorts: bubble, cocktail shaker, comb, gnome, odd-even.

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

/// Bubble sort with early exit. Stable.
///
/// Each pass bubbles the largest remaining value to the end and marks it.
#[must_use]
pub fn bubble(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("bubble", input);
    let n = tape.len();
    for pass in 0..n {
        let end = n - 1 - pass;
        let mut swapped = false;
        for j in 0..end {
            if tape.greater(j, j + 1) {
                tape.swap(j, j + 1);
                swapped = true;
            }
        }
        tape.mark_sorted(end);
        if !swapped {
            break;
        }
    }
    tape.finish()
}

/// Cocktail shaker sort: alternating forward and backward bubble passes.
/// Stable.
#[must_use]
pub fn cocktail(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("cocktail", input);
    let (mut lo, mut hi) = (0, tape.len());
    while lo + 1 < hi {
        let mut swapped = false;
        for j in lo + 1..hi {
            if tape.greater(j - 1, j) {
                tape.swap(j - 1, j);
                swapped = true;
            }
        }
        hi -= 1;
        tape.mark_sorted(hi);
        if !swapped {
            break;
        }
        swapped = false;
        for j in (lo + 1..hi).rev() {
            if tape.greater(j - 1, j) {
                tape.swap(j - 1, j);
                swapped = true;
            }
        }
        tape.mark_sorted(lo);
        lo += 1;
        if !swapped {
            break;
        }
    }
    tape.finish()
}

/// Comb sort with shrink factor 1.3, finishing with gap-1 passes until clean.
#[must_use]
pub fn comb(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("comb", input);
    let n = tape.len();
    let mut gap = n;
    let mut clean = false;
    while !clean {
        gap = (gap * 10 / 13).max(1);
        clean = gap == 1;
        for i in 0..n.saturating_sub(gap) {
            if tape.greater(i, i + gap) {
                tape.swap(i, i + gap);
                clean = false;
            }
        }
    }
    tape.finish()
}

/// Gnome sort. Stable.
#[must_use]
pub fn gnome(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("gnome", input);
    let n = tape.len();
    let mut i = 1;
    while i < n {
        if tape.greater(i - 1, i) {
            tape.swap(i - 1, i);
            i = (i - 1).max(1);
        } else {
            i += 1;
        }
    }
    tape.finish()
}

/// Odd-even (brick) sort: alternating odd and even adjacent-pair phases
/// until a full round makes no exchange. Stable.
#[must_use]
pub fn odd_even(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("odd_even", input);
    let last = tape.len().saturating_sub(1);
    let mut clean = false;
    while !clean {
        clean = true;
        for start in [1, 0] {
            for i in (start..last).step_by(2) {
                if tape.greater(i, i + 1) {
                    tape.swap(i, i + 1);
                    clean = false;
                }
            }
        }
    }
    tape.finish()
}
