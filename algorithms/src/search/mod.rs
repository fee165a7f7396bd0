//! Searching family.
//!
//! Every procedure has the shape `fn(&[Element], i64) -> ArrayTrace` and
//! ends with exactly one terminal step: `found` at the matching position or
//! `not_found`. All searches except linear first order a private copy and
//! record it as a single `sorted` setup step over every position; that
//! ordering is not itself instrumented.

use algoscope_kernel::model::{ArrayTrace, Auxiliary, Element, StepKind};
use algoscope_kernel::tape::ArrayTape;

/// Start a tape whose first step is the `sorted` setup.
fn sorted_tape(algorithm: &'static str, input: &[Element]) -> ArrayTape {
    let mut tape = ArrayTape::new(algorithm, input);
    let mut ordered = input.to_vec();
    ordered.sort_by_key(|e| e.value);
    tape.setup_sorted(ordered);
    tape
}

fn range(low: usize, high: usize) -> Option<Auxiliary> {
    Some(Auxiliary::Range { low, high })
}

fn found(mut tape: ArrayTape, at: usize) -> ArrayTrace {
    tape.record(StepKind::Found, vec![at], None);
    tape.finish_unsorted()
}

fn not_found(mut tape: ArrayTape) -> ArrayTrace {
    tape.record(StepKind::NotFound, Vec::new(), None);
    tape.finish_unsorted()
}

fn eliminate(tape: &mut ArrayTape, positions: std::ops::RangeInclusive<usize>) {
    tape.record(StepKind::Eliminate, positions.collect(), None);
}

/// Linear search over the input order: one `check` per position.
#[must_use]
pub fn linear(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = ArrayTape::new("linear", input);
    for i in 0..tape.len() {
        tape.record(StepKind::Check, vec![i], None);
        if tape.value(i) == target {
            return found(tape, i);
        }
    }
    not_found(tape)
}

/// Binary search. Each `check` carries the live window; each miss
/// eliminates the half that cannot hold the target, probe included.
#[must_use]
pub fn binary(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = sorted_tape("binary", input);
    let n = tape.len();
    if n == 0 {
        return not_found(tape);
    }
    match bisect(&mut tape, 0, n - 1, target) {
        Some(at) => found(tape, at),
        None => not_found(tape),
    }
}

/// Binary phase shared by binary and exponential search over `low..=high`.
fn bisect(tape: &mut ArrayTape, mut low: usize, mut high: usize, target: i64) -> Option<usize> {
    while low <= high {
        let mid = low + (high - low) / 2;
        tape.record(StepKind::Check, vec![mid], range(low, high));
        let value = tape.value(mid);
        if value == target {
            return Some(mid);
        }
        if value < target {
            eliminate(tape, low..=mid);
            low = mid + 1;
        } else {
            eliminate(tape, mid..=high);
            if mid == 0 {
                return None;
            }
            high = mid - 1;
        }
    }
    None
}

/// Jump search with block size `floor(sqrt n)`: jump while the block end is
/// below the target (eliminating everything up to it), then scan the block.
#[must_use]
pub fn jump(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = sorted_tape("jump", input);
    let n = tape.len();
    if n == 0 {
        return not_found(tape);
    }
    let mut block = 1;
    while (block + 1) * (block + 1) <= n {
        block += 1;
    }
    let mut scan_from = 0;
    let mut probe = 0;
    while probe < n && tape.value(probe) < target {
        tape.record(StepKind::Jump, vec![probe], None);
        eliminate(&mut tape, scan_from..=probe);
        scan_from = probe + 1;
        probe += block;
    }
    for i in scan_from..n.min(probe + 1) {
        tape.record(StepKind::Check, vec![i], None);
        if tape.value(i) == target {
            return found(tape, i);
        }
    }
    not_found(tape)
}

/// Interpolation search: probe where the target would sit if values were
/// evenly spread over the window. Equal end values probe `low`.
#[must_use]
pub fn interpolation(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = sorted_tape("interpolation", input);
    let n = tape.len();
    if n == 0 {
        return not_found(tape);
    }
    let (mut low, mut high) = (0, n - 1);
    while low <= high && target >= tape.value(low) && target <= tape.value(high) {
        let probe = interpolate(tape.value(low), tape.value(high), low, high, target);
        tape.record(StepKind::Interpolate, vec![probe], range(low, high));
        let value = tape.value(probe);
        if value == target {
            return found(tape, probe);
        }
        if value < target {
            low = probe + 1;
        } else if probe == 0 {
            break;
        } else {
            high = probe - 1;
        }
    }
    not_found(tape)
}

/// Position estimate clamped into `low..=high`.
fn interpolate(low_value: i64, high_value: i64, low: usize, high: usize, target: i64) -> usize {
    if high_value == low_value {
        return low;
    }
    let numerator = (i128::from(target) - i128::from(low_value)) * (high - low) as i128;
    let estimate = numerator / (i128::from(high_value) - i128::from(low_value));
    let offset = usize::try_from(estimate.max(0)).unwrap_or(high - low);
    (low + offset).clamp(low, high)
}

/// Exponential search: check position 0, double a bound while its value is
/// below the target, then binary-search between the last two bounds.
#[must_use]
pub fn exponential(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = sorted_tape("exponential", input);
    let n = tape.len();
    if n == 0 {
        return not_found(tape);
    }
    tape.record(StepKind::Check, vec![0], None);
    if tape.value(0) == target {
        return found(tape, 0);
    }
    let mut bound = 1;
    while bound < n && tape.value(bound) < target {
        tape.record(StepKind::Exponential, vec![bound], None);
        bound *= 2;
    }
    let low = bound / 2;
    let high = bound.min(n - 1);
    if low > 0 {
        eliminate(&mut tape, 0..=low - 1);
    }
    match bisect(&mut tape, low, high, target) {
        Some(at) => found(tape, at),
        None => not_found(tape),
    }
}

/// Ternary search: two probes split the window into thirds; the target's
/// third survives.
#[must_use]
pub fn ternary(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = sorted_tape("ternary", input);
    let n = tape.len();
    if n == 0 {
        return not_found(tape);
    }
    let (mut low, mut high) = (0, n - 1);
    while low <= high {
        let third = (high - low) / 3;
        let (mid1, mid2) = (low + third, high - third);
        tape.record(StepKind::Ternary, vec![mid1, mid2], range(low, high));
        if tape.value(mid1) == target {
            return found(tape, mid1);
        }
        if tape.value(mid2) == target {
            return found(tape, mid2);
        }
        if target < tape.value(mid1) {
            if mid1 == 0 {
                break;
            }
            high = mid1 - 1;
        } else if target > tape.value(mid2) {
            low = mid2 + 1;
        } else {
            low = mid1 + 1;
            high = mid2 - 1;
        }
    }
    not_found(tape)
}

/// Fibonacci search: probe at `offset + F(k-2)`, shrinking the Fibonacci
/// window by one or two terms per miss; a final probe at `offset + 1`
/// covers the last remaining candidate.
#[must_use]
pub fn fibonacci(input: &[Element], target: i64) -> ArrayTrace {
    let mut tape = sorted_tape("fibonacci", input);
    let n = tape.len();
    if n == 0 {
        return not_found(tape);
    }
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib1 + fib2;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib1 + fib2;
    }
    // Positions at or before `offset` are known to be below the target.
    let mut offset: Option<usize> = None;
    let next = |offset: Option<usize>| offset.map_or(0, |o| o + 1);
    while fib > 1 {
        let probe = (next(offset) + fib2 - 1).min(n - 1);
        tape.record(StepKind::Fibonacci, vec![probe], None);
        let value = tape.value(probe);
        if value < target {
            fib = fib1;
            fib1 = fib2;
            fib2 = fib - fib1;
            offset = Some(probe);
        } else if value > target {
            fib = fib2;
            fib1 -= fib2;
            fib2 = fib - fib1;
        } else {
            return found(tape, probe);
        }
    }
    let last = next(offset);
    if fib1 == 1 && last < n {
        tape.record(StepKind::Fibonacci, vec![last], None);
        if tape.value(last) == target {
            return found(tape, last);
        }
    }
    not_found(tape)
}
