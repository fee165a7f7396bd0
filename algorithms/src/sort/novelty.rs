//! Novelty sorts: bogo, stupid (permutation enumeration), stooge, Stalin.
//!
//! Bogo and stupid sort are capped and may give up; a give-up trace ends
//! without `sorted` markers. Stalin sort is lossy by definition.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::proof::trace_hash::input_seed;
use algoscope_kernel::tape::ArrayTape;

use super::is_sorted_range;

/// Maximum number of shuffles bogo sort attempts.
pub const BOGO_ATTEMPTS: usize = 1000;

/// Maximum number of permutations stupid sort examines.
pub const STUPID_PERMUTATIONS: usize = 1000;

/// Bogo sort: Fisher-Yates shuffle until sorted, at most
/// [`BOGO_ATTEMPTS`] times. The RNG is seeded from the input, so equal
/// inputs give equal traces.
#[must_use]
pub fn bogo(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("bogo", input);
    let n = tape.len();
    let mut rng = SmallRng::seed_from_u64(input_seed(input));
    for _ in 0..BOGO_ATTEMPTS {
        if is_sorted_range(&mut tape, 0, n) {
            return tape.finish();
        }
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            tape.swap(i, j);
        }
    }
    if is_sorted_range(&mut tape, 0, n) {
        return tape.finish();
    }
    debug!(algorithm = "bogo", attempts = BOGO_ATTEMPTS, n, "gave up unsorted");
    tape.finish_unsorted()
}

/// `min(cap, n!)` without overflow.
fn capped_factorial(n: usize, cap: usize) -> usize {
    let mut product: usize = 1;
    for k in 2..=n {
        product = product.saturating_mul(k);
        if product >= cap {
            return cap;
        }
    }
    product.min(cap)
}

/// Stupid sort: walk permutations with Heap's algorithm, checking each for
/// order, until sorted or `min(STUPID_PERMUTATIONS, n!)` were examined.
#[must_use]
pub fn stupid(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("stupid", input);
    let n = tape.len();
    let limit = capped_factorial(n, STUPID_PERMUTATIONS);
    if is_sorted_range(&mut tape, 0, n) {
        return tape.finish();
    }
    let mut counters = vec![0usize; n];
    let mut examined = 1;
    let mut i = 1;
    while i < n && examined < limit {
        if counters[i] < i {
            if i % 2 == 0 {
                tape.swap(0, i);
            } else {
                tape.swap(counters[i], i);
            }
            examined += 1;
            if is_sorted_range(&mut tape, 0, n) {
                return tape.finish();
            }
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
    debug!(algorithm = "stupid", examined, n, "gave up unsorted");
    tape.finish_unsorted()
}

/// Stooge sort: sort the first two thirds, the last two thirds, then the
/// first two thirds again.
#[must_use]
pub fn stooge(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, lo: usize, hi: usize) {
        if tape.greater(lo, hi) {
            tape.swap(lo, hi);
        }
        let len = hi - lo + 1;
        if len > 2 {
            let third = len / 3;
            recurse(tape, lo, hi - third);
            recurse(tape, lo + third, hi);
            recurse(tape, lo, hi - third);
        }
    }
    let mut tape = ArrayTape::new("stooge", input);
    let n = tape.len();
    if n > 1 {
        recurse(&mut tape, 0, n - 1);
    }
    tape.finish()
}

/// Stalin sort: keep every element not smaller than the last kept one,
/// compact the survivors to the front and drop the rest.
///
/// The result is ascending and a subsequence of the input.
#[must_use]
pub fn stalin(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("stalin", input);
    let n = tape.len();
    if n == 0 {
        return tape.finish();
    }
    let mut kept = 1;
    tape.mark_sorted(0);
    for i in 1..n {
        if !tape.less(i, kept - 1) {
            tape.swap(kept, i);
            tape.mark_sorted(kept);
            kept += 1;
        }
    }
    let dropped = n - kept;
    tape.truncate(kept);
    if dropped > 0 {
        debug!(algorithm = "stalin", dropped, "dropped out-of-order elements");
    }
    tape.finish()
}
