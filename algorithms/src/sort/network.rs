//! Comparator networks: bitonic, Batcher odd-even merge, pairwise.
//!
//! The comparator sequence depends only on `n`, never on the data. Sizes
//! that are not powers of two behave as if padded with `+inf` at the end;
//! comparators touching the padding can never exchange, so they are
//! skipped.

use std::cmp::Ordering;

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

/// Compare `i < j` and exchange when out of order for `ascending`.
fn compare_exchange(tape: &mut ArrayTape, i: usize, j: usize, ascending: bool) {
    let ord = tape.compare(i, j);
    let out_of_order = if ascending {
        ord == Ordering::Greater
    } else {
        ord == Ordering::Less
    };
    if out_of_order {
        tape.swap(i, j);
    }
}

/// Bitonic sort for arbitrary `n`: sort the halves in opposite directions,
/// then bitonic-merge with the largest power-of-two stride below the length.
#[must_use]
pub fn bitonic(input: &[Element]) -> ArrayTrace {
    fn sort(tape: &mut ArrayTape, lo: usize, len: usize, ascending: bool) {
        if len < 2 {
            return;
        }
        let half = len / 2;
        sort(tape, lo, half, !ascending);
        sort(tape, lo + half, len - half, ascending);
        merge(tape, lo, len, ascending);
    }
    fn merge(tape: &mut ArrayTape, lo: usize, len: usize, ascending: bool) {
        if len < 2 {
            return;
        }
        let mut stride = 1;
        while stride * 2 < len {
            stride *= 2;
        }
        for i in lo..lo + len - stride {
            compare_exchange(tape, i, i + stride, ascending);
        }
        merge(tape, lo, stride, ascending);
        merge(tape, lo + stride, len - stride, ascending);
    }
    let mut tape = ArrayTape::new("bitonic", input);
    let n = tape.len();
    sort(&mut tape, 0, n, true);
    tape.finish()
}

/// Batcher's odd-even merge sort network.
#[must_use]
pub fn odd_even_merge(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("odd_even_merge", input);
    let n = tape.len();
    let mut p = 1;
    while p < n {
        let mut k = p;
        while k >= 1 {
            let mut j = k % p;
            while j + k < n {
                for i in 0..k.min(n - j - k) {
                    if (i + j) / (2 * p) == (i + j + k) / (2 * p) {
                        compare_exchange(&mut tape, i + j, i + j + k, true);
                    }
                }
                j += 2 * k;
            }
            k /= 2;
        }
        p *= 2;
    }
    tape.finish()
}

/// Parberry's pairwise sorting network (iterative form).
#[must_use]
pub fn pairwise_network(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("pairwise_network", input);
    let n = tape.len();
    let mut a = 1;
    while a < n {
        let (mut b, mut c) = (a, 0);
        while b < n {
            compare_exchange(&mut tape, b - a, b, true);
            b += 1;
            c = (c + 1) % a;
            if c == 0 {
                b += a;
            }
        }
        a *= 2;
    }
    a /= 4;
    let mut e = 1;
    while a > 0 {
        let mut d = e;
        while d > 0 {
            let (mut b, mut c) = ((d + 1) * a, 0);
            while b < n {
                compare_exchange(&mut tape, b - d * a, b, true);
                b += 1;
                c = (c + 1) % a;
                if c == 0 {
                    b += a;
                }
            }
            d /= 2;
        }
        a /= 2;
        e = e * 2 + 1;
    }
    tape.finish()
}
