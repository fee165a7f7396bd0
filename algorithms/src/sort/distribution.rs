//! Distribution sorts: counting, radix (LSD), bucket, pigeonhole, gravity,
//! American flag, flash, spread, proxmap.
//!
//! Keys are offsets above the minimum, so negative values are fine. The
//! sorts that allocate one slot per possible key switch to ranks of the
//! distinct values once the span outgrows the input. Whole redistributions
//! are written as one batched overwrite; the in-place variants move
//! elements with swaps.

use std::collections::{BTreeMap, VecDeque};

use tracing::warn;

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

use super::{class_of, extremes, insertion_range, offset, permute_by_key};

/// Spreadsort hands ranges at or below this length to insertion sort.
pub const SPREAD_SMALL: usize = 16;

/// Minimum value and span of `lo..hi`, found with recorded comparisons.
/// `None` when the range has fewer than two elements.
fn value_range(tape: &mut ArrayTape, lo: usize, hi: usize) -> Option<(i64, u64)> {
    if hi < lo + 2 {
        return None;
    }
    let (min, max) = extremes(tape, lo, hi)?;
    let min = tape.value(min);
    Some((min, offset(tape.value(max), min)))
}

fn to_index(key: u64) -> usize {
    usize::try_from(key).unwrap_or(usize::MAX)
}

/// Widest span keyed by offset for an input of `n` elements.
fn dense_limit(n: usize) -> u64 {
    (n as u64).saturating_mul(4).saturating_add(1024)
}

/// Per-element slot keys for the one-slot-per-key sorts. Keys preserve value
/// order, equal values share a key, and every key is below `count`.
struct Slots {
    keys: Vec<usize>,
    count: usize,
    /// Keys are offsets above the minimum rather than ranks.
    by_offset: bool,
}

fn slot_keys(input: &[Element], min: i64, span: u64) -> Slots {
    if span <= dense_limit(input.len()) {
        return Slots {
            keys: input.iter().map(|e| to_index(offset(e.value, min))).collect(),
            count: to_index(span) + 1,
            by_offset: true,
        };
    }
    let mut ranks: BTreeMap<i64, usize> = input.iter().map(|e| (e.value, 0)).collect();
    for (rank, slot) in ranks.values_mut().enumerate() {
        *slot = rank;
    }
    Slots {
        keys: input.iter().map(|e| ranks[&e.value]).collect(),
        count: ranks.len(),
        by_offset: false,
    }
}

/// Number of base-10 digits of `value` (at least 1).
fn decimal_digits(mut value: u64) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Stable concatenation of `buckets`, written over the whole array.
fn write_buckets<B: IntoIterator<Item = Element>>(tape: &mut ArrayTape, buckets: Vec<B>) {
    let layout: Vec<Element> = buckets.into_iter().flatten().collect();
    tape.write_all(&layout);
}

/// Counting sort: histogram of keys, prefix sums, stable placement.
#[must_use]
pub fn counting(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("counting", input);
    let n = tape.len();
    let Some((min, span)) = value_range(&mut tape, 0, n) else {
        return tape.finish();
    };
    let slots = slot_keys(input, min, span);
    let mut counts = vec![0usize; slots.count];
    for &key in &slots.keys {
        counts[key] += 1;
    }
    let mut next = Vec::with_capacity(counts.len());
    let mut total = 0;
    for count in &counts {
        next.push(total);
        total += count;
    }
    let mut out = input.to_vec();
    for (&e, &key) in input.iter().zip(&slots.keys) {
        let slot = &mut next[key];
        out[*slot] = e;
        *slot += 1;
    }
    tape.write_all(&out);
    tape.finish()
}

/// LSD radix sort, base 10: one stable bucket pass per digit of the span.
#[must_use]
pub fn radix(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("radix", input);
    let n = tape.len();
    let Some((min, span)) = value_range(&mut tape, 0, n) else {
        return tape.finish();
    };
    let mut divisor = 1u64;
    for _ in 0..decimal_digits(span) {
        let mut buckets: Vec<Vec<Element>> = vec![Vec::new(); 10];
        for &e in tape.as_slice() {
            buckets[to_index(offset(e.value, min) / divisor % 10)].push(e);
        }
        write_buckets(&mut tape, buckets);
        divisor = divisor.saturating_mul(10);
    }
    tape.finish()
}

/// Bucket sort: `ceil(sqrt n)` equal-width buckets scattered in one write,
/// then insertion sort inside each bucket. Stable.
#[must_use]
pub fn bucket(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("bucket", input);
    let n = tape.len();
    let mut count = 1;
    while count * count < n {
        count += 1;
    }
    scatter_then_insert(&mut tape, count);
    tape.finish()
}

/// Proxmap sort: one proximity class per element, scattered in one write,
/// then insertion sort inside each class.
#[must_use]
pub fn proxmap(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("proxmap", input);
    let n = tape.len();
    scatter_then_insert(&mut tape, n);
    tape.finish()
}

fn scatter_then_insert(tape: &mut ArrayTape, classes: usize) {
    let n = tape.len();
    let Some((min, span)) = value_range(tape, 0, n) else {
        return;
    };
    let mut buckets: Vec<Vec<Element>> = vec![Vec::new(); classes.max(1)];
    for &e in tape.as_slice() {
        buckets[class_of(e.value, min, span, classes)].push(e);
    }
    let sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
    write_buckets(tape, buckets);
    let mut lo = 0;
    for size in sizes {
        insertion_range(tape, lo, lo + size);
        lo += size;
    }
}

/// Pigeonhole sort: one hole per possible value (per distinct value when
/// the span is wide). Stable.
#[must_use]
pub fn pigeonhole(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("pigeonhole", input);
    let n = tape.len();
    let Some((min, span)) = value_range(&mut tape, 0, n) else {
        return tape.finish();
    };
    let slots = slot_keys(input, min, span);
    let mut holes: Vec<Vec<Element>> = vec![Vec::new(); slots.count];
    for (&e, &key) in input.iter().zip(&slots.keys) {
        holes[key].push(e);
    }
    write_buckets(&mut tape, holes);
    tape.finish()
}

/// Gravity (bead) sort. Each element is a row of beads on vertical rods;
/// beads fall and the settled row lengths give the sorted order.
///
/// Beads count the value itself when every value is positive and small;
/// otherwise a row holds its key plus one bead, so the shortest row has
/// exactly one. Cost is proportional to `n` times the number of rods.
#[must_use]
pub fn gravity(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("gravity", input);
    let n = tape.len();
    let Some((min, span)) = value_range(&mut tape, 0, n) else {
        return tape.finish();
    };
    let slots = slot_keys(input, min, span);
    let shift = if slots.by_offset { own_value_shift(min, span, n) } else { 1 };
    let mut rod_heights = vec![0usize; slots.count - 1 + shift];
    for &key in &slots.keys {
        for height in rod_heights.iter_mut().take(key + shift) {
            *height += 1;
        }
    }
    let mut rows: Vec<VecDeque<Element>> = vec![VecDeque::new(); slots.count];
    for (&e, &key) in input.iter().zip(&slots.keys) {
        rows[key].push_back(e);
    }
    let mut settled = Vec::with_capacity(n);
    for level in (1..=n).rev() {
        let beads = rod_heights.iter().filter(|&&h| h >= level).count();
        if let Some(e) = rows.get_mut(beads - shift).and_then(VecDeque::pop_front) {
            settled.push(e);
        }
    }
    debug_assert_eq!(settled.len(), n, "every settled row maps to an element");
    if settled.len() == n {
        tape.write_all(&settled);
    } else {
        warn!(settled = settled.len(), n, "gravity rows lost elements; leaving input order");
    }
    tape.finish()
}

/// Beads below the first key: the minimum itself when all values are
/// positive and the largest still fits [`dense_limit`], else one.
fn own_value_shift(min: i64, span: u64, n: usize) -> usize {
    u64::try_from(min)
        .ok()
        .filter(|&m| m > 0 && m.checked_add(span).is_some_and(|top| top <= dense_limit(n)))
        .map_or(1, to_index)
}

/// American flag sort: in-place MSD radix, base 10, each level a
/// cycle-leader permutation into ten digit classes.
#[must_use]
pub fn american_flag(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, lo: usize, hi: usize, min: i64, digit: u32) {
        if hi - lo < 2 {
            return;
        }
        let divisor = 10u64.pow(digit);
        let bounds = permute_by_key(tape, lo, hi, 10, |v| to_index(offset(v, min) / divisor % 10));
        if digit == 0 {
            return;
        }
        for b in 0..10 {
            recurse(tape, bounds[b], bounds[b + 1], min, digit - 1);
        }
    }
    let mut tape = ArrayTape::new("american_flag", input);
    let n = tape.len();
    if let Some((min, span)) = value_range(&mut tape, 0, n) {
        recurse(&mut tape, 0, n, min, decimal_digits(span) - 1);
    }
    tape.finish()
}

/// Flash sort: `m = 0.43 n` classes, cycle-leader permutation into classes,
/// then one insertion pass over the nearly sorted array.
#[must_use]
pub fn flash(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("flash", input);
    let n = tape.len();
    if let Some((min, span)) = value_range(&mut tape, 0, n) {
        if span > 0 {
            let classes = (n * 43 / 100).max(2);
            permute_by_key(&mut tape, 0, n, classes, |v| class_of(v, min, span, classes));
            insertion_range(&mut tape, 0, n);
        }
    }
    tape.finish()
}

/// Spreadsort: in-place bucketing by value range, recursing into buckets
/// larger than [`SPREAD_SMALL`] and insertion-sorting the rest.
#[must_use]
pub fn spread(input: &[Element]) -> ArrayTrace {
    fn recurse(tape: &mut ArrayTape, lo: usize, hi: usize) {
        if hi - lo <= SPREAD_SMALL {
            insertion_range(tape, lo, hi);
            return;
        }
        let Some((min, span)) = value_range(tape, lo, hi) else {
            return;
        };
        if span == 0 {
            return;
        }
        let buckets = ((hi - lo) / 8).max(2);
        let bounds = permute_by_key(tape, lo, hi, buckets, |v| class_of(v, min, span, buckets));
        for b in 0..buckets {
            recurse(tape, bounds[b], bounds[b + 1]);
        }
    }
    let mut tape = ArrayTape::new("spread", input);
    let n = tape.len();
    recurse(&mut tape, 0, n);
    tape.finish()
}
