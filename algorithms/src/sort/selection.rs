//! Select-and-place sorts: selection, min-max selection, heap, smooth,
//! cycle, pancake, tournament.

use std::cmp::Ordering;

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

use super::{heapsort_range, reverse, Placement};

/// Selection sort. Not stable.
///
/// Comparisons are recorded as `[scan_start, current_min, candidate]`.
#[must_use]
pub fn selection(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("selection", input);
    let n = tape.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            let (candidate, current) = (tape.value(j), tape.value(min));
            if tape.compare_values(candidate, current, vec![i, min, j]) == Ordering::Less {
                min = j;
            }
        }
        tape.swap(i, min);
        tape.mark_sorted(i);
    }
    tape.finish()
}

/// Double-ended selection: each pass places both the minimum and the
/// maximum of the unsorted middle.
#[must_use]
pub fn min_max_selection(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("min_max_selection", input);
    let (mut lo, mut hi) = (0, tape.len());
    while hi - lo > 1 {
        let (mut min, mut max) = (lo, lo);
        for j in lo + 1..hi {
            if tape.less(j, min) {
                min = j;
            }
            if tape.greater(j, max) {
                max = j;
            }
        }
        tape.swap(lo, min);
        if max == lo {
            max = min;
        }
        tape.swap(hi - 1, max);
        tape.mark_sorted(lo);
        tape.mark_sorted(hi - 1);
        lo += 1;
        hi -= 1;
    }
    tape.finish()
}

/// Heapsort: build a max-heap, then repeatedly move the root behind the heap.
#[must_use]
pub fn heap(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("heap", input);
    let n = tape.len();
    heapsort_range(&mut tape, 0, n, true);
    tape.finish()
}

/// Smoothsort stand-in: runs heapsort and labels the trace `smooth`.
#[must_use]
pub fn smooth(input: &[Element]) -> ArrayTrace {
    heap(input).relabel("smooth")
}

/// Cycle sort: rotates every cycle of the permutation into place, writing
/// each element at most once.
#[must_use]
pub fn cycle(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("cycle", input);
    let n = tape.len();
    for start in 0..n.saturating_sub(1) {
        loop {
            let mut pos = start;
            for i in start + 1..n {
                if tape.less(i, start) {
                    pos += 1;
                }
            }
            if pos == start {
                break;
            }
            while tape.compare(pos, start) == Ordering::Equal {
                pos += 1;
            }
            tape.swap(start, pos);
            tape.mark_sorted(pos);
        }
        tape.mark_sorted(start);
    }
    tape.finish()
}

/// Pancake sort: only prefix reversals ("flips") move elements.
#[must_use]
pub fn pancake(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("pancake", input);
    for size in (2..=tape.len()).rev() {
        let mut max = 0;
        for i in 1..size {
            if tape.greater(i, max) {
                max = i;
            }
        }
        if max != size - 1 {
            reverse(&mut tape, 0, max + 1);
            reverse(&mut tape, 0, size);
        }
        tape.mark_sorted(size - 1);
    }
    tape.finish()
}

/// Tournament sort over a winner tree.
///
/// Leaves hold input elements; exhausted leaves become an internal `+inf`
/// sentinel (`None`) that never reaches the array. Each winner is swapped
/// into its final position.
#[must_use]
pub fn tournament(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("tournament", input);
    let n = tape.len();
    if n < 2 {
        return tape.finish();
    }
    let values: Vec<i64> = input.iter().map(|e| e.value).collect();
    let leaves = n.next_power_of_two();
    let mut tree: Vec<Option<usize>> = vec![None; 2 * leaves];
    for (source, slot) in tree[leaves..leaves + n].iter_mut().enumerate() {
        *slot = Some(source);
    }
    let mut placement = Placement::identity(n);

    let play = |tape: &mut ArrayTape, placement: &Placement, a: Option<usize>, b: Option<usize>| {
        match (a, b) {
            (Some(x), Some(y)) => {
                let roles = vec![placement.position(x), placement.position(y)];
                if tape.compare_values(values[y], values[x], roles) == Ordering::Less {
                    Some(y)
                } else {
                    Some(x)
                }
            }
            (Some(x), None) => Some(x),
            (None, other) => other,
        }
    };

    for node in (1..leaves).rev() {
        tree[node] = play(&mut tape, &placement, tree[2 * node], tree[2 * node + 1]);
    }
    for target in 0..n {
        let Some(winner) = tree[1] else { break };
        placement.place(&mut tape, winner, target);
        tape.mark_sorted(target);
        let mut node = leaves + winner;
        tree[node] = None;
        while node > 1 {
            node /= 2;
            tree[node] = play(&mut tape, &placement, tree[2 * node], tree[2 * node + 1]);
        }
    }
    tape.finish()
}
