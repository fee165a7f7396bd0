//! Insertion sorts: straight insertion, shell, library (gapped insertion),
//! binary tree.

use std::cmp::Ordering;

use algoscope_kernel::model::{ArrayTrace, Element};
use algoscope_kernel::tape::ArrayTape;

use super::{insertion_range, Placement};

/// Straight insertion sort by adjacent swaps. Stable.
#[must_use]
pub fn insertion(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("insertion", input);
    let n = tape.len();
    insertion_range(&mut tape, 0, n);
    tape.finish()
}

/// Shell sort with gaps halving from `n / 2` down to 1.
#[must_use]
pub fn shell(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("shell", input);
    let n = tape.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && tape.greater(j - gap, j) {
                tape.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
    tape.finish()
}

/// Library sort: insertion into a gapped shelf, rebalanced after every
/// power-of-two round with one gap after each placed element. Stable.
///
/// The shelf lives beside the tape. Elements of the current round stay at
/// their input positions until the round's rebalance writes the shelf order
/// over the inserted prefix.
#[must_use]
pub fn library(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("library", input);
    let n = tape.len();
    if n < 2 {
        return tape.finish();
    }
    let mut position: Vec<usize> = (0..n).collect();
    let mut shelf: Vec<Option<usize>> = vec![Some(0), None];
    let mut inserted = 1;
    let mut round_end = 2;
    while inserted < n {
        let stop = round_end.min(n);
        for source in inserted..stop {
            shelve(&mut tape, &mut shelf, &position, input, source);
        }
        inserted = stop;
        let order: Vec<usize> = shelf.iter().flatten().copied().collect();
        let elements: Vec<Element> = order.iter().map(|&s| input[s]).collect();
        tape.write_run(0, &elements);
        for (rank, &source) in order.iter().enumerate() {
            position[source] = rank;
        }
        shelf = order.iter().flat_map(|&s| [Some(s), None]).collect();
        round_end *= 2;
    }
    tape.finish()
}

/// Insert `source` after every shelved element with a value not greater
/// than its own, shifting right into the nearest gap when the slot is taken.
fn shelve(
    tape: &mut ArrayTape,
    shelf: &mut Vec<Option<usize>>,
    position: &[usize],
    input: &[Element],
    source: usize,
) {
    let occupied: Vec<usize> = (0..shelf.len()).filter(|&i| shelf[i].is_some()).collect();
    let shelved = |slot: usize| shelf[slot].unwrap_or(source);
    let (mut lo, mut hi) = (0, occupied.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let other = shelved(occupied[mid]);
        let roles = vec![position[source], position[other]];
        let ord = tape.compare_values(input[source].value, input[other].value, roles);
        if ord == Ordering::Less {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    let mut slot = if lo == 0 { 0 } else { occupied[lo - 1] + 1 };
    let mut carry = Some(source);
    while carry.is_some() {
        if slot == shelf.len() {
            shelf.push(None);
        }
        carry = std::mem::replace(&mut shelf[slot], carry);
        slot += 1;
    }
}

/// Tree sort: insert every element into a binary search tree (ties go
/// right), then swap elements into in-order positions. Stable.
#[must_use]
pub fn tree(input: &[Element]) -> ArrayTrace {
    let mut tape = ArrayTape::new("tree", input);
    let n = tape.len();
    if n < 2 {
        return tape.finish();
    }
    let mut left: Vec<Option<usize>> = vec![None; n];
    let mut right: Vec<Option<usize>> = vec![None; n];
    for source in 1..n {
        let mut node = 0;
        loop {
            let branch = if tape.less(source, node) {
                &mut left
            } else {
                &mut right
            };
            match branch[node] {
                Some(child) => node = child,
                None => {
                    branch[node] = Some(source);
                    break;
                }
            }
        }
    }

    let mut order = Vec::with_capacity(n);
    let mut stack = Vec::new();
    let mut cursor = Some(0);
    while cursor.is_some() || !stack.is_empty() {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = left[node];
        }
        if let Some(node) = stack.pop() {
            order.push(node);
            cursor = right[node];
        }
    }

    let mut placement = Placement::identity(n);
    for (target, &source) in order.iter().enumerate() {
        placement.place(&mut tape, source, target);
        tape.mark_sorted(target);
    }
    tape.finish()
}
