//! Termination lock: capped sorts stop within their budgets, give-ups carry
//! no `sorted` markers, and every other sort finishes on the largest inputs
//! these tests use.

use algoscope_algorithms::sort::novelty::{BOGO_ATTEMPTS, STUPID_PERMUTATIONS};
use algoscope_algorithms::SortAlgorithm;
use algoscope_kernel::model::{Element, StepKind};
use lock_tests::fixtures::{max_len_for, same_multiset};

fn reversed(n: usize) -> Vec<Element> {
    let values: Vec<i64> = (0..n as i64).rev().collect();
    Element::from_values(&values)
}

#[test]
fn bogo_trace_is_bounded_by_its_attempt_budget() {
    for n in [0, 1, 2, 5, 9, 14] {
        let trace = SortAlgorithm::Bogo.run(&reversed(n));
        let per_attempt = 2 * n.saturating_sub(1);
        assert!(
            trace.len() <= (BOGO_ATTEMPTS + 1) * per_attempt + n,
            "bogo n={n} recorded {} steps",
            trace.len()
        );
    }
}

#[test]
fn stupid_trace_is_bounded_by_its_permutation_budget() {
    for n in [0, 1, 3, 6, 7, 10] {
        let trace = SortAlgorithm::Stupid.run(&reversed(n));
        assert!(trace.count(StepKind::Swap) < STUPID_PERMUTATIONS, "stupid n={n}");
        assert!(trace.len() <= STUPID_PERMUTATIONS * n + n, "stupid n={n}");
    }
}

#[test]
fn give_ups_leave_no_sorted_markers_and_keep_every_element() {
    let input = reversed(12);
    for algorithm in [SortAlgorithm::Bogo, SortAlgorithm::Stupid] {
        let trace = algorithm.run(&input);
        assert_eq!(trace.count(StepKind::Sorted), 0, "{algorithm}");
        let last = trace.final_snapshot().unwrap();
        assert!(same_multiset(last, &input), "{algorithm}");
    }
}

#[test]
fn capped_sorts_succeed_when_already_sorted() {
    let values: Vec<i64> = (0..12).collect();
    let input = Element::from_values(&values);
    for algorithm in [SortAlgorithm::Bogo, SortAlgorithm::Stupid] {
        let trace = algorithm.run(&input);
        assert_eq!(trace.count(StepKind::Swap), 0, "{algorithm}");
        assert_eq!(trace.count(StepKind::Sorted), 12, "{algorithm}");
    }
}

#[test]
fn every_other_sort_finishes_on_reversed_input() {
    let input = reversed(64);
    for &algorithm in SortAlgorithm::ALL {
        if max_len_for(algorithm) < input.len() {
            continue;
        }
        let trace = algorithm.run(&input);
        let last = trace.final_snapshot().unwrap();
        assert!(last.len() <= input.len(), "{algorithm}");
        assert!(trace.count(StepKind::Sorted) > 0, "{algorithm}");
    }
}
