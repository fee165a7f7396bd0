//! Sort correctness across every registered sorting algorithm.
//!
//! - Exact sorts end on the ascending order of the input values.
//! - Every position of a non-empty result is marked `sorted` at least once.
//! - Capped sorts succeed whenever the cap covers the whole search space.

use std::collections::BTreeSet;

use algoscope_algorithms::SortAlgorithm;
use algoscope_kernel::model::{values_of, Element, StepKind};
use lock_tests::fixtures::{edge_inputs, max_len_for, random_inputs, sorted_values};
use proptest::prelude::*;

fn final_values(algorithm: SortAlgorithm, input: &[Element]) -> Vec<i64> {
    let trace = algorithm.run(input);
    trace.final_snapshot().map(|s| values_of(s)).unwrap_or_default()
}

fn exact_sorts() -> impl Iterator<Item = SortAlgorithm> {
    SortAlgorithm::ALL.iter().copied().filter(|a| !a.is_lossy())
}

// ---------------------------------------------------------------------------
// Edge inputs
// ---------------------------------------------------------------------------

#[test]
fn exact_sorts_order_edge_inputs() {
    for algorithm in exact_sorts() {
        for (name, input) in edge_inputs() {
            if input.len() > max_len_for(algorithm) {
                continue;
            }
            assert_eq!(
                final_values(algorithm, &input),
                sorted_values(&input),
                "{algorithm} on {name}"
            );
        }
    }
}

#[test]
fn full_range_and_wide_span_inputs_sort() {
    let inputs = [
        Element::from_values(&[i64::MIN, 0, i64::MAX]),
        Element::from_values(&[i64::MAX, i64::MIN]),
        Element::from_values(&[1, 1 << 45]),
        Element::from_values(&[1 << 45, 3, -(1 << 50), 3, 1 << 62]),
    ];
    for algorithm in exact_sorts() {
        for input in &inputs {
            if input.len() > max_len_for(algorithm) {
                continue;
            }
            assert_eq!(
                final_values(algorithm, input),
                sorted_values(input),
                "{algorithm} on {input:?}"
            );
        }
    }
}

#[test]
fn exact_sorts_order_random_inputs() {
    for algorithm in exact_sorts() {
        for (i, input) in random_inputs(40, 40).iter().enumerate() {
            if input.len() > max_len_for(algorithm) {
                continue;
            }
            assert_eq!(
                final_values(algorithm, input),
                sorted_values(input),
                "{algorithm} on random input #{i}"
            );
        }
    }
}

#[test]
fn every_position_is_marked_sorted() {
    for algorithm in exact_sorts() {
        for (name, input) in edge_inputs() {
            if input.is_empty() || input.len() > max_len_for(algorithm) {
                continue;
            }
            let trace = algorithm.run(&input);
            let marked: BTreeSet<usize> = trace
                .of_kind(StepKind::Sorted)
                .flat_map(|s| s.indices.iter().copied())
                .collect();
            assert_eq!(marked.len(), input.len(), "{algorithm} on {name}");
        }
    }
}

#[test]
fn empty_input_yields_empty_trace() {
    for &algorithm in SortAlgorithm::ALL {
        let trace = algorithm.run(&[]);
        assert!(trace.is_empty(), "{algorithm} emitted {} steps", trace.len());
    }
}

#[test]
fn single_element_is_only_marked_sorted() {
    for &algorithm in SortAlgorithm::ALL {
        let input = Element::from_values(&[17]);
        let trace = algorithm.run(&input);
        assert_eq!(trace.final_snapshot(), Some(&input), "{algorithm}");
        assert_eq!(trace.count(StepKind::Sorted), 1, "{algorithm}");
        assert_eq!(trace.count(StepKind::Swap), 0, "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// Capped sorts
// ---------------------------------------------------------------------------

#[test]
fn stupid_sort_succeeds_when_every_permutation_fits_the_cap() {
    for input in random_inputs(30, 7) {
        assert_eq!(final_values(SortAlgorithm::Stupid, &input), sorted_values(&input));
    }
}

#[test]
fn bogo_sort_handles_tiny_inputs() {
    for values in [vec![2, 1], vec![3, 1, 2], vec![4, 3, 2, 1]] {
        let input = Element::from_values(&values);
        assert_eq!(final_values(SortAlgorithm::Bogo, &input), sorted_values(&input));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn exact_sorts_order_arbitrary_values(values in prop::collection::vec(-60i64..60, 0..32)) {
        let input = Element::from_values(&values);
        let mut expected = values.clone();
        expected.sort_unstable();
        for algorithm in exact_sorts() {
            if input.len() > max_len_for(algorithm) {
                continue;
            }
            prop_assert_eq!(final_values(algorithm, &input), expected.clone(), "{}", algorithm);
        }
    }
}
