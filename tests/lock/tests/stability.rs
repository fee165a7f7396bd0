//! Stability lock: every algorithm registered as stable keeps equal values
//! in input order, and selection sort demonstrably does not.

use algoscope_algorithms::SortAlgorithm;
use algoscope_kernel::model::Element;
use lock_tests::fixtures::{edge_inputs, random_inputs, stable_order};

/// The documented stable set. Update deliberately.
const STABLE: &[SortAlgorithm] = &[
    SortAlgorithm::Bubble,
    SortAlgorithm::Insertion,
    SortAlgorithm::Merge,
    SortAlgorithm::Counting,
    SortAlgorithm::Radix,
    SortAlgorithm::Bucket,
    SortAlgorithm::Cocktail,
    SortAlgorithm::Gnome,
    SortAlgorithm::Tim,
    SortAlgorithm::OddEven,
    SortAlgorithm::Strand,
    SortAlgorithm::Library,
    SortAlgorithm::Tree,
    SortAlgorithm::Pigeonhole,
    SortAlgorithm::Patience,
    SortAlgorithm::AdaptiveMerge,
    SortAlgorithm::InPlaceMerge,
    SortAlgorithm::BlockMerge,
];

#[test]
fn registry_stable_set_is_locked() {
    let registered: Vec<_> = SortAlgorithm::ALL
        .iter()
        .copied()
        .filter(|a| a.is_stable())
        .collect();
    assert_eq!(registered, STABLE);
}

#[test]
fn stable_sorts_keep_equal_values_in_input_order() {
    let mut inputs: Vec<Vec<Element>> = edge_inputs().into_iter().map(|(_, e)| e).collect();
    inputs.extend(random_inputs(60, 48));
    for &algorithm in STABLE {
        for input in &inputs {
            let trace = algorithm.run(input);
            let result = trace.final_snapshot().cloned().unwrap_or_default();
            assert_eq!(result, stable_order(input), "{algorithm} on {input:?}");
        }
    }
}

#[test]
fn selection_sort_is_not_stable() {
    // Two equal keys followed by a smaller one: the first swap carries the
    // leading 2 past its twin.
    let input = vec![Element::new(0, 2), Element::new(1, 2), Element::new(2, 1)];
    let trace = SortAlgorithm::Selection.run(&input);
    let result = trace.final_snapshot().cloned().unwrap();
    assert_eq!(
        result,
        vec![Element::new(2, 1), Element::new(1, 2), Element::new(0, 2)]
    );
    assert_ne!(result, stable_order(&input));
}
