//! Scenario lock: exact step sequences for small, hand-checked runs.

use algoscope_algorithms::{PathfindAlgorithm, SearchAlgorithm, SortAlgorithm};
use algoscope_kernel::model::{values_of, Auxiliary, Element, StepKind};
use lock_tests::fixtures::{grid_from_picture, path_of};

use algoscope_kernel::model::StepKind::{
    Check, Compare, Eliminate, Explore, Found, Path, Sorted, Swap, Visit,
};

fn shape(trace: &algoscope_kernel::model::ArrayTrace) -> Vec<(StepKind, Vec<usize>)> {
    trace.iter().map(|s| (s.kind, s.indices.clone())).collect()
}

#[test]
fn bubble_sort_of_five() {
    let input = Element::from_values(&[50, 10, 80, 20, 60]);
    let trace = SortAlgorithm::Bubble.run(&input);
    let expected = vec![
        (Compare, vec![0, 1]),
        (Swap, vec![0, 1]),
        (Compare, vec![1, 2]),
        (Compare, vec![2, 3]),
        (Swap, vec![2, 3]),
        (Compare, vec![3, 4]),
        (Swap, vec![3, 4]),
        (Sorted, vec![4]),
        (Compare, vec![0, 1]),
        (Compare, vec![1, 2]),
        (Swap, vec![1, 2]),
        (Compare, vec![2, 3]),
        (Sorted, vec![3]),
        (Compare, vec![0, 1]),
        (Compare, vec![1, 2]),
        (Sorted, vec![2]),
        (Sorted, vec![0]),
        (Sorted, vec![1]),
    ];
    assert_eq!(shape(&trace), expected);
    assert_eq!(values_of(&trace.steps()[1].snapshot), vec![10, 50, 80, 20, 60]);
    assert_eq!(values_of(trace.final_snapshot().unwrap()), vec![10, 20, 50, 60, 80]);
}

#[test]
fn linear_search_scans_in_input_order() {
    let input = Element::from_values(&[5, 3, 8]);
    let trace = SearchAlgorithm::Linear.run(&input, 8);
    let expected = vec![(Check, vec![0]), (Check, vec![1]), (Check, vec![2]), (Found, vec![2])];
    assert_eq!(shape(&trace), expected);
}

#[test]
fn binary_search_narrows_its_window() {
    let input = Element::from_values(&[11, 1, 9, 3, 7, 5]);
    let trace = SearchAlgorithm::Binary.run(&input, 7);
    let expected = vec![
        (Sorted, vec![0, 1, 2, 3, 4, 5]),
        (Check, vec![2]),
        (Eliminate, vec![0, 1, 2]),
        (Check, vec![4]),
        (Eliminate, vec![4, 5]),
        (Check, vec![3]),
        (Found, vec![3]),
    ];
    assert_eq!(shape(&trace), expected);
    let windows: Vec<_> = trace.of_kind(Check).map(|s| s.auxiliary).collect();
    assert_eq!(
        windows,
        vec![
            Some(Auxiliary::Range { low: 0, high: 5 }),
            Some(Auxiliary::Range { low: 3, high: 5 }),
            Some(Auxiliary::Range { low: 3, high: 3 }),
        ]
    );
    assert_eq!(values_of(&trace.steps()[0].snapshot), vec![1, 3, 5, 7, 9, 11]);
}

#[test]
fn bfs_across_an_open_strip() {
    let (grid, start, end) = grid_from_picture(&["S..E"]);
    let trace = PathfindAlgorithm::Bfs.run(&grid, start, end);
    let kinds: Vec<StepKind> = trace.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![Visit, Explore, Visit, Explore, Visit, Explore, Visit, Found, Path, Path, Path, Path]
    );
    assert_eq!(path_of(&trace).len(), 4);
}
