//! Replay lock: every trace is explained step by step by its kinds and
//! indices, and every snapshot conserves the input multiset.
//!
//! Stalin sort is the one algorithm allowed to shrink its collection; its
//! snapshots must stay within the input multiset instead.

use algoscope_algorithms::{PathfindAlgorithm, SearchAlgorithm, SortAlgorithm};
use algoscope_kernel::model::{Element, Step, StepKind, Trace};
use algoscope_kernel::proof::replay::{verify_array_trace, verify_grid_trace, ReplayVerdict};
use lock_tests::fixtures::{
    edge_inputs, grid_from_picture, is_subsequence, max_len_for, random_grids, random_inputs,
    same_multiset,
};

fn array_inputs() -> Vec<Vec<Element>> {
    let mut inputs: Vec<Vec<Element>> = edge_inputs().into_iter().map(|(_, e)| e).collect();
    inputs.extend(random_inputs(25, 40));
    inputs
}

#[test]
fn sort_traces_replay() {
    for &algorithm in SortAlgorithm::ALL {
        for input in array_inputs() {
            if input.len() > max_len_for(algorithm) {
                continue;
            }
            let trace = algorithm.run(&input);
            assert_eq!(
                verify_array_trace(&input, &trace),
                ReplayVerdict::Match,
                "{algorithm} on {input:?}"
            );
        }
    }
}

#[test]
fn sort_snapshots_conserve_the_input() {
    for &algorithm in SortAlgorithm::ALL {
        for input in array_inputs() {
            if input.len() > max_len_for(algorithm) {
                continue;
            }
            let trace = algorithm.run(&input);
            for (i, step) in trace.iter().enumerate() {
                let conserved = if algorithm == SortAlgorithm::Stalin {
                    let mut pool = input.clone();
                    step.snapshot.iter().all(|e| {
                        pool.iter().position(|p| p == e).map(|at| pool.swap_remove(at)).is_some()
                    })
                } else {
                    same_multiset(&step.snapshot, &input)
                };
                assert!(conserved, "{algorithm} step {i} fabricated or lost an element");
            }
        }
    }
}

#[test]
fn stalin_result_is_an_ascending_subsequence() {
    for input in array_inputs() {
        let trace = SortAlgorithm::Stalin.run(&input);
        let result = trace.final_snapshot().cloned().unwrap_or_default();
        assert!(result.windows(2).all(|w| w[0].value <= w[1].value), "{result:?}");
        assert!(is_subsequence(&result, &input), "{result:?} from {input:?}");
        if let Some(first) = input.first() {
            assert_eq!(result.first(), Some(first));
        }
    }
}

#[test]
fn search_traces_replay() {
    for input in array_inputs() {
        let targets = [input.first().map_or(0, |e| e.value), 999];
        for &algorithm in SearchAlgorithm::ALL {
            for target in targets {
                let trace = algorithm.run(&input, target);
                assert!(verify_array_trace(&input, &trace).is_match(), "{algorithm}");
                for step in &trace {
                    assert!(same_multiset(&step.snapshot, &input), "{algorithm}");
                }
            }
        }
    }
}

#[test]
fn grid_traces_replay() {
    let mut grids = random_grids(20, 10, 14);
    grids.push(grid_from_picture(&["S#.", "##.", "..E"]));
    for (grid, start, end) in &grids {
        for &algorithm in PathfindAlgorithm::ALL {
            let trace = algorithm.run(grid, *start, *end);
            assert!(verify_grid_trace(grid, &trace).is_match(), "{algorithm}");
        }
    }
}

#[test]
fn tampered_trace_diverges_at_the_tampered_step() {
    let input = Element::from_values(&[4, 3, 2, 1]);
    let trace = SortAlgorithm::Bubble.run(&input);
    let target = trace
        .iter()
        .position(|s| s.kind == StepKind::Compare)
        .unwrap();
    let mut steps: Vec<Step<Vec<Element>>> = trace.steps().to_vec();
    steps[target].snapshot.reverse();
    let tampered = Trace::from_steps("bubble", steps);
    assert!(matches!(
        verify_array_trace(&input, &tampered),
        ReplayVerdict::Divergence { step_index, .. } if step_index == target
    ));
}

#[test]
fn mislabelled_swap_diverges() {
    let input = Element::from_values(&[2, 1]);
    let trace = SortAlgorithm::Bubble.run(&input);
    let mut steps = trace.steps().to_vec();
    let swap = steps.iter().position(|s| s.kind == StepKind::Swap).unwrap();
    steps[swap].kind = StepKind::Compare;
    let tampered = Trace::from_steps("bubble", steps);
    assert!(!verify_array_trace(&input, &tampered).is_match());
}
