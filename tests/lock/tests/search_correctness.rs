//! Search correctness across every registered searching algorithm.

use algoscope_algorithms::SearchAlgorithm;
use algoscope_kernel::model::{Auxiliary, Element, StepKind};
use lock_tests::fixtures::{edge_inputs, random_inputs};

fn inputs() -> Vec<Vec<Element>> {
    let mut inputs: Vec<Vec<Element>> = edge_inputs().into_iter().map(|(_, e)| e).collect();
    inputs.extend(random_inputs(80, 50));
    inputs
}

#[test]
fn present_targets_are_found_at_a_matching_position() {
    for input in inputs() {
        for target in input.iter().map(|e| e.value) {
            for &algorithm in SearchAlgorithm::ALL {
                let trace = algorithm.run(&input, target);
                let terminal = trace.terminal().unwrap();
                assert_eq!(terminal.kind, StepKind::Found, "{algorithm} missed {target} in {input:?}");
                let at = terminal.indices[0];
                assert_eq!(terminal.snapshot[at].value, target, "{algorithm}");
            }
        }
    }
}

#[test]
fn absent_targets_end_in_not_found() {
    for input in inputs() {
        for target in [-1_000, 15, 1_000] {
            if input.iter().any(|e| e.value == target) {
                continue;
            }
            for &algorithm in SearchAlgorithm::ALL {
                let trace = algorithm.run(&input, target);
                assert_eq!(trace.count(StepKind::Found), 0, "{algorithm}");
                assert_eq!(trace.count(StepKind::NotFound), 1, "{algorithm}");
                assert!(trace.terminal().unwrap().indices.is_empty());
            }
        }
    }
}

#[test]
fn exactly_one_terminal_step_and_it_is_last() {
    for input in inputs() {
        for &algorithm in SearchAlgorithm::ALL {
            let trace = algorithm.run(&input, 20);
            let terminals = trace.iter().filter(|s| s.kind.is_terminal()).count();
            assert_eq!(terminals, 1, "{algorithm}");
            assert!(trace.last().unwrap().kind.is_terminal(), "{algorithm}");
        }
    }
}

#[test]
fn ordered_searches_begin_with_one_setup_step() {
    let input = Element::from_values(&[9, 2, 7, 4, 4, 1]);
    for &algorithm in SearchAlgorithm::ALL {
        let trace = algorithm.run(&input, 7);
        let setups = trace.count(StepKind::Sorted);
        if algorithm.requires_sorted() {
            assert_eq!(setups, 1, "{algorithm}");
            let first = &trace.steps()[0];
            assert_eq!(first.kind, StepKind::Sorted);
            assert_eq!(first.indices, (0..input.len()).collect::<Vec<_>>());
            let values: Vec<i64> = first.snapshot.iter().map(|e| e.value).collect();
            assert_eq!(values, vec![1, 2, 4, 4, 7, 9]);
        } else {
            assert_eq!(setups, 0);
            assert_eq!(trace.steps()[0].kind, StepKind::Check);
        }
    }
}

#[test]
fn empty_input() {
    for &algorithm in SearchAlgorithm::ALL {
        let kinds: Vec<StepKind> = algorithm.run(&[], 3).iter().map(|s| s.kind).collect();
        let expected = if algorithm.requires_sorted() {
            vec![StepKind::Sorted, StepKind::NotFound]
        } else {
            vec![StepKind::NotFound]
        };
        assert_eq!(kinds, expected, "{algorithm}");
    }
}

#[test]
fn probe_kinds_per_algorithm() {
    let input = Element::from_values(&(0..40).map(|v| v * 3).collect::<Vec<_>>());
    let expect = [
        (SearchAlgorithm::Interpolation, StepKind::Interpolate),
        (SearchAlgorithm::Ternary, StepKind::Ternary),
        (SearchAlgorithm::Fibonacci, StepKind::Fibonacci),
        (SearchAlgorithm::Jump, StepKind::Jump),
        (SearchAlgorithm::Exponential, StepKind::Exponential),
    ];
    for (algorithm, kind) in expect {
        let trace = algorithm.run(&input, 90);
        assert!(trace.count(kind) > 0, "{algorithm} emitted no {kind}");
    }
    for algorithm in [SearchAlgorithm::Interpolation, SearchAlgorithm::Ternary, SearchAlgorithm::Fibonacci] {
        assert_eq!(algorithm.run(&input, 90).count(StepKind::Check), 0, "{algorithm}");
    }
}

#[test]
fn windowed_probes_carry_ranges() {
    let input = Element::from_values(&(0..64).collect::<Vec<_>>());
    for (algorithm, kind) in [
        (SearchAlgorithm::Binary, StepKind::Check),
        (SearchAlgorithm::Interpolation, StepKind::Interpolate),
        (SearchAlgorithm::Ternary, StepKind::Ternary),
    ] {
        let trace = algorithm.run(&input, 50);
        for step in trace.of_kind(kind) {
            let Some(Auxiliary::Range { low, high }) = step.auxiliary else {
                panic!("{algorithm} {kind} step without a range");
            };
            assert!(low <= high && high < input.len());
            assert!(step.indices.iter().all(|&i| (low..=high).contains(&i)));
        }
    }
}

#[test]
fn eliminated_positions_never_hold_the_target() {
    for input in inputs() {
        for target in [0, 5, 12, 29] {
            for algorithm in [SearchAlgorithm::Binary, SearchAlgorithm::Jump, SearchAlgorithm::Exponential] {
                let trace = algorithm.run(&input, target);
                let Some(setup) = trace.steps().first() else { continue };
                let sorted = &setup.snapshot;
                for step in trace.of_kind(StepKind::Eliminate) {
                    for &i in &step.indices {
                        assert_ne!(sorted[i].value, target, "{algorithm} eliminated {i}");
                    }
                }
            }
        }
    }
}
