//! Pathfinding lock: optimal searches agree on path length, every path is
//! valid, and malformed requests collapse to a single `not_found`.

use algoscope_algorithms::PathfindAlgorithm;
use algoscope_harness::generate::{default_grid, DEFAULT_END, DEFAULT_START};
use algoscope_kernel::model::{Auxiliary, Cell, Coord, Grid, StepKind};
use lock_tests::fixtures::{assert_valid_path, grid_from_picture, path_of, random_grids, shortest_len};

#[test]
fn optimal_searches_match_reference_length() {
    for (i, (grid, start, end)) in random_grids(150, 12, 18).iter().enumerate() {
        let reference = shortest_len(grid, *start, *end);
        for &algorithm in PathfindAlgorithm::ALL {
            let trace = algorithm.run(grid, *start, *end);
            let path = path_of(&trace);
            match reference {
                None => {
                    assert_eq!(trace.terminal().unwrap().kind, StepKind::NotFound, "{algorithm} grid #{i}");
                    assert!(path.is_empty());
                }
                Some(len) => {
                    assert_valid_path(grid, &path, *start, *end);
                    if algorithm.is_optimal() {
                        assert_eq!(path.len(), len, "{algorithm} grid #{i}");
                    } else {
                        assert!(path.len() >= len, "{algorithm} grid #{i}");
                    }
                }
            }
        }
    }
}

#[test]
fn default_grid_is_solved_by_everyone() {
    let grid = default_grid();
    let shortest = DEFAULT_START.manhattan(DEFAULT_END) as usize + 1;
    for &algorithm in PathfindAlgorithm::ALL {
        let trace = algorithm.run(&grid, DEFAULT_START, DEFAULT_END);
        let path = path_of(&trace);
        assert_valid_path(&grid, &path, DEFAULT_START, DEFAULT_END);
        if algorithm.is_optimal() {
            assert_eq!(path.len(), shortest, "{algorithm}");
        }
    }
}

#[test]
fn wall_row_blocks_every_search() {
    let (grid, start, end) = grid_from_picture(&["S..", "###", "..E"]);
    for &algorithm in PathfindAlgorithm::ALL {
        let trace = algorithm.run(&grid, start, end);
        assert_eq!(trace.count(StepKind::NotFound), 1, "{algorithm}");
        assert_eq!(trace.last().unwrap().kind, StepKind::NotFound);
        assert_eq!(trace.count(StepKind::Path), 0);
    }
}

#[test]
fn malformed_requests_yield_a_single_not_found() {
    let mut walled = Grid::new(4, 4);
    walled.set(Coord::new(3, 3), Cell::Wall);
    let open = Grid::new(4, 4);
    let cases = [
        (&open, Coord::new(1, 1), Coord::new(1, 1)),
        (&open, Coord::new(0, 0), Coord::new(4, 0)),
        (&open, Coord::new(0, 9), Coord::new(3, 3)),
        (&walled, Coord::new(0, 0), Coord::new(3, 3)),
        (&walled, Coord::new(3, 3), Coord::new(0, 0)),
    ];
    let empty = Grid::new(0, 0);
    for &algorithm in PathfindAlgorithm::ALL {
        for (grid, start, end) in cases {
            let kinds: Vec<_> = algorithm.run(grid, start, end).iter().map(|s| s.kind).collect();
            assert_eq!(kinds, vec![StepKind::NotFound], "{algorithm} {start}->{end}");
        }
        assert_eq!(algorithm.run(&empty, Coord::new(0, 0), Coord::new(0, 1)).len(), 1);
    }
}

#[test]
fn found_is_followed_only_by_path_steps() {
    let (grid, start, end) = grid_from_picture(&["S...#", ".##.#", "...#E", "#...."]);
    for &algorithm in PathfindAlgorithm::ALL {
        let trace = algorithm.run(&grid, start, end);
        let found = trace.iter().position(|s| s.kind == StepKind::Found).unwrap();
        let tail = &trace.steps()[found + 1..];
        assert!(!tail.is_empty());
        assert!(tail.iter().all(|s| s.kind == StepKind::Path), "{algorithm}");
        if algorithm != PathfindAlgorithm::Bidirectional {
            assert_eq!(trace.steps()[found].cell(), Some(end), "{algorithm}");
        }
    }
}

#[test]
fn bidirectional_uses_side_specific_kinds_and_meets_on_the_path() {
    let (grid, start, end) = grid_from_picture(&["S.....", "......", "......", ".....E"]);
    let trace = PathfindAlgorithm::Bidirectional.run(&grid, start, end);
    assert_eq!(trace.steps()[0].kind, StepKind::VisitStart);
    assert_eq!(trace.steps()[0].cell(), Some(start));
    assert!(trace.count(StepKind::VisitEnd) > 0);
    assert!(trace.count(StepKind::ExploreEnd) > 0);
    assert_eq!(trace.count(StepKind::Visit) + trace.count(StepKind::Explore), 0);
    let meeting = trace.terminal().unwrap().cell().unwrap();
    let path = path_of(&trace);
    assert_eq!(path.iter().filter(|&&c| c == meeting).count(), 1);
}

#[test]
fn dijkstra_and_astar_expand_in_cost_order() {
    for (grid, start, end) in random_grids(40, 10, 14) {
        for algorithm in [PathfindAlgorithm::Dijkstra, PathfindAlgorithm::AStar] {
            let trace = algorithm.run(&grid, start, end);
            let costs: Vec<u32> = trace
                .of_kind(StepKind::Visit)
                .map(|s| match s.auxiliary {
                    Some(Auxiliary::Distance(d) | Auxiliary::FScore(d)) => d,
                    other => panic!("{algorithm} visit carries {other:?}"),
                })
                .collect();
            assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{algorithm}: {costs:?}");
        }
    }
}

#[test]
fn cells_are_visited_at_most_once() {
    for (grid, start, end) in random_grids(40, 10, 14) {
        for &algorithm in PathfindAlgorithm::ALL {
            let trace = algorithm.run(&grid, start, end);
            for kind in [StepKind::Visit, StepKind::VisitStart, StepKind::VisitEnd] {
                let mut cells: Vec<Coord> = trace.of_kind(kind).filter_map(|s| s.cell()).collect();
                let total = cells.len();
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), total, "{algorithm} revisits under {kind}");
            }
            for step in trace.iter().filter(|s| s.kind != StepKind::NotFound) {
                assert!(grid.is_open(step.cell().unwrap()), "{algorithm} touched a wall");
            }
        }
    }
}
