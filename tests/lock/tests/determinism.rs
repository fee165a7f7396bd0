//! Determinism lock: equal inputs give byte-identical traces and digests,
//! within one process and across processes with different environments.

use std::path::Path;
use std::process::Command;

use algoscope_algorithms::{PathfindAlgorithm, SearchAlgorithm, SortAlgorithm};
use algoscope_kernel::model::Element;
use lock_tests::fixtures::{digest_lines, max_len_for, random_grids, random_inputs};

// ---------------------------------------------------------------------------
// In-process
// ---------------------------------------------------------------------------

#[test]
fn repeated_sort_runs_are_identical() {
    for input in random_inputs(6, 24) {
        for &algorithm in SortAlgorithm::ALL {
            let input = &input[..input.len().min(max_len_for(algorithm))];
            let a = algorithm.run(input);
            let b = algorithm.run(input);
            assert_eq!(a, b, "{algorithm}");
            assert_eq!(a.digest(), b.digest(), "{algorithm}");
        }
    }
}

#[test]
fn repeated_search_and_pathfind_runs_are_identical() {
    let sorted = Element::from_values(&[-4, 0, 3, 3, 8, 15, 21, 22, 40]);
    for &algorithm in SearchAlgorithm::ALL {
        for target in [-4, 3, 22, 40, 7] {
            assert_eq!(algorithm.run(&sorted, target), algorithm.run(&sorted, target), "{algorithm}");
        }
    }
    for (grid, start, end) in random_grids(8, 9, 13) {
        for &algorithm in PathfindAlgorithm::ALL {
            let a = algorithm.run(&grid, start, end).digest();
            let b = algorithm.run(&grid, start, end).digest();
            assert_eq!(a, b, "{algorithm}");
        }
    }
}

#[test]
fn digests_distinguish_algorithms_and_inputs() {
    let input = Element::from_values(&[4, 1, 3, 2]);
    let bubble = SortAlgorithm::Bubble.run(&input).digest();
    let cocktail = SortAlgorithm::Cocktail.run(&input).digest();
    assert_ne!(bubble, cocktail);
    let other = SortAlgorithm::Bubble.run(&Element::from_values(&[4, 1, 2, 3])).digest();
    assert_ne!(bubble, other);
}

#[test]
fn digest_lines_are_stable_and_well_formed() {
    let lines = digest_lines();
    assert_eq!(lines, digest_lines());
    let expected = SortAlgorithm::ALL.len() + 2 * SearchAlgorithm::ALL.len() + 2 * PathfindAlgorithm::ALL.len();
    assert_eq!(lines.len(), expected);
    for line in &lines {
        let (_, digest) = line.split_once('=').unwrap();
        assert!(digest.starts_with("sha256:"), "{line}");
        assert_eq!(digest.len(), "sha256:".len() + 64, "{line}");
    }
}

// ---------------------------------------------------------------------------
// Cross-process
// ---------------------------------------------------------------------------

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run `trace_fixture` with the given cwd and environment overrides.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_trace_fixture");
    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "trace_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_digests_match_in_process() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    let in_process: String = digest_lines().iter().map(|l| format!("{l}\n")).collect();
    assert_eq!(baseline, in_process);

    let alt_cwd = std::env::temp_dir();
    let variant_cwd = run_variant(&alt_cwd.to_string_lossy(), &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes");

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[("RUST_LOG", "trace"), ("RUST_BACKTRACE", "1"), ("ALGOSCOPE_NOISE", "x")],
    );
    assert_eq!(baseline, variant_noise, "output differs with noisy environment");
}
