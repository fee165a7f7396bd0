//! Prints one `id=digest` line per registered algorithm over the fixed
//! lock-test inputs.
//!
//! The cross-process determinism test runs this binary under several
//! environments and compares its output with the in-process digests.
//!
//! Usage: `trace_fixture`

fn main() {
    for line in lock_tests::fixtures::digest_lines() {
        println!("{line}");
    }
}
