//! Shared fixtures for the cross-crate lock tests.
//!
//! Inputs here are fixed or seeded so every test run sees the same
//! collections and grids. `trace_fixture` uses the same inputs, which is
//! what lets the cross-process test compare digests line by line.

#![forbid(unsafe_code)]
