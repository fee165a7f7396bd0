//! Append-only recorders.
//!
//! An algorithm owns exactly one tape for the duration of its run. The tape
//! owns the private working copy, so every step's snapshot is taken from the
//! state the algorithm actually mutated. Finishing a tape yields an
//! immutable [`crate::model::Trace`].

pub mod array_tape;
pub mod grid_tape;

pub use array_tape::ArrayTape;
pub use grid_tape::GridTape;
