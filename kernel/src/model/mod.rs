//! Model module: the values that flow through a recorded run.
//!
//! Depends on nothing internal. Everything here is plain data; recording
//! lives in [`crate::tape`] and verification in [`crate::proof`].

pub mod element;
pub mod grid;
pub mod step;
pub mod trace;

pub use element::{values_of, Element};
pub use grid::{Cell, Coord, Grid, GridError};
pub use step::{Auxiliary, Snapshot, Step, StepFamily, StepKind};
pub use trace::{ArrayTrace, GridTrace, Trace};
