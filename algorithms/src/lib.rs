//! Algoscope Algorithms: step-emitting sorting, searching and pathfinding.
//!
//! Every procedure is pure: it copies its input into a kernel tape, runs to
//! completion and returns an immutable trace. Nothing here sleeps, spawns or
//! touches audio; pacing belongs to the harness.
//!
//! # Crate dependency graph
//!
//! ```text
//! algoscope_kernel  ←  algoscope_algorithms  ←  algoscope_harness
//! (model, tapes)       (procedures, registry)   (playback, audio, config)
//! ```
//!
//! # Entry points
//!
//! - [`registry::SortAlgorithm`], [`registry::SearchAlgorithm`],
//!   [`registry::PathfindAlgorithm`] -- id lookup and dispatch
//! - [`sort`], [`search`], [`pathfind`] -- the procedures themselves

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod pathfind;
pub mod registry;
pub mod search;
pub mod sort;

pub use error::AlgorithmError;
pub use registry::{Algorithm, Family, PathfindAlgorithm, SearchAlgorithm, SortAlgorithm};
