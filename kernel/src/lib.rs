//! Algoscope Kernel: the replayable data model behind every visualization.
//!
//! # API Surface
//!
//! - [`model`] -- elements, grids, step records and immutable traces
//! - [`tape`] -- append-only recorders that algorithms write their steps into
//! - [`proof`] -- canonical serialization, trace digests and replay verification
//!
//! # Module Dependency Direction
//!
//! `model` ← `tape` ← `proof`
//!
//! One-way only. `tape` owns a private working copy and produces a
//! [`model::Trace`]; `proof` reads finished traces and never mutates them.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod model;
pub mod proof;
pub mod tape;
