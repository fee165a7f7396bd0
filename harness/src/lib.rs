//! Algoscope Harness: playback, audio mapping and configuration.
//!
//! The harness consumes finished traces. It never runs algorithms during
//! playback; a trace is produced synchronously by `algoscope_algorithms` and
//! then moved into a [`scheduler::Visualizer`], which applies one step per
//! tick to a [`visual::VisualState`] and plays the step's tone through an
//! injected [`audio::AudioSink`].
//!
//! Hosts own presentation, tone synthesis and input editing. The harness
//! owns timing, cancellation and the value/cell to pitch mapping.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod audio;
pub mod config;
pub mod error;
pub mod generate;
pub mod scheduler;
pub mod visual;

pub use audio::{AudioSink, RecordingAudio, SilentAudio, Tone};
pub use config::{ConfigOverrides, VisualizerConfig};
pub use error::{AudioError, ConfigError, PlaybackError};
pub use scheduler::{Playback, PlaybackHandle, PlaybackState, TickOutcome, Visualizer};
pub use visual::{Frame, SearchOutcome, VisualState};
