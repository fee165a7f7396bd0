//! Typed harness errors.
//!
//! Configuration and scheduling failures surface before playback starts.
//! Audio failures are returned by the sink but swallowed by the scheduler,
//! so a broken audio backend never stops a visualization.

use algoscope_algorithms::{AlgorithmError, Family};

/// Invalid visualizer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The algorithm id is not registered.
    UnknownAlgorithm(AlgorithmError),
    /// `speed_ms` lies outside `[min, max]`.
    SpeedOutOfRange { speed_ms: u64, min: u64, max: u64 },
    /// `collection_size` lies outside `[min, max]` for this algorithm.
    SizeOutOfRange {
        algorithm: &'static str,
        size: usize,
        min: usize,
        max: usize,
    },
    /// A search algorithm was configured without a target.
    MissingTarget { algorithm: &'static str },
    /// A sort or pathfinding algorithm was configured with a target.
    UnexpectedTarget { algorithm: &'static str },
    /// The algorithm belongs to a different family than the caller needs.
    WrongFamily {
        algorithm: &'static str,
        expected: Family,
        actual: Family,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAlgorithm(inner) => write!(f, "{inner}"),
            Self::SpeedOutOfRange { speed_ms, min, max } => {
                write!(f, "speed {speed_ms} ms outside [{min}, {max}]")
            }
            Self::SizeOutOfRange {
                algorithm,
                size,
                min,
                max,
            } => write!(f, "size {size} outside [{min}, {max}] for {algorithm}"),
            Self::MissingTarget { algorithm } => write!(f, "{algorithm} requires a target"),
            Self::UnexpectedTarget { algorithm } => write!(f, "{algorithm} takes no target"),
            Self::WrongFamily {
                algorithm,
                expected,
                actual,
            } => write!(f, "{algorithm} is a {actual:?} algorithm, expected {expected:?}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownAlgorithm(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<AlgorithmError> for ConfigError {
    fn from(inner: AlgorithmError) -> Self {
        Self::UnknownAlgorithm(inner)
    }
}

/// Failure reported by an [`crate::audio::AudioSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No audio backend could be opened.
    Unavailable { detail: String },
    /// The backend refused the request.
    Rejected { detail: String },
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { detail } => write!(f, "audio unavailable: {detail}"),
            Self::Rejected { detail } => write!(f, "audio request rejected: {detail}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Failure to start playback.
#[derive(Debug)]
pub enum PlaybackError {
    /// The timer worker thread could not be spawned.
    Spawn(std::io::Error),
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to spawn playback worker: {e}"),
        }
    }
}

impl std::error::Error for PlaybackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
        }
    }
}
