//! Typed algorithm lookup errors.
//!
//! Runtime conditions inside a procedure (malformed grids, capped give-ups)
//! never error; they are expressed in the trace itself. `AlgorithmError`
//! covers only failures before any procedure runs.

/// Failure to resolve an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// No registered algorithm has this id.
    UnknownAlgorithm { id: String },
}

impl std::fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAlgorithm { id } => write!(f, "unknown algorithm id: {id:?}"),
        }
    }
}

impl std::error::Error for AlgorithmError {}
