//! Visualizer configuration with per-algorithm defaults and bounds.
//!
//! A [`VisualizerConfig`] is only constructed through validation, so a
//! value in hand is always runnable. Defaults mirror the cost class of each
//! algorithm: quadratic sorts get smaller inputs than `n log n` ones, and
//! the exponential sorts are held to tiny inputs.

use std::time::Duration;

use algoscope_algorithms::{Algorithm, Family, SearchAlgorithm, SortAlgorithm};

use crate::error::ConfigError;

/// Fastest allowed tick interval.
pub const MIN_SPEED_MS: u64 = 1;
/// Slowest allowed tick interval.
pub const MAX_SPEED_MS: u64 = 2000;
/// Smallest array a sort or search accepts.
pub const MIN_SIZE: usize = 1;
/// Largest array a sort or search accepts.
pub const MAX_SIZE: usize = 300;

/// Tick interval for every pathfinding algorithm.
const PATHFIND_SPEED_MS: u64 = 10;

/// Validated configuration for one visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerConfig {
    algorithm: Algorithm,
    speed_ms: u64,
    collection_size: usize,
    target: Option<i64>,
}

/// Caller overrides applied on top of the algorithm's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `None` keeps the default speed.
    pub speed_ms: Option<u64>,
    /// `None` keeps the default size.
    pub collection_size: Option<usize>,
    /// Required for searches, rejected otherwise.
    pub target: Option<i64>,
}

impl VisualizerConfig {
    /// Validate an explicit configuration.
    ///
    /// Pathfinding ignores `collection_size`; the grid defines its extent.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for an unknown id, an out-of-range speed or size, or
    /// a target supplied to (or missing from) the wrong family.
    pub fn new(
        algorithm_id: &str,
        speed_ms: u64,
        collection_size: usize,
        target: Option<i64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            algorithm: Algorithm::from_id(algorithm_id)?,
            speed_ms,
            collection_size,
            target,
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults for `algorithm_id` with `overrides` applied, then validated.
    ///
    /// # Errors
    ///
    /// As [`VisualizerConfig::new`].
    pub fn with_defaults(algorithm_id: &str, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let algorithm = Algorithm::from_id(algorithm_id)?;
        let (speed_ms, collection_size) = defaults(algorithm);
        Self::new(
            algorithm_id,
            overrides.speed_ms.unwrap_or(speed_ms),
            overrides.collection_size.unwrap_or(collection_size),
            overrides.target,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let id = self.algorithm.id();
        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&self.speed_ms) {
            return Err(ConfigError::SpeedOutOfRange {
                speed_ms: self.speed_ms,
                min: MIN_SPEED_MS,
                max: MAX_SPEED_MS,
            });
        }
        if let Some(max) = max_size(self.algorithm) {
            if !(MIN_SIZE..=max).contains(&self.collection_size) {
                return Err(ConfigError::SizeOutOfRange {
                    algorithm: id,
                    size: self.collection_size,
                    min: MIN_SIZE,
                    max,
                });
            }
        }
        match (self.algorithm.family(), self.target) {
            (Family::Search, None) => Err(ConfigError::MissingTarget { algorithm: id }),
            (Family::Sort | Family::Pathfind, Some(_)) => {
                Err(ConfigError::UnexpectedTarget { algorithm: id })
            }
            _ => Ok(()),
        }
    }

    /// Fail unless the configured algorithm belongs to `expected`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WrongFamily`] on mismatch.
    pub fn expect_family(&self, expected: Family) -> Result<(), ConfigError> {
        let actual = self.algorithm.family();
        if actual == expected {
            Ok(())
        } else {
            Err(ConfigError::WrongFamily {
                algorithm: self.algorithm.id(),
                expected,
                actual,
            })
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn algorithm_id(&self) -> &'static str {
        self.algorithm.id()
    }

    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// The tick interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    #[must_use]
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    #[must_use]
    pub fn target(&self) -> Option<i64> {
        self.target
    }
}

/// `(speed_ms, collection_size)` defaults.
fn defaults(algorithm: Algorithm) -> (u64, usize) {
    match algorithm {
        Algorithm::Sort(sort) => sort_defaults(sort),
        Algorithm::Search(search) => match search {
            SearchAlgorithm::Linear => (100, 150),
            SearchAlgorithm::Jump => (150, 150),
            SearchAlgorithm::Exponential => (150, 200),
            SearchAlgorithm::Binary
            | SearchAlgorithm::Interpolation
            | SearchAlgorithm::Ternary
            | SearchAlgorithm::Fibonacci => (200, 200),
        },
        Algorithm::Pathfind(_) => (PATHFIND_SPEED_MS, 0),
    }
}

fn sort_defaults(sort: SortAlgorithm) -> (u64, usize) {
    use SortAlgorithm as S;
    match sort {
        S::Bogo | S::Stupid => (200, 6),
        S::Stooge => (20, 32),
        S::Bubble
        | S::Selection
        | S::Insertion
        | S::Cocktail
        | S::Gnome
        | S::OddEven
        | S::Cycle
        | S::Pancake
        | S::MinMaxSelection
        | S::Strand
        | S::Library
        | S::Stalin => (20, 50),
        S::Bitonic | S::OddEvenMerge | S::PairwiseNetwork => (15, 64),
        _ => (10, 100),
    }
}

/// Upper size bound, `None` where size does not apply.
fn max_size(algorithm: Algorithm) -> Option<usize> {
    match algorithm {
        Algorithm::Sort(SortAlgorithm::Bogo | SortAlgorithm::Stupid) => Some(8),
        Algorithm::Sort(SortAlgorithm::Stooge) => Some(64),
        Algorithm::Sort(_) | Algorithm::Search(_) => Some(MAX_SIZE),
        Algorithm::Pathfind(_) => None,
    }
}
