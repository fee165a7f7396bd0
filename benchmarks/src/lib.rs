//! Shared workloads and trace statistics for the algoscope benchmark suites.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use algoscope_algorithms::SortAlgorithm;
use algoscope_harness::generate::{random_grid, shuffled_elements, DEFAULT_DENSITY};
use algoscope_kernel::model::{ArrayTrace, Coord, Element, Grid, Snapshot, StepKind, Trace};
use algoscope_kernel::proof::canon::step_bytes;

/// Seed shared by every generated workload.
pub const BENCH_SEED: u64 = 0xA160_5C0E;

/// Shape of a sort input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Uniform shuffle of evenly spaced values.
    Shuffled,
    /// Strictly descending.
    Reversed,
    /// Ascending with every eighth pair exchanged.
    NearlySorted,
    /// Eight distinct values repeated.
    FewUnique,
}

impl Regime {
    pub const ALL: &[Regime] = &[
        Regime::Shuffled,
        Regime::Reversed,
        Regime::NearlySorted,
        Regime::FewUnique,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shuffled => "shuffled",
            Self::Reversed => "reversed",
            Self::NearlySorted => "nearly_sorted",
            Self::FewUnique => "few_unique",
        }
    }

    /// Deterministic input of `size` elements in this regime.
    #[must_use]
    pub fn input(self, size: usize) -> Vec<Element> {
        let mut rng = SmallRng::seed_from_u64(BENCH_SEED ^ size as u64);
        match self {
            Self::Shuffled => shuffled_elements(size, &mut rng),
            Self::Reversed => {
                let mut values: Vec<i64> = shuffled_elements(size, &mut rng).iter().map(|e| e.value).collect();
                values.sort_unstable_by(|a, b| b.cmp(a));
                Element::from_values(&values)
            }
            Self::NearlySorted => {
                let mut values: Vec<i64> = shuffled_elements(size, &mut rng).iter().map(|e| e.value).collect();
                values.sort_unstable();
                for i in (1..values.len()).step_by(8) {
                    values.swap(i - 1, i);
                }
                Element::from_values(&values)
            }
            Self::FewUnique => {
                let values: Vec<i64> = shuffled_elements(size, &mut rng)
                    .iter()
                    .map(|e| e.value % 8)
                    .collect();
                Element::from_values(&values)
            }
        }
    }
}

/// Largest input a sort is benchmarked on, capped for the exponential ones.
#[must_use]
pub fn bench_size(algorithm: SortAlgorithm, requested: usize) -> usize {
    match algorithm {
        SortAlgorithm::Bogo | SortAlgorithm::Stupid => requested.min(6),
        SortAlgorithm::Stooge => requested.min(48),
        _ => requested,
    }
}

/// Seeded random grid with corner endpoints.
#[must_use]
pub fn bench_grid(rows: usize, cols: usize, seed: u64) -> (Grid, Coord, Coord) {
    let mut rng = SmallRng::seed_from_u64(BENCH_SEED ^ seed);
    let (start, end) = (Coord::new(0, 0), Coord::new(rows - 1, cols - 1));
    (random_grid(rows, cols, start, end, DEFAULT_DENSITY, &mut rng), start, end)
}

/// Counts of the operations a sort trace recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub steps: usize,
    pub compares: usize,
    pub swaps: usize,
    pub overwrites: usize,
}

impl TraceStats {
    #[must_use]
    pub fn of(trace: &ArrayTrace) -> Self {
        Self {
            steps: trace.len(),
            compares: trace.count(StepKind::Compare),
            swaps: trace.count(StepKind::Swap),
            overwrites: trace.count(StepKind::Overwrite),
        }
    }

    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        serde_json::json!({
            "compares": self.compares,
            "overwrites": self.overwrites,
            "steps": self.steps,
            "swaps": self.swaps,
        })
    }
}

/// Total canonical bytes the digest of `trace` hashes, header excluded.
#[must_use]
pub fn canonical_size<S: Snapshot>(trace: &Trace<S>) -> usize {
    trace
        .iter()
        .map(|step| step_bytes(step).len())
        .sum()
}
