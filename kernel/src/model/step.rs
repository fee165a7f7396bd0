//! Step records: the atomic unit of replayable history.

use std::fmt;
use std::sync::Arc;

use super::grid::Grid;

/// Which algorithm family a [`StepKind`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFamily {
    Sort,
    Search,
    Pathfind,
    /// `found` / `not_found` are shared by search and pathfinding.
    Terminal,
}

/// What a step did.
///
/// One enum serves every family so a single renderer can consume any trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    // sorting
    Compare,
    Swap,
    Overwrite,
    Pivot,
    Sorted,
    // searching
    Check,
    Eliminate,
    Interpolate,
    Jump,
    Exponential,
    Ternary,
    Fibonacci,
    // terminal
    Found,
    NotFound,
    // pathfinding
    Visit,
    Explore,
    Path,
    VisitStart,
    VisitEnd,
    ExploreStart,
    ExploreEnd,
}

impl StepKind {
    /// Every kind in declaration order.
    pub const ALL: &'static [StepKind] = &[
        Self::Compare,
        Self::Swap,
        Self::Overwrite,
        Self::Pivot,
        Self::Sorted,
        Self::Check,
        Self::Eliminate,
        Self::Interpolate,
        Self::Jump,
        Self::Exponential,
        Self::Ternary,
        Self::Fibonacci,
        Self::Found,
        Self::NotFound,
        Self::Visit,
        Self::Explore,
        Self::Path,
        Self::VisitStart,
        Self::VisitEnd,
        Self::ExploreStart,
        Self::ExploreEnd,
    ];

    /// Stable snake_case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Overwrite => "overwrite",
            Self::Pivot => "pivot",
            Self::Sorted => "sorted",
            Self::Check => "check",
            Self::Eliminate => "eliminate",
            Self::Interpolate => "interpolate",
            Self::Jump => "jump",
            Self::Exponential => "exponential",
            Self::Ternary => "ternary",
            Self::Fibonacci => "fibonacci",
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::Visit => "visit",
            Self::Explore => "explore",
            Self::Path => "path",
            Self::VisitStart => "visit_start",
            Self::VisitEnd => "visit_end",
            Self::ExploreStart => "explore_start",
            Self::ExploreEnd => "explore_end",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    #[must_use]
    pub const fn family(self) -> StepFamily {
        match self {
            Self::Compare | Self::Swap | Self::Overwrite | Self::Pivot | Self::Sorted => {
                StepFamily::Sort
            }
            Self::Check
            | Self::Eliminate
            | Self::Interpolate
            | Self::Jump
            | Self::Exponential
            | Self::Ternary
            | Self::Fibonacci => StepFamily::Search,
            Self::Found | Self::NotFound => StepFamily::Terminal,
            Self::Visit
            | Self::Explore
            | Self::Path
            | Self::VisitStart
            | Self::VisitEnd
            | Self::ExploreStart
            | Self::ExploreEnd => StepFamily::Pathfind,
        }
    }

    /// `true` for kinds whose snapshot may differ from the previous one.
    ///
    /// `Sorted` mutates only as the search setup step, where it rearranges
    /// exactly the positions it lists.
    #[must_use]
    pub const fn may_mutate(self) -> bool {
        matches!(self, Self::Swap | Self::Overwrite | Self::Sorted)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::NotFound)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-step payload beyond indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auxiliary {
    /// Inclusive search window `[low, high]`.
    Range { low: usize, high: usize },
    /// Dijkstra tentative distance.
    Distance(u32),
    /// A* `g + h`.
    FScore(u32),
    /// Greedy best-first heuristic.
    Heuristic(u32),
}

/// State captured after a step.
///
/// Implemented for element arrays and frozen grids; both encodings are
/// defined in [`crate::proof::canon`].
pub trait Snapshot: Clone {
    /// Append the canonical JSON of this snapshot to `out`.
    fn encode_canonical(&self, out: &mut Vec<u8>);
}

/// One recorded step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S> {
    pub kind: StepKind,
    /// Positions (or `[row, col]`) the step concerns; order carries roles.
    pub indices: Vec<usize>,
    /// Full state immediately after this step's effect.
    pub snapshot: S,
    pub auxiliary: Option<Auxiliary>,
}

impl Step<Arc<Grid>> {
    /// The `[row, col]` cell of a grid step, if any.
    #[must_use]
    pub fn cell(&self) -> Option<super::grid::Coord> {
        match self.indices.as_slice() {
            [row, col] => Some(super::grid::Coord::new(*row, *col)),
            _ => None,
        }
    }
}
