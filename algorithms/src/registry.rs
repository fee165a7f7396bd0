//! Algorithm registry: stable ids, display labels and dispatch.
//!
//! Each family is one enum generated by [`define_family!`], so the variant
//! list, `ALL`, the id table and the procedure table cannot drift apart.
//! Ids are the snake_case names used by configuration and logs.

use std::str::FromStr;

use algoscope_kernel::model::{ArrayTrace, Coord, Element, Grid, GridTrace};

use crate::error::AlgorithmError;
use crate::{pathfind, search, sort};

macro_rules! define_family {
    (
        $(#[$enum_meta:meta])*
        $name:ident: $procedure:ty;
        $(
            $variant:ident => ($id:literal, $label:literal, $path:path)
        ),+ $(,)?
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &[$name] = &[
                $( Self::$variant, )+
            ];

            /// Stable snake_case id.
            #[must_use]
            pub const fn id(self) -> &'static str {
                match self {
                    $( Self::$variant => $id, )+
                }
            }

            /// Human-readable name.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// The procedure behind this variant.
            #[must_use]
            pub fn procedure(self) -> $procedure {
                match self {
                    $( Self::$variant => $path, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = AlgorithmError;

            fn from_str(id: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|a| a.id() == id)
                    .ok_or_else(|| AlgorithmError::UnknownAlgorithm { id: id.to_owned() })
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

/// Procedure signature of the sorting family.
pub type SortFn = fn(&[Element]) -> ArrayTrace;
/// Procedure signature of the searching family.
pub type SearchFn = fn(&[Element], i64) -> ArrayTrace;
/// Procedure signature of the pathfinding family.
pub type PathfindFn = fn(&Grid, Coord, Coord) -> GridTrace;

define_family! {
    /// The sorting algorithms.
    SortAlgorithm: SortFn;
    Bubble => ("bubble", "Bubble Sort", sort::exchange::bubble),
    Selection => ("selection", "Selection Sort", sort::selection::selection),
    Insertion => ("insertion", "Insertion Sort", sort::insertion::insertion),
    Merge => ("merge", "Merge Sort", sort::merge::merge),
    Quick => ("quick", "Quick Sort", sort::partition::quick),
    Heap => ("heap", "Heap Sort", sort::selection::heap),
    Shell => ("shell", "Shell Sort", sort::insertion::shell),
    Counting => ("counting", "Counting Sort", sort::distribution::counting),
    Radix => ("radix", "Radix Sort", sort::distribution::radix),
    Bucket => ("bucket", "Bucket Sort", sort::distribution::bucket),
    Cocktail => ("cocktail", "Cocktail Shaker Sort", sort::exchange::cocktail),
    Comb => ("comb", "Comb Sort", sort::exchange::comb),
    Gnome => ("gnome", "Gnome Sort", sort::exchange::gnome),
    Cycle => ("cycle", "Cycle Sort", sort::selection::cycle),
    Pancake => ("pancake", "Pancake Sort", sort::selection::pancake),
    Bitonic => ("bitonic", "Bitonic Sort", sort::network::bitonic),
    Tim => ("tim", "Tim Sort", sort::merge::tim),
    Bogo => ("bogo", "Bogo Sort", sort::novelty::bogo),
    Stooge => ("stooge", "Stooge Sort", sort::novelty::stooge),
    OddEven => ("odd_even", "Odd-Even Sort", sort::exchange::odd_even),
    Stalin => ("stalin", "Stalin Sort", sort::novelty::stalin),
    Intro => ("intro", "Intro Sort", sort::partition::intro),
    Block => ("block", "Block Sort", sort::merge::block),
    Smooth => ("smooth", "Smooth Sort", sort::selection::smooth),
    Strand => ("strand", "Strand Sort", sort::merge::strand),
    Library => ("library", "Library Sort", sort::insertion::library),
    Tree => ("tree", "Tree Sort", sort::insertion::tree),
    Gravity => ("gravity", "Gravity Sort", sort::distribution::gravity),
    Pigeonhole => ("pigeonhole", "Pigeonhole Sort", sort::distribution::pigeonhole),
    MinMaxSelection => ("min_max_selection", "Min-Max Selection Sort", sort::selection::min_max_selection),
    OddEvenMerge => ("odd_even_merge", "Odd-Even Merge Sort", sort::network::odd_even_merge),
    AmericanFlag => ("american_flag", "American Flag Sort", sort::distribution::american_flag),
    Flash => ("flash", "Flash Sort", sort::distribution::flash),
    Patience => ("patience", "Patience Sort", sort::merge::patience),
    AdaptiveMerge => ("adaptive_merge", "Adaptive Merge Sort", sort::merge::adaptive_merge),
    PairwiseNetwork => ("pairwise_network", "Pairwise Sorting Network", sort::network::pairwise_network),
    Spread => ("spread", "Spread Sort", sort::distribution::spread),
    InPlaceMerge => ("in_place_merge", "In-Place Merge Sort", sort::merge::in_place_merge),
    Proxmap => ("proxmap", "Proxmap Sort", sort::distribution::proxmap),
    Tournament => ("tournament", "Tournament Sort", sort::selection::tournament),
    DualPivotQuick => ("dual_pivot_quick", "Dual Pivot Quick Sort", sort::partition::dual_pivot_quick),
    Pdq => ("pdq", "Pattern-Defeating Quick Sort", sort::partition::pdq),
    BlockMerge => ("block_merge", "Block Merge Sort", sort::merge::block_merge),
    Stupid => ("stupid", "Stupid Sort", sort::novelty::stupid),
}

define_family! {
    /// The searching algorithms.
    SearchAlgorithm: SearchFn;
    Linear => ("linear", "Linear Search", search::linear),
    Binary => ("binary", "Binary Search", search::binary),
    Jump => ("jump", "Jump Search", search::jump),
    Interpolation => ("interpolation", "Interpolation Search", search::interpolation),
    Exponential => ("exponential", "Exponential Search", search::exponential),
    Ternary => ("ternary", "Ternary Search", search::ternary),
    Fibonacci => ("fibonacci", "Fibonacci Search", search::fibonacci),
}

define_family! {
    /// The pathfinding algorithms.
    PathfindAlgorithm: PathfindFn;
    Bfs => ("bfs", "Breadth-First Search", pathfind::unweighted::bfs),
    Dfs => ("dfs", "Depth-First Search", pathfind::unweighted::dfs),
    Dijkstra => ("dijkstra", "Dijkstra's Algorithm", pathfind::weighted::dijkstra),
    AStar => ("astar", "A* Search", pathfind::weighted::astar),
    Greedy => ("greedy", "Greedy Best-First Search", pathfind::weighted::greedy),
    Bidirectional => ("bidirectional", "Bidirectional Search", pathfind::unweighted::bidirectional),
    Jps => ("jps", "Jump Point Search", pathfind::weighted::jps),
}

// ---------------------------------------------------------------------------
// Family-specific behavior
// ---------------------------------------------------------------------------

impl SortAlgorithm {
    /// Run on `input` and return the finished trace.
    #[must_use]
    pub fn run(self, input: &[Element]) -> ArrayTrace {
        let trace = (self.procedure())(input);
        tracing::debug!(algorithm = self.id(), n = input.len(), steps = trace.len(), "sort trace produced");
        trace
    }

    /// `true` if equal values keep their input order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::Bubble
                | Self::Insertion
                | Self::Merge
                | Self::Counting
                | Self::Radix
                | Self::Bucket
                | Self::Cocktail
                | Self::Gnome
                | Self::OddEven
                | Self::Tim
                | Self::Strand
                | Self::Library
                | Self::Tree
                | Self::Pigeonhole
                | Self::Patience
                | Self::AdaptiveMerge
                | Self::InPlaceMerge
                | Self::BlockMerge
        )
    }

    /// `true` if the final snapshot may be unsorted or shorter than the
    /// input.
    #[must_use]
    pub const fn is_lossy(self) -> bool {
        matches!(self, Self::Bogo | Self::Stalin | Self::Stupid)
    }
}

impl SearchAlgorithm {
    /// Search `input` for `target` and return the finished trace.
    #[must_use]
    pub fn run(self, input: &[Element], target: i64) -> ArrayTrace {
        let trace = (self.procedure())(input, target);
        tracing::debug!(algorithm = self.id(), n = input.len(), needle = target, steps = trace.len(), "search trace produced");
        trace
    }

    /// `false` only for linear search, which scans the input order.
    #[must_use]
    pub const fn requires_sorted(self) -> bool {
        !matches!(self, Self::Linear)
    }
}

impl PathfindAlgorithm {
    /// Search `grid` from `start` to `end` and return the finished trace.
    #[must_use]
    pub fn run(self, grid: &Grid, start: Coord, end: Coord) -> GridTrace {
        let trace = (self.procedure())(grid, start, end);
        tracing::debug!(algorithm = self.id(), %start, %end, steps = trace.len(), "pathfind trace produced");
        trace
    }

    /// `true` if the path found is always a shortest one.
    ///
    /// Bidirectional search stops at the first cell both sides have reached,
    /// which only guarantees a valid path.
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Dijkstra | Self::AStar | Self::Jps)
    }
}

// ---------------------------------------------------------------------------
// Any family
// ---------------------------------------------------------------------------

/// Which family an [`Algorithm`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sort,
    Search,
    Pathfind,
}

/// An algorithm of any family, resolved from its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
    Pathfind(PathfindAlgorithm),
}

impl Algorithm {
    /// Resolve `id` across all families. Ids are unique workspace-wide.
    ///
    /// # Errors
    ///
    /// [`AlgorithmError::UnknownAlgorithm`] if no family registers `id`.
    pub fn from_id(id: &str) -> Result<Self, AlgorithmError> {
        id.parse()
            .map(Self::Sort)
            .or_else(|_| id.parse().map(Self::Search))
            .or_else(|_| id.parse().map(Self::Pathfind))
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Sort(_) => Family::Sort,
            Self::Search(_) => Family::Search,
            Self::Pathfind(_) => Family::Pathfind,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sort(a) => a.id(),
            Self::Search(a) => a.id(),
            Self::Pathfind(a) => a.id(),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sort(a) => a.label(),
            Self::Search(a) => a.label(),
            Self::Pathfind(a) => a.label(),
        }
    }

    /// Every registered algorithm, sorts first.
    pub fn all() -> impl Iterator<Item = Algorithm> {
        SortAlgorithm::ALL
            .iter()
            .copied()
            .map(Self::Sort)
            .chain(SearchAlgorithm::ALL.iter().copied().map(Self::Search))
            .chain(PathfindAlgorithm::ALL.iter().copied().map(Self::Pathfind))
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::from_id(id)
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}
