//! Pathfinding family.
//!
//! Every procedure has the shape `fn(&Grid, Coord, Coord) -> GridTrace`.
//! A node is `visit`ed when popped for expansion and each newly discovered
//! open neighbour is `explore`d. A successful run ends with `found` followed
//! by one `path` step per cell from start to end, both included; otherwise
//! the run ends with `not_found`.
//!
//! Malformed requests (empty grid, endpoint outside the grid or on a wall,
//! start equal to end) produce a trace holding a single `not_found`.

pub mod frontier;
pub mod neighbors;
pub mod unweighted;
pub mod weighted;

use algoscope_kernel::model::{Coord, Grid};

pub use frontier::PriorityFrontier;
pub use neighbors::{neighbors, reconstruct_path, CellSet, ParentMap};

/// `true` if a search from `start` to `end` on `grid` is well formed.
#[must_use]
pub fn is_well_formed(grid: &Grid, start: Coord, end: Coord) -> bool {
    !grid.is_empty() && start != end && grid.is_open(start) && grid.is_open(end)
}
