//! Random input generation for hosts.
//!
//! Every generator takes the RNG explicitly; callers that need
//! reproducible inputs pass a seeded [`rand::rngs::SmallRng`].

use algoscope_kernel::model::{Cell, Coord, Element, Grid};
use rand::Rng;

/// Rows of the default pathfinding grid.
pub const DEFAULT_ROWS: usize = 20;
/// Columns of the default pathfinding grid.
pub const DEFAULT_COLS: usize = 40;
/// Default start cell.
pub const DEFAULT_START: Coord = Coord::new(5, 5);
/// Default end cell.
pub const DEFAULT_END: Coord = Coord::new(14, 34);
/// Default wall probability for [`random_grid`].
pub const DEFAULT_DENSITY: f64 = 0.3;

const MIN_VALUE: f64 = 5.0;
const MAX_VALUE: f64 = 105.0;

/// `size` linearly spaced values over `[5, 105]`, rounded, shuffled with
/// Fisher-Yates. Ids are assigned by final position.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn shuffled_elements<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Element> {
    let step = (MAX_VALUE - MIN_VALUE) / size.saturating_sub(1).max(1) as f64;
    let mut values: Vec<i64> = (0..size)
        .map(|i| (MIN_VALUE + i as f64 * step).round() as i64)
        .collect();
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
    Element::from_values(&values)
}

/// A value drawn from `elements`, so searches usually succeed.
#[must_use]
pub fn random_target<R: Rng + ?Sized>(elements: &[Element], rng: &mut R) -> Option<i64> {
    if elements.is_empty() {
        return None;
    }
    Some(elements[rng.random_range(0..elements.len())].value)
}

/// A `rows × cols` grid with walls placed independently with probability
/// `density`. `start` and `end` are placed afterwards and their
/// 8-neighbourhoods cleared of walls. Endpoints outside the grid are not
/// placed.
#[must_use]
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    start: Coord,
    end: Coord,
    density: f64,
    rng: &mut R,
) -> Grid {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.random_bool(density) {
                grid.set(Coord::new(row, col), Cell::Wall);
            }
        }
    }
    grid.set(start, Cell::Start);
    grid.set(end, Cell::End);
    for center in [start, end] {
        for row in center.row.saturating_sub(1)..=center.row + 1 {
            for col in center.col.saturating_sub(1)..=center.col + 1 {
                let at = Coord::new(row, col);
                if grid.get(at) == Some(Cell::Wall) {
                    grid.set(at, Cell::Empty);
                }
            }
        }
    }
    grid
}

/// The empty 20×40 grid with start (5, 5) and end (14, 34).
#[must_use]
pub fn default_grid() -> Grid {
    let mut grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
    grid.set(DEFAULT_START, Cell::Start);
    grid.set(DEFAULT_END, Cell::End);
    grid
}
