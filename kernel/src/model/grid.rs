//! Pathfinding grid: fixed-size row-major cell array.

use std::fmt;

/// Cell code stored in a [`Grid`].
///
/// The numeric codes (`0..=3`) are the wire representation used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl Cell {
    /// Wire code of this cell.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::End => 3,
        }
    }

    /// Parse a wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::End),
            _ => None,
        }
    }
}

/// A `(row, col)` grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        let d = self.row.abs_diff(other.row) + self.col.abs_diff(other.col);
        #[allow(clippy::cast_possible_truncation)]
        let d = d as u32;
        d
    }

    /// `true` if `other` is one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Failure while building a grid from wire codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows have different lengths.
    RaggedRows { row: usize, expected: usize, actual: usize },
    /// A cell code outside `0..=3`.
    UnknownCellCode { row: usize, col: usize, code: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::UnknownCellCode { row, col, code } => {
                write!(f, "unknown cell code {code} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows × cols` grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a grid from nested wire codes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for ragged rows or codes outside `0..=3`.
    pub fn from_codes(codes: &[Vec<u8>]) -> Result<Self, GridError> {
        let rows = codes.len();
        let cols = codes.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in codes.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::RaggedRows {
                    row,
                    expected: cols,
                    actual: line.len(),
                });
            }
            for (col, &code) in line.iter().enumerate() {
                let cell =
                    Cell::from_code(code).ok_or(GridError::UnknownCellCode { row, col, code })?;
                cells.push(cell);
            }
        }
        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Flattened index of `at`. Caller must bounds-check with [`Grid::contains`].
    #[must_use]
    pub fn index(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    /// Inverse of [`Grid::index`].
    #[must_use]
    pub fn coord(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        if self.contains(at) {
            Some(self.cells[self.index(at)])
        } else {
            None
        }
    }

    /// Overwrite one cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        if self.contains(at) {
            let i = self.index(at);
            self.cells[i] = cell;
        }
    }

    /// `true` if `at` is inside the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(cell) if cell != Cell::Wall)
    }

    /// First coordinate holding `cell`, scanning row-major.
    #[must_use]
    pub fn find(&self, cell: Cell) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|i| self.coord(i))
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Replace every wall with an empty cell, keeping endpoints.
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Wall {
                *cell = Cell::Empty;
            }
        }
    }

    /// Nested wire codes, one `Vec` per row.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
