//! Grid module - the locked-block playfield
//!
//! The grid is a `rows x cols` matrix where each cell is empty or holds the shape
//! that was locked there. Storage is a flat row-major vector sized once at
//! construction; no method reallocates it.
//!
//! Coordinates are `(row, col)`: row 0 is the top, column 0 the left edge.
//! Queries take signed coordinates so speculative piece cells above or left of
//! the grid can be tested without casting.

use crate::error::GridError;
use crate::types::{Cell, PieceKind};

/// Rows removed by one [`Grid::clear_full_rows`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedRows {
    /// Original row indices, sorted bottom to top
    rows: Vec<usize>,
}

impl ClearedRows {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Original indices of the cleared rows, bottom to top
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }
}

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. [`GameConfig`](crate::GameConfig)
    /// validation rejects such sizes before a grid is built.
    pub fn new(cols: u8, rows: u8) -> Self {
        assert!(cols > 0 && rows > 0, "grid dimensions must be non-zero");
        let cols = cols as usize;
        let rows = rows as usize;
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether `(row, col)` holds a locked block
    pub fn is_occupied(&self, row: i32, col: i32) -> Result<bool, GridError> {
        match self.index(row, col) {
            Some(idx) => Ok(self.cells[idx].is_some()),
            None => Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_none()))
    }

    /// One row as a slice, `None` when out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mark every listed cell as occupied by its shape
    ///
    /// # Panics
    ///
    /// Panics if any cell is out of bounds, already occupied, or listed twice.
    /// Callers must have validated the placement with the collision resolver;
    /// reaching this panic means that check was skipped or wrong.
    pub fn lock_cells(&mut self, cells: &[(i32, i32, PieceKind)]) {
        for &(row, col, _) in cells {
            match self.index(row, col) {
                Some(idx) => assert!(
                    self.cells[idx].is_none(),
                    "lock_cells: cell ({row}, {col}) is already occupied by {:?}",
                    self.cells[idx]
                ),
                None => panic!(
                    "lock_cells: cell ({row}, {col}) is outside the {}x{} grid",
                    self.rows, self.cols
                ),
            }
        }

        for &(row, col, kind) in cells {
            if let Some(idx) = self.index(row, col) {
                assert!(
                    self.cells[idx].is_none(),
                    "lock_cells: cell ({row}, {col}) listed twice"
                );
                self.cells[idx] = Some(kind);
            }
        }
    }

    /// Remove every full row and compact the stack downward
    ///
    /// Rows above a cleared row move down by the number of cleared rows below
    /// them; the vacated top rows become empty. Uses a two-pointer scan from the
    /// bottom so each kept row is copied at most once.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = Vec::new();
        let width = self.cols;
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);

        ClearedRows { rows: cleared }
    }

    /// Empty the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_HEIGHT)
    }
}
