//! Grid module - the well that locked pieces settle into
//!
//! The grid is 10 columns by 20 rows. Each row is a fixed-size array, so every
//! row always holds exactly `GRID_WIDTH` cells and the row count only changes
//! transiently inside `clear_full_lines`.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with negative y sit above the visible well and always read as empty.

use crate::piece::Piece;
use crate::types::{Cell, Rgb, GRID_HEIGHT, GRID_WIDTH};

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// One horizontal line of the well.
pub type Row = [Cell; WIDTH];

const EMPTY_ROW: Row = [None; WIDTH];

/// The well - an ordered sequence of rows, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: vec![EMPTY_ROW; HEIGHT],
        }
    }

    /// Map (x, y) to row/column indices, or None outside the visible well
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Occupancy query used by collision checks.
    ///
    /// - `None` when `x` is outside `0..W` or `y >= H` (out of bounds)
    /// - `Some(false)` for any in-range column with `y < 0` (above the well)
    /// - `Some(filled)` otherwise
    pub fn is_occupied(&self, x: i8, y: i8) -> Option<bool> {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        if y < 0 {
            return Some(false);
        }
        self.get(x, y).map(|cell| cell.is_some())
    }

    /// Get cell at position (x, y)
    /// Returns None if out of the visible well
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(row, col)| self.rows[row][col])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of the visible well
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((row, col)) => {
                self.rows[row][col] = cell;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows.get(y).is_some_and(row_is_full)
    }

    /// Fill every cell of row `y` with `color`. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        if let Some(row) = self.rows.get_mut(y) {
            row.fill(Some(color));
        }
    }

    /// Write the piece's color into every cell its shape covers.
    ///
    /// Callers check `collides(piece, grid, 0, 0)` first; this does not look at
    /// what was underneath. Cells outside the visible well are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        let color = Some(piece.color());
        for (x, y) in piece.cells() {
            self.set(x, y, color);
        }
    }

    /// Remove every full row, dropping the rows above it into place.
    ///
    /// Surviving rows keep their relative order and one empty row is inserted
    /// at the top for each removed row. Returns the number of rows removed.
    pub fn clear_full_lines(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row_is_full(row));
        let cleared = before - self.rows.len();
        if cleared > 0 {
            self.rows
                .splice(0..0, std::iter::repeat(EMPTY_ROW).take(cleared));
        }
        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.rows.fill(EMPTY_ROW);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn row_is_full(row: &Row) -> bool {
    row.iter().all(|cell| cell.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GREEN, RED};

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some((0, 0)));
        assert_eq!(Grid::index(9, 19), Some((19, 9)));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
        assert_eq!(Grid::index(0, -1), None);
    }

    #[test]
    fn test_is_occupied_bounds() {
        let mut grid = Grid::new();
        grid.set(4, 7, Some(RED));

        assert_eq!(grid.is_occupied(4, 7), Some(true));
        assert_eq!(grid.is_occupied(5, 7), Some(false));

        // Out of bounds sideways or below
        assert_eq!(grid.is_occupied(-1, 5), None);
        assert_eq!(grid.is_occupied(10, 5), None);
        assert_eq!(grid.is_occupied(3, 20), None);

        // Above the well reads empty, but only inside the column range
        assert_eq!(grid.is_occupied(3, -1), Some(false));
        assert_eq!(grid.is_occupied(3, -4), Some(false));
        assert_eq!(grid.is_occupied(-1, -1), None);
    }

    #[test]
    fn test_clear_keeps_row_count() {
        let mut grid = Grid::new();
        grid.fill_row(19, GREEN);
        grid.fill_row(10, GREEN);
        assert_eq!(grid.clear_full_lines(), 2);
        assert_eq!(grid.rows.len(), HEIGHT);
        assert!(grid.rows.iter().all(|row| !row_is_full(row)));
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut grid = Grid::new();
        grid.set(0, 19, Some(RED));
        let before = grid.clone();
        assert_eq!(grid.clear_full_lines(), 0);
        assert_eq!(grid, before);
    }
}
