//! Board module - manages the settled-cell grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a settled
//! color. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) with x 0..9 left to right, y 0..19 top to bottom.
//! Cell content only ever changes through lock-in or line clear/shift.

use std::fmt;

use arrayvec::ArrayVec;

use crate::core::catalog::CellOffset;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Grid snapshot type handed to renderers
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Locking a piece onto already-filled cells
///
/// The sole game-ending condition; surfaced to the engine rather than
/// silently overwriting the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOnOccupied;

impl fmt::Display for LockOnOccupied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("piece locked onto occupied or out-of-bounds cells")
    }
}

impl std::error::Error for LockOnOccupied {}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Rows written by the most recent lock, pending a clear scan
    touched_rows: ArrayVec<i8, 4>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            touched_rows: ArrayVec::new(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff the in-bounds cell at (x, y) is empty
    ///
    /// Out-of-range coordinates are a programming error here: the engine
    /// pre-validates every command, so this asserts instead of guessing.
    pub fn is_cell_free(&self, x: i8, y: i8) -> bool {
        match self.get(x, y) {
            Some(cell) => cell.is_none(),
            None => panic!("coordinate ({}, {}) out of board range", x, y),
        }
    }

    /// True iff every cell is in-bounds and empty
    ///
    /// Validates moves, rotations, and gravity steps before they commit.
    pub fn can_place(&self, cells: &[CellOffset]) -> bool {
        cells
            .iter()
            .all(|&(x, y)| matches!(self.get(x, y), Some(None)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear row `y` and shift all rows above it down by one
    ///
    /// A new empty row appears at the top; relative order of all other rows
    /// is preserved. `copy_within` handles the overlapping ranges.
    fn clear_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Lock a piece's absolute cells onto the board with the given color
    ///
    /// Err(LockOnOccupied) if any target cell is filled or out of bounds;
    /// the grid is untouched in that case. On success the distinct rows
    /// written are recorded for [`clear_full_lines`](Self::clear_full_lines).
    pub fn lock_piece(&mut self, cells: &[CellOffset], color: Color) -> Result<(), LockOnOccupied> {
        if !self.can_place(cells) {
            return Err(LockOnOccupied);
        }

        self.touched_rows.clear();
        for &(x, y) in cells {
            self.set(x, y, Some(color));
            if !self.touched_rows.contains(&y) {
                self.touched_rows.push(y);
            }
        }

        Ok(())
    }

    /// Clear every full row among those touched by the most recent lock
    ///
    /// Only rows the locked piece wrote can newly become full, so the scan
    /// is O(piece height) instead of O(board). Returns the cleared count;
    /// the row count stays at 20.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut rows: ArrayVec<i8, 4> = self.touched_rows.take();
        rows.sort_unstable();

        let mut cleared = 0;
        // Ascending order: clearing a row only shifts rows above it, so
        // later (lower) touched rows keep their indices.
        for &y in &rows {
            if self.is_row_full(y as usize) {
                self.clear_row(y as usize);
                cleared += 1;
            }
        }
        cleared
    }

    /// Write the grid into a caller-owned snapshot buffer
    pub fn write_grid(&self, out: &mut Grid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.touched_rows.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
