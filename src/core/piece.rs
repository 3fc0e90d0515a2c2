//! Piece module - a falling shape instance
//!
//! A piece is `{kind, rotation index, position}`; its cells are always
//! derived on demand from the catalog. Nothing here mutates cell
//! coordinates in place, and nothing is shared with the board: lock-in
//! copies colors into the grid and the piece is discarded.

use crate::core::catalog::{cells_for, offsets_for, rotation_states, CellList};
use crate::types::{Color, ShapeKind};

/// Falling or queued shape instance
///
/// Performs no bounds checking itself; callers validate candidate cells
/// against the board before committing a move or rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Current rotation index (always 0 for non-rotating kinds)
    pub rot: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the origin with rotation index 0
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            rot: 0,
            x: 0,
            y: 0,
        }
    }

    /// Shift the piece to the horizontal center of a board of `width` cells
    pub fn center(&mut self, width: u8) {
        self.x += (width / 2) as i8 - 1;
    }

    /// Color identifier for this piece's kind
    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Base (unrotated, untranslated) cell offsets, for previews
    pub fn base_cells(&self) -> CellList {
        cells_for(self.kind)
    }

    /// Absolute cells at the current rotation and position
    pub fn cells(&self) -> CellList {
        self.offset_cells(self.rot, 0, 0)
    }

    /// Absolute cells the piece would occupy after translating by (dx, dy)
    pub fn translated_cells(&self, dx: i8, dy: i8) -> CellList {
        self.offset_cells(self.rot, dx, dy)
    }

    /// Absolute cells the piece would occupy after one rotation step
    ///
    /// Does not mutate; the engine validates this against the board before
    /// calling [`commit_rotation`](Self::commit_rotation).
    pub fn rotated_cells(&self) -> CellList {
        self.offset_cells(self.next_rot(), 0, 0)
    }

    /// Translate without validation
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Advance the rotation index one step
    pub fn commit_rotation(&mut self) {
        self.rot = self.next_rot();
    }

    fn next_rot(&self) -> u8 {
        (self.rot + 1) % rotation_states(self.kind)
    }

    fn offset_cells(&self, rot: u8, dx: i8, dy: i8) -> CellList {
        let mut cells = offsets_for(self.kind, rot);
        for c in &mut cells {
            *c = (c.0 + self.x + dx, c.1 + self.y + dy);
        }
        cells
    }
}
