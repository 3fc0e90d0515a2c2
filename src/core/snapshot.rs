//! Read-only state snapshot consumed by rendering collaborators

use crate::core::board::Grid;
use crate::core::catalog::CellList;
use crate::core::piece::Piece;
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

/// A piece reduced to what a renderer needs: cells and a color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub cells: CellList,
    pub color: Color,
}

impl PieceSnapshot {
    /// Snapshot of a piece's absolute cells
    pub fn absolute(piece: &Piece) -> Self {
        Self {
            cells: piece.cells(),
            color: piece.color(),
        }
    }

    /// Snapshot of a piece's base cells, for the next-piece preview
    pub fn preview(piece: &Piece) -> Self {
        Self {
            cells: piece.base_cells(),
            color: piece.color(),
        }
    }
}

/// Complete view of a game session at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Grid,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub(crate) fn empty_grid() -> Grid {
        [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]
    }
}
