//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod catalog;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, Grid, LockOnOccupied};
pub use catalog::{cells_for, offsets_for, rotation_class, rotation_states, CellList, CellOffset};
pub use game::Game;
pub use piece::Piece;
pub use rng::{KindSource, SimpleRng};
pub use scoring::score_for;
pub use snapshot::{GameSnapshot, PieceSnapshot};
