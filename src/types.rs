//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Suggested gravity interval for the external tick driver (milliseconds).
/// The engine itself is step-based; timing lives in the collaborator.
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Shape kinds: the seven tetrominoes plus the single-cell Dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    J,
    L,
    S,
    Z,
    T,
    I,
    Dot,
}

impl ShapeKind {
    /// All kinds, in catalog order
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::I,
        ShapeKind::Dot,
    ];

    /// Fixed color identifier for the kind
    pub fn color(self) -> Color {
        match self {
            ShapeKind::O => Color::Red,
            ShapeKind::J => Color::Orange,
            ShapeKind::L => Color::Gold,
            ShapeKind::S => Color::Green,
            ShapeKind::Z => Color::Cyan,
            ShapeKind::T => Color::Blue,
            ShapeKind::I => Color::Violet,
            ShapeKind::Dot => Color::Gray,
        }
    }
}

/// Rotation class of a shape kind
///
/// `None` never rotates, `FourState` cycles through 4 orientations,
/// `TwoState` toggles between 2 (clockwise transform and its inverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationClass {
    None,
    FourState,
    TwoState,
}

/// Per-kind color identifier stored in settled board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Gold,
    Green,
    Cyan,
    Blue,
    Violet,
    Gray,
}

/// Cell on the board (None = empty, Some = settled piece color)
pub type Cell = Option<Color>;

/// Game commands, mapped 1:1 from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}
