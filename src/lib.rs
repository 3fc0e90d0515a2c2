//! Rules engine for a falling-block puzzle game
//!
//! This crate owns piece geometry, rotation, gravity, collision against a
//! settled board, line clearing, scoring, and game-over detection. It is
//! **deterministic** (a fixed seed reproduces an exact piece sequence),
//! **single-writer** (one [`core::Game`] instance exclusively owns all
//! session state), and **I/O-free** (rendering, input dispatch, and timers
//! are external collaborators that consume snapshots and invoke commands).
//!
//! # Module structure
//!
//! - [`core::catalog`]: the 8 shape kinds as fixed cell-offset lists with a
//!   rotation class (the first offset is the rotation reference point)
//! - [`core::piece`]: a shape instance whose cells are derived on demand
//!   from `{kind, rotation index, position}`
//! - [`core::board`]: 10x20 settled-cell grid, collision tests, line
//!   clearing with shift-down
//! - [`core::game`]: the session state machine driving spawn, gravity,
//!   commands, lock-in, scoring, and game over
//! - [`core::rng`]: injectable LCG-backed shape kind source
//! - [`core::scoring`]: super-linear line clear rewards
//! - [`core::snapshot`]: read-only views for renderers
//!
//! # Game rules
//!
//! - Rotation pivots every cell around the shape's fixed reference point
//!   with a single clockwise transform; two-state shapes toggle instead of
//!   composing, and there is deliberately no wall-kick search
//! - A move, rotation, or drop whose target cells are blocked is a silent
//!   no-op; locking onto occupied cells is the sole game-over condition
//! - Clearing n lines at once scores `2^n * 100 - 100`
//!
//! # Example
//!
//! ```
//! use blockfall::core::Game;
//! use blockfall::types::GameAction;
//!
//! let mut game = Game::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One gravity step per external tick.
//! game.update();
//!
//! let snapshot = game.snapshot();
//! assert!(!snapshot.game_over);
//! ```

pub mod core;
pub mod types;
