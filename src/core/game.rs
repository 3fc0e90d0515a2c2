//! Game engine - spawn, gravity, commands, lock-in, scoring, game over
//!
//! Ties the core components together: board, piece, kind source, scoring.
//! The engine is step-based and single-writer; an external timer calls
//! [`Game::update`] once per gravity interval and player commands are
//! applied synchronously between ticks.
//!
//! The state machine is Spawning -> Falling -> Locking -> (Clearing) ->
//! Spawning, with terminal GameOver. Spawning, locking, and clearing
//! complete synchronously inside the step that triggers them, so the
//! observable states are "falling" and "game over".

use crate::core::board::Board;
use crate::core::catalog::CellList;
use crate::core::piece::Piece;
use crate::core::rng::KindSource;
use crate::core::scoring::score_for;
use crate::core::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Color, GameAction, BOARD_WIDTH};

/// One game session
///
/// Owns all board and piece state exclusively. Score accumulates
/// monotonically until [`restart`](Self::restart).
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    /// Queued piece, already centered at the spawn offset so the preview
    /// is stable across frames
    next: Piece,
    source: KindSource,
    score: u32,
    paused: bool,
    game_over: bool,
}

impl Game {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut source = KindSource::new(seed);
        let current = Self::spawn_centered(&mut source);
        let next = Self::spawn_centered(&mut source);

        Self {
            board: Board::new(),
            current,
            next,
            source,
            score: 0,
            paused: false,
            game_over: false,
        }
    }

    /// Draw a kind and position the piece at the spawn offset
    fn spawn_centered(source: &mut KindSource) -> Piece {
        let mut piece = Piece::spawn(source.draw());
        piece.center(BOARD_WIDTH);
        piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current piece's absolute cells
    pub fn current_cells(&self) -> CellList {
        self.current.cells()
    }

    /// Current piece's color
    pub fn current_color(&self) -> Color {
        self.current.color()
    }

    /// Next piece's base cells (preview)
    pub fn next_cells(&self) -> CellList {
        self.next.base_cells()
    }

    /// Next piece's color
    pub fn next_color(&self) -> Color {
        self.next.color()
    }

    /// Capture a complete render snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = GameSnapshot::empty_grid();
        self.board.write_grid(&mut board);
        GameSnapshot {
            board,
            current: PieceSnapshot::absolute(&self.current),
            next: PieceSnapshot::preview(&self.next),
            score: self.score,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// One gravity step: descend one row, or lock when blocked
    ///
    /// Returns true when the session state changed.
    pub fn update(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.step_down()
    }

    /// Soft drop: same semantics as one gravity step
    pub fn move_down(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.step_down()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate the current piece one step, if the rotated cells fit
    ///
    /// No kick search: a rotation that would land any cell out of bounds
    /// or on a settled cell is rejected outright and the piece is left
    /// unchanged.
    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        if self.board.can_place(&self.current.rotated_cells()) {
            self.current.commit_rotation();
            return true;
        }
        false
    }

    /// Drop the current piece until blocked, then lock it
    pub fn hard_drop(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        while self.board.can_place(&self.current.translated_cells(0, 1)) {
            self.current.translate(0, 1);
        }
        self.lock_and_advance();
        true
    }

    /// Pause or resume; a paused session ignores gravity and movement
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Re-initialize board, score, and pieces
    ///
    /// The only command honored after game over. Seeds the new session
    /// from the current source state so the kind stream continues rather
    /// than repeating.
    pub fn restart(&mut self) {
        *self = Self::new(self.source.state());
    }

    /// Apply a player command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        if self.board.can_place(&self.current.translated_cells(dx, 0)) {
            self.current.translate(dx, 0);
            return true;
        }
        false
    }

    fn step_down(&mut self) -> bool {
        if self.board.can_place(&self.current.translated_cells(0, 1)) {
            self.current.translate(0, 1);
        } else {
            self.lock_and_advance();
        }
        true
    }

    /// Locking -> Clearing -> Spawning, or GameOver on lock-on-occupied
    ///
    /// Lock-on-occupied means the stack reached the spawn rows: the piece
    /// never found a legal resting place. It is the sole terminal
    /// condition; the session freezes until restart.
    fn lock_and_advance(&mut self) {
        let cells = self.current.cells();
        if self
            .board
            .lock_piece(&cells, self.current.color())
            .is_err()
        {
            self.game_over = true;
            return;
        }

        let cleared = self.board.clear_full_lines();
        self.score += score_for(cleared);

        self.current = self.next;
        self.next = Self::spawn_centered(&mut self.source);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ShapeKind, BOARD_HEIGHT};

    /// Force a known current piece, bypassing the source
    fn force_piece(game: &mut Game, piece: Piece) {
        game.current = piece;
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(12345);
        assert_eq!(game.score(), 0);
        assert!(!game.paused());
        assert!(!game.game_over());
        assert!(game.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_spawn_is_centered() {
        let game = Game::new(12345);
        // Spawn offset is width/2 - 1 = 4 on the x axis, row 0.
        assert_eq!(game.current.x, 4);
        assert_eq!(game.current.y, 0);
        assert_eq!(game.next.x, 4);
        assert_eq!(game.next.y, 0);
    }

    #[test]
    fn test_update_applies_gravity() {
        let mut game = Game::new(12345);
        let before = game.current.y;
        assert!(game.update());
        assert_eq!(game.current.y, before + 1);
    }

    #[test]
    fn test_move_left_right() {
        let mut game = Game::new(12345);
        let x = game.current.x;
        assert!(game.move_left());
        assert_eq!(game.current.x, x - 1);
        assert!(game.move_right());
        assert_eq!(game.current.x, x);
    }

    #[test]
    fn test_move_blocked_at_wall() {
        let mut game = Game::new(12345);
        for _ in 0..BOARD_WIDTH {
            game.move_left();
        }
        let x = game.current.x;
        assert!(!game.move_left());
        assert_eq!(game.current.x, x);
    }

    #[test]
    fn test_rotate_rejected_at_wall_leaves_piece_unchanged() {
        let mut game = Game::new(12345);
        // T at rotation 3 hugs the left wall; one more step would need
        // a cell at x = -1.
        let piece = Piece {
            kind: ShapeKind::T,
            rot: 3,
            x: -1,
            y: 5,
        };
        assert!(game.board.can_place(&piece.cells()));
        force_piece(&mut game, piece);

        assert!(!game.rotate());
        assert_eq!(game.current, piece);
    }

    #[test]
    fn test_rotate_rejected_against_stack() {
        let mut game = Game::new(12345);
        let piece = Piece {
            kind: ShapeKind::I,
            rot: 0,
            x: 3,
            y: 10,
        };
        force_piece(&mut game, piece);
        // Occupy the cell the vertical I would need above its pivot.
        game.board.set(4, 9, Some(Color::Gray));

        assert!(!game.rotate());
        assert_eq!(game.current, piece);
    }

    #[test]
    fn test_rotate_commits_when_free() {
        let mut game = Game::new(12345);
        let piece = Piece {
            kind: ShapeKind::T,
            rot: 0,
            x: 4,
            y: 10,
        };
        force_piece(&mut game, piece);

        assert!(game.rotate());
        assert_eq!(game.current.rot, 1);
    }

    #[test]
    fn test_hard_drop_locks_and_spawns() {
        let mut game = Game::new(12345);
        let next_kind = game.next.kind;

        assert!(game.hard_drop());
        assert!(!game.game_over());
        // Previous piece settled somewhere on the board.
        assert!(game.board().cells().iter().any(|c| c.is_some()));
        // Next was promoted and a fresh preview drawn, centered.
        assert_eq!(game.current.kind, next_kind);
        assert_eq!((game.current.x, game.current.y), (4, 0));
    }

    #[test]
    fn test_bottom_lock_via_gravity() {
        let mut game = Game::new(12345);
        // Enough steps to reach the floor and lock exactly once.
        for _ in 0..=BOARD_HEIGHT {
            game.update();
        }
        assert!(game.board().cells().iter().any(|c| c.is_some()));
    }

    #[test]
    fn test_line_clear_scores() {
        let mut game = Game::new(12345);
        // Row 19 full except the two columns an O piece will fill.
        for x in 0..BOARD_WIDTH as i8 {
            if x != 4 && x != 5 {
                game.board.set(x, 19, Some(Color::Gray));
            }
        }
        force_piece(
            &mut game,
            Piece {
                kind: ShapeKind::O,
                rot: 0,
                x: 4,
                y: 0,
            },
        );

        game.hard_drop();
        assert_eq!(game.score(), score_for(1));
        // Former row 18 content (the O's upper half) shifted into row 19.
        assert_eq!(game.board().get(4, 19), Some(Some(ShapeKind::O.color())));
        assert_eq!(game.board().get(5, 19), Some(Some(ShapeKind::O.color())));
        assert!(!game.board().is_row_full(19));
    }

    #[test]
    fn test_game_over_on_lock_on_occupied() {
        let mut game = Game::new(12345);
        // Bury the spawn rows so the fresh piece cannot descend or lock.
        for x in 0..BOARD_WIDTH as i8 {
            for y in 0..4 {
                game.board.set(x, y, Some(Color::Gray));
            }
        }

        game.update();
        assert!(game.game_over());

        // Frozen: commands are ignored.
        assert!(!game.update());
        assert!(!game.move_left());
        assert!(!game.rotate());
        assert!(!game.hard_drop());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = Game::new(12345);
        game.hard_drop();
        game.game_over = true;

        game.restart();
        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert!(game.board().cells().iter().all(|c| c.is_none()));
        assert_eq!((game.current.x, game.current.y), (4, 0));
    }

    #[test]
    fn test_restart_continues_kind_stream() {
        let mut a = Game::new(99);
        let mut b = Game::new(99);
        a.restart();
        b.restart();
        assert_eq!(a.current.kind, b.current.kind);
        assert_eq!(a.next.kind, b.next.kind);
    }

    #[test]
    fn test_pause_blocks_everything_but_resume() {
        let mut game = Game::new(12345);
        let piece = game.current;

        assert!(game.toggle_pause());
        assert!(!game.update());
        assert!(!game.move_left());
        assert!(!game.rotate());
        assert!(!game.hard_drop());
        assert_eq!(game.current, piece);

        assert!(game.toggle_pause());
        assert!(game.update());
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut game = Game::new(12345);
        let x = game.current.x;

        assert!(game.apply_action(GameAction::MoveRight));
        assert_eq!(game.current.x, x + 1);
        assert!(game.apply_action(GameAction::MoveLeft));
        assert_eq!(game.current.x, x);

        let y = game.current.y;
        assert!(game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.current.y, y + 1);

        assert!(game.apply_action(GameAction::Pause));
        assert!(game.paused());
        assert!(game.apply_action(GameAction::Pause));

        assert!(game.apply_action(GameAction::Restart));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_fixed_seed_reproduces_sequence() {
        let mut a = Game::new(2024);
        let mut b = Game::new(2024);
        for _ in 0..10 {
            a.hard_drop();
            b.hard_drop();
            assert_eq!(a.current.kind, b.current.kind);
            assert_eq!(a.next.kind, b.next.kind);
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = Game::new(12345);
        game.hard_drop();

        let snap = game.snapshot();
        assert_eq!(snap.score, game.score());
        assert_eq!(snap.current.cells, game.current_cells());
        assert_eq!(snap.next.cells, game.next_cells());
        assert!(snap.playable());

        let settled: usize = snap
            .board
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        assert_eq!(
            settled,
            game.board().cells().iter().filter(|c| c.is_some()).count()
        );
    }
}
