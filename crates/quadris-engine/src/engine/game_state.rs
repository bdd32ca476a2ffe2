use std::time::Duration;

use crate::{
    InvalidPlacementError,
    core::{ActivePiece, Board, ShapeKind},
};

use super::{GameStats, ShapeFeeder};

/// The complete state of one game and every rule that mutates it.
///
/// Constructed once per play session and driven exclusively through the
/// command methods plus [`Self::tick`]. Pause makes every gameplay command a
/// defined no-op; game over is terminal and a new `GameState` must be built
/// to play again.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: ShapeKind,
    feeder: ShapeFeeder,
    stats: GameStats,
    paused: bool,
    game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game with an OS-seeded shape stream.
    #[must_use]
    pub fn new() -> Self {
        Self::from_feeder(ShapeFeeder::new())
    }

    /// Creates a game with a fixed seed, replaying the same shape sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_feeder(ShapeFeeder::with_seed(seed))
    }

    fn from_feeder(mut feeder: ShapeFeeder) -> Self {
        let active = ActivePiece::spawn(feeder.next_kind());
        let next = feeder.next_kind();
        Self {
            board: Board::EMPTY,
            active,
            next,
            feeder,
            stats: GameStats::new(),
            paused: false,
            game_over: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        &self.active
    }

    #[must_use]
    pub fn next_kind(&self) -> ShapeKind {
        self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Convenience passthrough for the timer that drives [`Self::tick`].
    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.stats.fall_interval()
    }

    fn accepts_commands(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Shifts the active piece one column left if the result is valid.
    pub fn try_move_left(&mut self) -> Result<(), InvalidPlacementError> {
        self.try_set_active(self.active.left())
    }

    /// Shifts the active piece one column right if the result is valid.
    pub fn try_move_right(&mut self) -> Result<(), InvalidPlacementError> {
        self.try_set_active(self.active.right())
    }

    /// Rotates the active piece 90° clockwise if the rotated matrix is valid
    /// at the current position; otherwise the attempt is discarded.
    pub fn try_rotate(&mut self) -> Result<(), InvalidPlacementError> {
        self.try_set_active(self.active.rotated())
    }

    fn try_set_active(&mut self, candidate: ActivePiece) -> Result<(), InvalidPlacementError> {
        if !self.accepts_commands() {
            return Ok(());
        }
        if !self.board.is_valid(&candidate) {
            return Err(InvalidPlacementError);
        }
        self.active = candidate;
        Ok(())
    }

    /// Moves the active piece down one row, locking it if the row below is
    /// blocked. This is the gravity step; there is no lock delay.
    pub fn soft_drop(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        let candidate = self.active.down();
        if self.board.is_valid(&candidate) {
            self.active = candidate;
        } else {
            self.lock();
        }
    }

    /// Drops the active piece to the last valid row and locks it there.
    pub fn hard_drop(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        self.active = self.drop_position();
        self.lock();
    }

    /// The periodic heartbeat: one gravity step while playing.
    pub fn tick(&mut self) {
        self.soft_drop();
    }

    /// Flips the pause flag. Inert after game over.
    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Projects where the active piece would land on a hard drop, without
    /// mutating any state. The presentation layer draws this as the ghost.
    ///
    /// Advances while the position is valid, then steps back one row. A
    /// piece whose current position is already blocked therefore settles one
    /// row above itself; from the spawn row that is row -1, which the lock
    /// rejects and the game ends. This is the path by which a full stack
    /// ends the session.
    #[must_use]
    pub fn drop_position(&self) -> ActivePiece {
        let mut dropped = self.active;
        while self.board.is_valid(&dropped) {
            dropped = dropped.down();
        }
        dropped.up()
    }

    /// Commits the active piece into the board, clears lines, and spawns the
    /// next piece.
    ///
    /// A cell resolving above row 0 means the piece never fully entered the
    /// board: the game is over and nothing else happens.
    fn lock(&mut self) {
        if self.board.lock_piece(&self.active).is_err() {
            self.game_over = true;
            return;
        }

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.stats.record_clear(cleared);
        }

        self.active = ActivePiece::spawn(self.next);
        self.next = self.feeder.next_kind();
    }
}
