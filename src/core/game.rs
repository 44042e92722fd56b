//! Game controller - spawning, intents, gravity, and the session lifecycle.
//!
//! The controller mediates between `Piece` and `Board`: pieces know nothing
//! about the grid and the board never generates pieces. Every intent is
//! attempt-then-revert: mutate the active piece, collision-check, undo on
//! failure. The one autonomous behavior is the gravity counter advanced by
//! `tick`.

use std::mem;

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::report::{ScoreReporter, SessionReport};
use crate::types::{GameIntent, FRAME_RATE};

/// Session state machine. The only way out of `GameOver` is `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

pub struct Game {
    board: Board,
    active: Piece,
    next: Piece,
    phase: GamePhase,
    rng: SimpleRng,
    gravity_counter: u32,
    player: String,
    reporter: Option<Box<dyn ScoreReporter>>,
    /// Latch enforcing at-most-once game-over reporting per session.
    reported: bool,
}

impl Game {
    pub fn new(rows: usize, cols: usize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(&mut rng);
        let next = Piece::spawn(&mut rng);
        Self {
            board: Board::new(rows, cols),
            active,
            next,
            phase: GamePhase::Running,
            rng,
            gravity_counter: 0,
            player: String::from("anonymous"),
            reporter: None,
            reported: false,
        }
    }

    /// Attach the collaborator notified once per finished session.
    pub fn with_reporter(mut self, reporter: Box<dyn ScoreReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Identifier passed along in the game-over report.
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = player.into();
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn level(&self) -> u32 {
        self.board.level()
    }

    /// Promote the queued piece to active and queue a fresh one. If the
    /// promoted piece already collides there is no legal spawn position and
    /// the session ends. A no-op while terminal, like every other gameplay
    /// operation, so the game-over screen keeps its final piece pair.
    pub fn spawn_next(&mut self) {
        if self.game_over() {
            return;
        }
        self.active = mem::replace(&mut self.next, Piece::spawn(&mut self.rng));
        if self.board.collides(&self.active) {
            self.phase = GamePhase::GameOver;
            self.notify_game_over();
        }
    }

    pub fn move_left(&mut self) {
        if self.game_over() {
            return;
        }
        self.active.translate(-1, 0);
        if self.board.collides(&self.active) {
            self.active.translate(1, 0);
        }
    }

    pub fn move_right(&mut self) {
        if self.game_over() {
            return;
        }
        self.active.translate(1, 0);
        if self.board.collides(&self.active) {
            self.active.translate(-1, 0);
        }
    }

    pub fn rotate_active(&mut self) {
        if self.game_over() {
            return;
        }
        let previous = self.active.orientation;
        self.active.rotate();
        if self.board.collides(&self.active) {
            // No wall kicks: a rotation that collides is simply rejected.
            self.active.orientation = previous;
        }
    }

    /// Move the active piece down one row, or lock it in place if it cannot
    /// move. This is both the soft-drop intent and the gravity step.
    pub fn soft_drop(&mut self) {
        if self.game_over() {
            return;
        }
        self.active.translate(0, 1);
        if self.board.collides(&self.active) {
            self.active.translate(0, -1);
            self.freeze();
        }
    }

    /// Drop the active piece to its resting position and lock it.
    pub fn hard_drop(&mut self) {
        if self.game_over() {
            return;
        }
        while !self.board.collides(&self.active) {
            self.active.translate(0, 1);
        }
        self.active.translate(0, -1);
        self.freeze();
    }

    /// Lock sequence: commit the piece, clear rows, spawn the replacement.
    fn freeze(&mut self) {
        self.board.lock(&self.active);
        self.board.clear_completed_rows();
        self.spawn_next();
    }

    /// Frames between automatic descents at the current level. Clamped to one
    /// frame so levels past `FRAME_RATE` stay playable instead of dividing by
    /// zero.
    pub fn gravity_interval(&self) -> u32 {
        (FRAME_RATE / self.board.level()).max(1)
    }

    /// Advance the gravity counter by `frames`; on reaching the level's
    /// interval, reset it and apply a single automatic soft drop.
    pub fn tick(&mut self, frames: u32) {
        if self.game_over() {
            return;
        }
        self.gravity_counter += frames;
        if self.gravity_counter >= self.gravity_interval() {
            self.gravity_counter = 0;
            self.soft_drop();
        }
    }

    /// Reinitialize the whole session: empty board, fresh active/next pair,
    /// back to `Running`. The RNG stream continues so each session gets a new
    /// piece sequence. Allowed in any phase.
    pub fn restart(&mut self) {
        self.board.reset();
        self.active = Piece::spawn(&mut self.rng);
        self.next = Piece::spawn(&mut self.rng);
        self.phase = GamePhase::Running;
        self.gravity_counter = 0;
        self.reported = false;
    }

    pub fn apply_intent(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::MoveLeft => self.move_left(),
            GameIntent::MoveRight => self.move_right(),
            GameIntent::Rotate => self.rotate_active(),
            GameIntent::SoftDrop => self.soft_drop(),
            GameIntent::HardDrop => self.hard_drop(),
            GameIntent::Restart => self.restart(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, &self.active, &self.next, self.game_over())
    }

    /// Fire the one-shot session report. Reporter failures are swallowed;
    /// they must never affect game state.
    fn notify_game_over(&mut self) {
        if self.reported {
            return;
        }
        self.reported = true;
        if let Some(reporter) = self.reporter.as_mut() {
            let report = SessionReport {
                player: self.player.clone(),
                score: self.board.score(),
                level: self.board.level(),
            };
            let _ = reporter.submit(&report);
        }
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }
}
