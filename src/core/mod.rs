//! Core module - pure game logic with no external dependencies.
//!
//! Everything here is deterministic given an RNG seed and is testable without
//! a terminal: board rules, piece geometry, scoring, and the game controller.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use game::{Game, GamePhase};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
