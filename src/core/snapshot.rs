//! Read-only per-frame view of the game, handed to rendering collaborators.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::types::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub orientation: u8,
    pub x: i16,
    pub y: i16,
    pub color: u8,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            orientation: piece.orientation,
            x: piece.x,
            y: piece.y,
            color: piece.color,
        }
    }
}

/// Owned copy of everything a renderer needs for one frame. Taking a copy per
/// frame keeps the core free to mutate between frames without sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major grid of color indices (0 = empty).
    pub grid: Vec<u8>,
    pub active: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn capture(board: &Board, active: &Piece, next: &Piece, game_over: bool) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            grid: board.cells().to_vec(),
            active: active.into(),
            next: next.into(),
            score: board.score(),
            level: board.level(),
            game_over,
        }
    }

    /// Grid cell at `(x, y)`, 0 when out of range.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x >= self.cols || y >= self.rows {
            return 0;
        }
        self.grid[y * self.cols + x]
    }
}
