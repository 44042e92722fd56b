//! Piece module - falling tetromino state and shape tables.
//!
//! Each orientation of a kind is a fixed set of four occupied cells inside a
//! 4x4 bounding box, stored as flattened offsets (`offset = row * 4 + col`).
//! Rotation just advances an index into the static table, so the geometry is
//! auditable data rather than computed transforms.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{ShapeKind, COLOR_COUNT, SPAWN_X, SPAWN_Y};

const I_OFFSETS: [[u8; 4]; 2] = [[1, 5, 9, 13], [4, 5, 6, 7]];
const Z_OFFSETS: [[u8; 4]; 2] = [[4, 5, 9, 10], [2, 6, 5, 9]];
const S_OFFSETS: [[u8; 4]; 2] = [[6, 7, 9, 10], [1, 5, 6, 10]];
const L_OFFSETS: [[u8; 4]; 4] = [
    [1, 2, 5, 9],
    [0, 4, 5, 6],
    [1, 5, 9, 8],
    [4, 5, 6, 10],
];
const J_OFFSETS: [[u8; 4]; 4] = [
    [1, 2, 6, 10],
    [5, 6, 7, 9],
    [2, 6, 10, 11],
    [3, 5, 6, 7],
];
const T_OFFSETS: [[u8; 4]; 4] = [
    [1, 4, 5, 6],
    [1, 4, 5, 9],
    [4, 5, 6, 9],
    [1, 5, 6, 9],
];
const O_OFFSETS: [[u8; 4]; 1] = [[1, 2, 5, 6]];

/// All stored orientations for a kind.
pub fn offset_table(kind: ShapeKind) -> &'static [[u8; 4]] {
    match kind {
        ShapeKind::I => &I_OFFSETS,
        ShapeKind::Z => &Z_OFFSETS,
        ShapeKind::S => &S_OFFSETS,
        ShapeKind::L => &L_OFFSETS,
        ShapeKind::J => &J_OFFSETS,
        ShapeKind::T => &T_OFFSETS,
        ShapeKind::O => &O_OFFSETS,
    }
}

/// Occupied flattened offsets for one (kind, orientation) pair.
pub fn occupied_offsets(kind: ShapeKind, orientation: u8) -> [u8; 4] {
    let table = offset_table(kind);
    table[orientation as usize % table.len()]
}

/// One falling tetromino: shape family, orientation index, color, and the
/// board-relative anchor of its 4x4 bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub orientation: u8,
    pub x: i16,
    pub y: i16,
    pub color: u8,
}

impl Piece {
    pub fn new(kind: ShapeKind, color: u8, x: i16, y: i16) -> Self {
        Self {
            kind,
            orientation: 0,
            x,
            y,
            color,
        }
    }

    /// New piece at the spawn anchor with uniformly random kind and color.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = 1 + rng.next_range(COLOR_COUNT as u32) as u8;
        Self::new(kind, color, SPAWN_X, SPAWN_Y)
    }

    /// Flattened offsets occupied in the current orientation.
    pub fn occupied_offsets(&self) -> [u8; 4] {
        occupied_offsets(self.kind, self.orientation)
    }

    /// Absolute board cells (column, row) occupied by this piece.
    pub fn blocks(&self) -> ArrayVec<(i16, i16), 4> {
        self.occupied_offsets()
            .iter()
            .map(|&off| (self.x + (off % 4) as i16, self.y + (off / 4) as i16))
            .collect()
    }

    /// Move the anchor. No validation: callers collision-check and revert.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        self.x += dx;
        self.y += dy;
    }

    /// Advance to the next stored orientation (cyclic). A no-op for O, which
    /// stores a single orientation.
    pub fn rotate(&mut self) {
        self.orientation = (self.orientation + 1) % self.kind.orientation_count();
    }
}
