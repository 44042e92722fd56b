//! Core types and constants shared across the application.
//! This module contains pure data with no external dependencies.

/// Default board dimensions.
///
/// Derived from the classic 300x500 window: 20px cells with a 120px bottom
/// panel leave a 19-row by 15-column play field.
pub const BOARD_ROWS: usize = 19;
pub const BOARD_COLS: usize = 15;

/// Spawn anchor for new pieces (column, row).
pub const SPAWN_X: i16 = 5;
pub const SPAWN_Y: i16 = 0;

/// Frame rate driving the gravity divisor: a piece falls one row every
/// `FRAME_RATE / level` frames.
pub const FRAME_RATE: u32 = 35;

/// Milliseconds per frame at `FRAME_RATE`.
pub const TICK_MS: u64 = 1000 / FRAME_RATE as u64;

/// Grid cell values: 0 is empty, 1..=COLOR_COUNT is a locked block color.
pub const EMPTY_CELL: u8 = 0;
pub const COLOR_COUNT: u8 = 4;

/// Tetromino shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    Z,
    S,
    L,
    J,
    T,
    O,
}

impl ShapeKind {
    /// All kinds, in spawn-table order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
        ShapeKind::O,
    ];

    /// Number of stored orientations for this kind.
    pub fn orientation_count(&self) -> u8 {
        match self {
            ShapeKind::I | ShapeKind::Z | ShapeKind::S => 2,
            ShapeKind::L | ShapeKind::J | ShapeKind::T => 4,
            ShapeKind::O => 1,
        }
    }
}

/// Discrete player intents consumed by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Restart,
}
