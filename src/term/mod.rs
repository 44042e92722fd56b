//! Terminal rendering layer.
//!
//! `game_view` maps a `GameSnapshot` into a styled character framebuffer,
//! with no I/O, so layout is unit-testable. `renderer` flushes framebuffers
//! to the real terminal, diffing against the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
