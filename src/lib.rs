//! Blockfall: a terminal falling-block puzzle game.
//!
//! The `core` module holds the whole game-state engine and is free of
//! rendering, input, and network dependencies. `term` and `input` are the
//! crossterm-backed collaborators driven by the binary's frame loop, and
//! `report` is the seam for one-shot score submission on game over.

pub mod core;
pub mod input;
pub mod report;
pub mod term;
pub mod types;
