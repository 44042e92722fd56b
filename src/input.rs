//! Keyboard input: key-to-intent mapping and per-frame event polling.

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameIntent;

/// Map a key press to a game intent.
pub fn map_key(key: KeyEvent) -> Option<GameIntent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(GameIntent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(GameIntent::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(GameIntent::Rotate)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(GameIntent::SoftDrop)
        }
        KeyCode::Char(' ') => Some(GameIntent::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameIntent::Restart),
        _ => None,
    }
}

/// Check if a key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Everything gathered from the keyboard during one frame.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub intents: ArrayVec<GameIntent, 16>,
    pub quit: bool,
}

/// Drain key events for up to `timeout`, so this doubles as the frame clock.
/// Intents past the buffer capacity are dropped; a frame's worth of key
/// presses never gets near it.
pub fn poll_frame(timeout: Duration) -> Result<FrameInput> {
    let mut frame = FrameInput::default();
    let start = Instant::now();
    let mut remaining = timeout;

    loop {
        if !event::poll(remaining)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if should_quit(key) {
                    frame.quit = true;
                } else if let Some(intent) = map_key(key) {
                    let _ = frame.intents.try_push(intent);
                }
            }
        }
        remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            break;
        }
    }

    Ok(frame)
}
