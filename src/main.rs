//! Terminal blockfall runner.
//!
//! Fixed-rate frame loop: render the current snapshot, poll keys for the
//! remainder of the frame, apply intents, then advance gravity by one frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::Game;
use blockfall::input;
use blockfall::report::{ScoreReporter, WriterReporter};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{BOARD_COLS, BOARD_ROWS, TICK_MS};

fn main() -> Result<()> {
    let mut game = Game::new(BOARD_ROWS, BOARD_COLS, time_seed()).with_player(player_name());
    if let Some(reporter) = score_log_reporter() {
        game = game.with_reporter(reporter);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        let input = input::poll_frame(timeout)?;
        if input.quit {
            return Ok(());
        }
        for intent in input.intents {
            game.apply_intent(intent);
        }

        if last_tick.elapsed() >= frame {
            last_tick = Instant::now();
            game.tick(1);
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn player_name() -> String {
    std::env::var("USER").unwrap_or_else(|_| String::from("player"))
}

/// Best-effort local score log. Reporting stays fire-and-forget: if the file
/// cannot be opened the game simply runs without a reporter.
fn score_log_reporter() -> Option<Box<dyn ScoreReporter>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("scores.log")
        .ok()?;
    Some(Box::new(WriterReporter::new(file)))
}
