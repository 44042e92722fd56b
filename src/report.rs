//! Score reporting on game over.
//!
//! The controller fires one `SessionReport` per terminal session through this
//! trait. Delivery is fire-and-forget: a failing reporter never blocks or
//! alters game state.

use std::io::Write;

use anyhow::Result;

/// Final result of one play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub player: String,
    pub score: u32,
    pub level: u32,
}

/// Collaborator notified exactly once per finished session.
pub trait ScoreReporter {
    fn submit(&mut self, report: &SessionReport) -> Result<()>;
}

/// Discards every report.
#[derive(Debug, Default)]
pub struct NullReporter;

impl ScoreReporter for NullReporter {
    fn submit(&mut self, _report: &SessionReport) -> Result<()> {
        Ok(())
    }
}

/// Appends one tab-separated line per session to any writer. The binary
/// points this at a local score log; tests point it at a buffer.
#[derive(Debug)]
pub struct WriterReporter<W: Write> {
    out: W,
}

impl<W: Write> WriterReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScoreReporter for WriterReporter<W> {
    fn submit(&mut self, report: &SessionReport) -> Result<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}",
            report.player, report.score, report.level
        )?;
        self.out.flush()?;
        Ok(())
    }
}
