//! Terminal racer (default binary).
//!
//! Puts the terminal in raw mode, plays one session, restores the terminal.
//! Terminal failures are logged and never change the exit code.
//!
//! Log output (filtered by `RUST_LOG`, default `warn`) is held in memory while
//! the game owns the screen and written to stderr once the terminal is restored.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_racer::core::{GameConfig, GameEngine, SimpleRng};
use tui_racer::input::TerminalKeys;
use tui_racer::runner::{GameLoop, SessionSummary, ThreadPacer};
use tui_racer::term::TerminalScreen;

fn main() -> Result<()> {
    let log = init_tracing();

    let mut screen = TerminalScreen::new();
    if let Err(err) = screen.enter() {
        tracing::warn!(%err, "failed to enter raw mode, input may be line-buffered");
    }

    let summary = run(&mut screen);

    // Always try to restore terminal state.
    if let Err(err) = screen.exit() {
        tracing::warn!(%err, "failed to restore terminal");
    }

    tracing::debug!(
        score = summary.score,
        speed_mph = summary.speed_display(),
        "exiting"
    );

    if let Err(err) = log.drain_into(&mut io::stderr()) {
        eprintln!("failed to write log: {err}");
    }
    Ok(())
}

fn run(screen: &mut TerminalScreen) -> SessionSummary {
    let seed = clock_seed();
    tracing::debug!(seed, "starting session");

    let engine = GameEngine::new(GameConfig::default(), SimpleRng::new(seed));
    GameLoop::new(engine, TerminalKeys::new(), screen, ThreadPacer).run()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn init_tracing() -> DeferredLog {
    let log = DeferredLog::default();
    let writer = log.clone();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(move || writer.clone())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
    log
}

/// Log sink that buffers until [`DeferredLog::drain_into`].
///
/// Raw mode and the alternate screen would otherwise take stderr lines
/// drawn over the frame, without carriage returns.
#[derive(Debug, Clone, Default)]
struct DeferredLog {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl DeferredLog {
    fn drain_into(&self, out: &mut impl Write) -> io::Result<()> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(&buf)?;
        buf.clear();
        out.flush()
    }
}

impl Write for DeferredLog {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
