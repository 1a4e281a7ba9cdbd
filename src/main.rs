//! Terminal Snake runner (default binary).
//!
//! Raw-mode crossterm terminal, one game at a time, restart from the
//! game-over screen. The RNG is seeded once from the clock before the first
//! game; every game draws its own seed from that stream.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameRng, GameState};
use tui_snake::engine::run_game;
use tui_snake::input::{should_quit, should_restart, KeyboardSource, Poller};
use tui_snake::term::TerminalRenderer;
use tui_snake::types::DEBOUNCE_WIDTH;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    let mut session_rng = GameRng::new(seed);

    let mut poller = Poller::new(KeyboardSource::new(), DEBOUNCE_WIDTH)?;

    loop {
        let mut game = GameState::new(session_rng.next_u32());
        run_game(&mut game, &mut poller, term)?;

        if poller.source_mut().quit_requested() {
            return Ok(());
        }
        if !wait_for_restart()? {
            return Ok(());
        }
    }
}

/// Block on the game-over screen until restart (true) or quit (false)
fn wait_for_restart() -> Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if should_restart(key) {
                return Ok(true);
            }
            if should_quit(key) {
                return Ok(false);
            }
        }
    }
}
