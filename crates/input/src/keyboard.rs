//! Keyboard-backed button source for terminal play.
//!
//! Most terminals emit no key-release events, so a raw key press is
//! stretched into a short synthetic "held" window; key repeat keeps the
//! window open while the key stays down. One tap therefore reads as one
//! sustained press to the debouncer, not as a single 5 ms blip that could
//! never saturate a register.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_snake_types::Button;

use crate::map::{button_for_key, should_quit};
use crate::poller::ButtonSource;

// Long enough to bridge the gap until the terminal's key repeat kicks in,
// short enough that a tap does not read as a multi-tick hold.
const DEFAULT_KEY_HOLD_TIMEOUT_MS: u32 = 150;

/// Adapts `crossterm` key events to the four logical button lines
#[derive(Debug, Clone)]
pub struct KeyboardSource {
    held_since: [Option<Instant>; 4],
    hold_timeout_ms: u32,
    quit: bool,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self {
            held_since: [None; 4],
            hold_timeout_ms: DEFAULT_KEY_HOLD_TIMEOUT_MS,
            quit: false,
        }
    }

    pub fn with_hold_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.hold_timeout_ms = timeout_ms;
        self
    }

    /// A quit key was seen while sampling; honored between games
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drain pending terminal events without blocking
    fn pump(&mut self) {
        while matches!(event::poll(Duration::ZERO), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) => self.on_key(key),
                Ok(_) => {}
                Err(_) => break,
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        let Some(button) = button_for_key(key) else {
            if key.kind != KeyEventKind::Release && should_quit(key) {
                self.quit = true;
            }
            return;
        };

        if key.kind == KeyEventKind::Release {
            // Terminals that do report releases end the hold immediately.
            self.held_since[button.index()] = None;
        } else {
            self.held_since[button.index()] = Some(Instant::now());
        }
    }
}

impl ButtonSource for KeyboardSource {
    fn pressed(&mut self, button: Button) -> bool {
        self.pump();
        match self.held_since[button.index()] {
            Some(since) if since.elapsed().as_millis() < self.hold_timeout_ms as u128 => true,
            Some(_) => {
                // Auto-release once the synthetic hold window lapses.
                self.held_since[button.index()] = None;
                false
            }
            None => false,
        }
    }
}

impl Default for KeyboardSource {
    fn default() -> Self {
        Self::new()
    }
}
