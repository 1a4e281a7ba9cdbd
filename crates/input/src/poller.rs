//! Fixed-interval input poller - the game's sole timing source.
//!
//! One call to [`Poller::poll`] spans exactly one game tick: it sleeps in
//! `SAMPLE_INTERVAL_MS` slices, feeds every button's raw state through its
//! debouncer on each slice, and returns the last accepted direction once
//! the tick has elapsed. Callers must not add their own delays.

use std::time::Duration;

use tui_snake_types::{Button, Direction, SAMPLE_INTERVAL_MS};

use crate::debounce::{DebounceWidthError, Debouncer};
use crate::filter::is_allowed;

/// Raw input collaborator: one logical line per button
///
/// Implementations report the *logical* active state; physical polarity
/// (active-low wiring, key-event synthesis) is their concern. Takes `&mut
/// self` because reading may drain an event queue.
pub trait ButtonSource {
    fn pressed(&mut self, button: Button) -> bool;
}

/// Owns the per-button debounce registers and the sampling loop
///
/// The registers live here and nowhere else; [`reset`](Poller::reset) runs
/// at every game start so a press left over from the previous game cannot
/// produce a stale edge.
#[derive(Debug)]
pub struct Poller<S> {
    source: S,
    debouncers: [Debouncer; 4],
}

impl<S: ButtonSource> Poller<S> {
    /// Create a poller; rejects a degenerate debounce width
    pub fn new(source: S, debounce_width: u8) -> Result<Self, DebounceWidthError> {
        let debouncer = Debouncer::new(debounce_width)?;
        Ok(Self {
            source,
            debouncers: [debouncer; 4],
        })
    }

    /// Zero all debounce registers
    pub fn reset(&mut self) {
        for debouncer in &mut self.debouncers {
            debouncer.reset();
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// One sampling step across all buttons
    ///
    /// Every register is updated every step, whatever the outcome. A step
    /// yields a direction only when exactly one button edges - simultaneous
    /// edges cancel each other - and the filter accepts it against
    /// `current`.
    fn sample(&mut self, current: Direction) -> Option<Direction> {
        let mut edge: Option<Button> = None;
        let mut edges = 0;
        for button in Button::ALL {
            let raw = self.source.pressed(button);
            if self.debouncers[button.index()].update(raw) {
                edge = Some(button);
                edges += 1;
            }
        }

        let button = edge.filter(|_| edges == 1)?;
        let candidate = button.direction();
        if is_allowed(current, candidate) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Sample for one tick and return the next heading
    ///
    /// Runs `tick_ms / SAMPLE_INTERVAL_MS` whole iterations, sleeping one
    /// interval before each sample, then sleeps the remainder. The filter
    /// always compares against the `current` passed in - never against an
    /// earlier tentative from the same tick - so a reversal cannot launder
    /// itself through an intermediate accepted turn. The last accepted
    /// direction wins; with none, `current` is returned.
    ///
    /// A `tick_ms` below the sample interval degenerates to a bare delay
    /// with no sampling at all. Accepted trade-off: such a tick rate is
    /// unplayable anyway, and the timing contract still holds.
    pub fn poll(&mut self, current: Direction, tick_ms: u32) -> Direction {
        self.poll_with(current, tick_ms, std::thread::sleep)
    }

    /// Timing-injected variant of [`poll`](Poller::poll)
    ///
    /// Tests and simulations supply their own `sleep`; gameplay goes
    /// through `poll`, which uses the thread timer.
    pub fn poll_with(
        &mut self,
        current: Direction,
        tick_ms: u32,
        mut sleep: impl FnMut(Duration),
    ) -> Direction {
        let mut accepted = None;
        for _ in 0..tick_ms / SAMPLE_INTERVAL_MS {
            sleep(Duration::from_millis(SAMPLE_INTERVAL_MS as u64));
            if let Some(dir) = self.sample(current) {
                accepted = Some(dir);
            }
        }

        let remainder = tick_ms % SAMPLE_INTERVAL_MS;
        if remainder > 0 {
            sleep(Duration::from_millis(remainder as u64));
        }

        accepted.unwrap_or(current)
    }
}
