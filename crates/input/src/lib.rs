//! Input module (engine-facing).
//!
//! Everything between a raw input line and an accepted heading lives here:
//! per-button debouncing, the opposite-direction filter, and the fixed-
//! interval poller that doubles as the game's only timing source. The
//! [`ButtonSource`] trait keeps the poller independent of where samples come
//! from; [`KeyboardSource`] adapts `crossterm` key events for terminals
//! (including terminals without key-release events).

pub mod debounce;
pub mod filter;
pub mod keyboard;
pub mod map;
pub mod poller;

pub use tui_snake_types as types;

pub use debounce::{Debouncer, DebounceWidthError};
pub use filter::is_allowed;
pub use keyboard::KeyboardSource;
pub use map::{button_for_key, should_quit, should_restart};
pub use poller::{ButtonSource, Poller};
