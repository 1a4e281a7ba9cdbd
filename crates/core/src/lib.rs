//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests drive whole games without a terminal or clock
//! - **Portable**: Can run in any environment (terminal, embedded, headless)
//! - **Fast**: Zero-allocation tick path
//!
//! # Module Structure
//!
//! - [`grid`]: 36x19 trail grid of decaying time-to-live counters
//! - [`fruit`]: rejection-sampled fruit placement
//! - [`game`]: the per-tick state machine and its emitted render events
//! - [`rng`]: small deterministic LCG, the game's only randomness source
//!
//! # Game Rules
//!
//! The snake's body is not a list of segments; it is the set of grid cells
//! whose TTL counter is still positive. Each tick writes the head cell with
//! `score + INITIAL_LENGTH` and ages every other cell by one, which yields a
//! fixed-length trail. On a scoring tick the aging pass is skipped entirely,
//! which is what makes each fruit permanently extend the trail by one cell.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickEvents};
//! use tui_snake_types::{Direction, Position};
//!
//! let mut game = GameState::new(12345);
//! let mut events = TickEvents::default();
//! game.start_at(Position::new(10, 10), &mut events);
//!
//! // One tick: write the head, then advance one cell to the right.
//! assert!(game.update(&mut events));
//! game.advance(Direction::Right);
//! assert_eq!(game.player(), Position::new(11, 10));
//! ```

pub mod fruit;
pub mod game;
pub mod grid;
pub mod rng;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use fruit::place_fruit;
pub use game::{GameState, TickEvents};
pub use grid::TrailGrid;
pub use rng::GameRng;
