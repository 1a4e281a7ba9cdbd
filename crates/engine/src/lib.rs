//! Session engine: wires the pure game core to input and rendering.
//!
//! The core never sleeps and never draws; the poller never moves the snake.
//! [`runner::run_game`] owns the loop that connects them, and
//! [`view::BoardView`] is the contract a renderer implements to receive the
//! per-tick draw, clear, and score events.

pub mod runner;
pub mod view;

pub use runner::{run_game, run_game_with};
pub use view::BoardView;
