//! Terminal rendering for the game board.
//!
//! Implements the engine's [`BoardView`] contract cell by cell: the game
//! emits draw/clear/score events and this module turns each one into queued
//! cursor moves and prints, with no full-frame redraws after the initial
//! board chrome.

pub mod renderer;

pub use renderer::TerminalRenderer;
