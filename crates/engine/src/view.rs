//! Renderer collaborator contract.

use anyhow::Result;

use tui_snake_types::{Direction, Position};

/// What a renderer must handle to display a game
///
/// The engine calls these in tick order: clears for expired cells first,
/// then score and fruit changes, then the freshly written head. Rendering
/// failures propagate out of the session loop unchanged.
pub trait BoardView {
    /// Draw the static board chrome; called once per game, at start
    fn draw_board(&mut self) -> Result<()>;

    /// Draw one occupied cell
    ///
    /// `dir` is the heading that entered the cell, for renderers that
    /// connect neighboring cells; `Direction::None` marks an isolated cell
    /// (the fruit, or the spawn before the first move).
    fn draw_cell(&mut self, pos: Position, dir: Direction) -> Result<()>;

    /// Erase one cell whose TTL reached zero
    fn clear_cell(&mut self, pos: Position) -> Result<()>;

    /// Show a score value
    ///
    /// Values above `SCORE_DISPLAY_MAX` are the display's problem to clamp;
    /// the fixed sentinel `SCORE_GAME_OVER` announces the end of a game.
    fn print_score(&mut self, value: u32) -> Result<()>;
}
