//! The blocking session loop for one game.

use anyhow::Result;

use tui_snake_core::{GameState, TickEvents};
use tui_snake_input::{ButtonSource, Poller};
use tui_snake_types::{Direction, MOVE_DELAY_MS, SCORE_GAME_OVER};

use crate::view::BoardView;

/// Run one game to completion and return the final score
///
/// Resets the poller's debounce registers, draws the board, starts the game
/// (unless the caller already started it at a chosen spawn), then loops:
/// update, render the tick's events, poll for one tick's worth of input,
/// advance. The poller is the only place time passes; this loop adds no
/// delays of its own. On the terminal tick the game-over sentinel goes to
/// the score sink and the loop returns.
pub fn run_game<S, V>(game: &mut GameState, poller: &mut Poller<S>, view: &mut V) -> Result<u32>
where
    S: ButtonSource,
    V: BoardView,
{
    run_game_with(game, poller, view, MOVE_DELAY_MS)
}

/// [`run_game`] with an explicit tick duration
///
/// A `tick_ms` of zero makes the loop free-running (no sampling, no sleep),
/// which is what headless tests want.
pub fn run_game_with<S, V>(
    game: &mut GameState,
    poller: &mut Poller<S>,
    view: &mut V,
    tick_ms: u32,
) -> Result<u32>
where
    S: ButtonSource,
    V: BoardView,
{
    let mut events = TickEvents::default();

    poller.reset();
    view.draw_board()?;
    game.start(&mut events);
    forward(&events, view)?;

    loop {
        let running = game.update(&mut events);
        forward(&events, view)?;
        if !running {
            view.print_score(SCORE_GAME_OVER)?;
            return Ok(game.score());
        }

        let next = poller.poll(game.heading(), tick_ms);
        game.advance(next);
    }
}

/// Replay one tick's events onto the view, in tick order
fn forward<V: BoardView>(events: &TickEvents, view: &mut V) -> Result<()> {
    for &pos in &events.cleared {
        view.clear_cell(pos)?;
    }
    if let Some(score) = events.score {
        view.print_score(score)?;
    }
    if let Some(fruit) = events.fruit {
        view.draw_cell(fruit, Direction::None)?;
    }
    if let Some((pos, dir)) = events.head {
        view.draw_cell(pos, dir)?;
    }
    Ok(())
}
