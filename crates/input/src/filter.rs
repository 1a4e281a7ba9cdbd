//! Opposite-direction filter.

use tui_snake_types::Direction;

/// Whether `candidate` may replace `current` as the snake's heading
///
/// Only the four opposite pairs are rejected; anything else - the same
/// direction, a perpendicular turn, or `Direction::None` - passes. Pure
/// function, no state.
pub fn is_allowed(current: Direction, candidate: Direction) -> bool {
    candidate == Direction::None || candidate.opposite() != current
}
