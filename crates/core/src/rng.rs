//! RNG module - the game's only randomness source
//!
//! A simple LCG is all spawn and fruit placement need, and it keeps whole
//! games reproducible from a single seed. Seeding happens once, outside the
//! core (the binary derives it from the clock).

use tui_snake_types::{Position, GRID_HEIGHT, GRID_WIDTH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in range [min, max)
    pub fn uniform(&mut self, min: i32, max_exclusive: i32) -> i32 {
        debug_assert!(min < max_exclusive);
        min + self.next_range((max_exclusive - min) as u32) as i32
    }

    /// Draw a uniformly random on-board position
    pub fn position(&mut self) -> Position {
        Position::new(
            self.uniform(0, GRID_WIDTH as i32) as i8,
            self.uniform(0, GRID_HEIGHT as i32) as i8,
        )
    }
}
