//! Game state module - the per-tick state machine
//!
//! Ties together the trail grid, fruit placement, and RNG. A tick is split
//! into two phases so the core stays free of timing and input concerns:
//!
//! 1. [`GameState::update`] - validity check, fruit consumption or grid
//!    aging, head write. Render-relevant changes land in [`TickEvents`].
//! 2. [`GameState::advance`] - apply the direction the caller obtained
//!    (from the input poller) and move one cell.
//!
//! The caller owns the delay between the two phases; the core never sleeps.

use arrayvec::ArrayVec;

use crate::fruit::place_fruit;
use crate::grid::TrailGrid;
use crate::rng::GameRng;
use tui_snake_types::{Direction, Position, INITIAL_LENGTH};

/// Render-relevant changes from one tick (or from game start)
///
/// Reusable out-parameter: callers keep one instance and pass it into every
/// [`GameState::update`], which resets it first.
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    /// Head cell written this tick, with the heading that entered it
    /// (`Direction::None` for the isolated spawn cell at game start)
    pub head: Option<(Position, Direction)>,
    /// Cells whose TTL reached zero this tick, to be erased.
    /// During a live game at most one cell expires per aging pass (head
    /// writes keep expiry ticks strictly ordered); the capacity slack only
    /// matters for synthetic grids.
    pub cleared: ArrayVec<Position, 4>,
    /// New fruit position, when the fruit moved
    pub fruit: Option<Position>,
    /// New score, when it changed
    pub score: Option<u32>,
    /// The game reached its terminal state this tick
    pub ended: bool,
}

impl TickEvents {
    pub fn clear(&mut self) {
        self.head = None;
        self.cleared.clear();
        self.fruit = None;
        self.score = None;
        self.ended = false;
    }
}

/// Complete game state
///
/// Owns the grid, the player, the fruit, and the RNG. Input and rendering
/// stay outside; they communicate through `advance` and `TickEvents`.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: TrailGrid,
    player: Position,
    heading: Direction,
    fruit: Position,
    score: u32,
    started: bool,
    game_over: bool,
    rng: GameRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The game holds no board state until [`start`](Self::start) or
    /// [`start_at`](Self::start_at) runs.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: TrailGrid::new(),
            player: Position::default(),
            heading: Direction::None,
            fruit: Position::default(),
            score: 0,
            started: false,
            game_over: false,
            rng: GameRng::new(seed),
        }
    }

    /// Start the game at a random spawn position
    pub fn start(&mut self, events: &mut TickEvents) {
        if self.started {
            events.clear();
            return;
        }
        let spawn = self.rng.position();
        self.start_at(spawn, events);
    }

    /// Start the game at a known spawn position
    ///
    /// Emits the initial score, the first fruit, and the spawn cell (drawn
    /// isolated; nothing is written to the grid until the first tick).
    pub fn start_at(&mut self, spawn: Position, events: &mut TickEvents) {
        events.clear();
        if self.started {
            return;
        }
        self.started = true;
        self.player = spawn;
        self.heading = Direction::Right;
        self.fruit = place_fruit(&self.grid, self.player, &mut self.rng);

        events.score = Some(self.score);
        events.fruit = Some(self.fruit);
        events.head = Some((self.player, Direction::None));
    }

    /// First tick phase: validity, fruit or aging, head write
    ///
    /// Returns false once the game has ended. The head cell has not been
    /// written yet when validity runs, so the check sees exactly the state
    /// the previous tick's move produced - including self-collision.
    pub fn update(&mut self, events: &mut TickEvents) -> bool {
        events.clear();
        if !self.started || self.game_over {
            events.ended = self.game_over;
            return false;
        }

        if !self.grid.is_valid(self.player) {
            self.game_over = true;
            events.ended = true;
            return false;
        }

        if self.player == self.fruit {
            // Scoring tick: the aging pass is skipped entirely, so every
            // trailing cell keeps one extra tick of TTL. That, plus the
            // larger value written below, is what grows the trail.
            self.score += 1;
            events.score = Some(self.score);
            self.fruit = place_fruit(&self.grid, self.player, &mut self.rng);
            events.fruit = Some(self.fruit);
        } else {
            let cleared = &mut events.cleared;
            self.grid.age(|pos| {
                let _ = cleared.try_push(pos);
            });
        }

        let ttl = self.score as i16 + INITIAL_LENGTH as i16;
        self.grid.write_head(self.player, ttl);
        events.head = Some((self.player, self.heading));
        true
    }

    /// Second tick phase: apply the polled direction and move one cell
    ///
    /// `Direction::None` means "no change"; the heading set at start never
    /// reverts to `None`.
    pub fn advance(&mut self, next: Direction) {
        if next != Direction::None {
            self.heading = next;
        }
        self.player = self.player.stepped(self.heading);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn fruit(&self) -> Position {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &TrailGrid {
        &self.grid
    }
}
