//! End-to-end scenarios for the tick state machine

use tui_snake::core::{GameState, TickEvents};
use tui_snake::types::{Direction, Position};

fn started_game(seed: u32, spawn: Position) -> (GameState, TickEvents) {
    let mut game = GameState::new(seed);
    let mut events = TickEvents::default();
    game.start_at(spawn, &mut events);
    (game, events)
}

/// Drive whole ticks until the head lands on the fruit: horizontal leg
/// first, then vertical. Early-game trails never cross such a path.
fn walk_to_fruit(game: &mut GameState, events: &mut TickEvents) {
    let fruit = game.fruit();
    for _ in 0..128 {
        assert!(game.update(events), "died on the way to the fruit");
        let p = game.player();
        let dir = if p.x != fruit.x {
            if fruit.x > p.x {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if fruit.y > p.y {
            Direction::Down
        } else {
            Direction::Up
        };
        game.advance(dir);
        if game.player() == fruit {
            return;
        }
    }
    panic!("never reached the fruit");
}

#[test]
fn test_one_tick_heading_right() {
    let (mut game, mut events) = started_game(1, Position::new(10, 10));
    assert_eq!(game.heading(), Direction::Right);

    assert!(game.update(&mut events));
    game.advance(Direction::Right);

    assert_eq!(game.player(), Position::new(11, 10));
    assert_eq!(game.grid().ttl(Position::new(10, 10)), Some(4));
    // The cell under the new head stays unset until the next tick's write.
    assert_eq!(game.grid().ttl(Position::new(11, 10)), Some(0));
}

#[test]
fn test_eating_the_first_fruit() {
    let (mut game, mut events) = started_game(2026, Position::new(18, 9));

    walk_to_fruit(&mut game, &mut events);
    let fruit = game.fruit();
    assert_eq!(game.player(), fruit);

    // The scoring tick.
    assert!(game.update(&mut events));

    assert_eq!(game.score(), 1);
    assert_eq!(events.score, Some(1));
    // score + INITIAL_LENGTH = 5 at the freshly eaten cell.
    assert_eq!(game.grid().ttl(fruit), Some(5));
    // Aging is skipped on a scoring tick, so nothing was cleared.
    assert!(events.cleared.is_empty());

    // The replacement fruit is on a free cell, away from the player.
    let new_fruit = events.fruit.expect("fruit must be re-placed");
    assert_eq!(new_fruit, game.fruit());
    assert_ne!(new_fruit, game.player());
    assert!(!game.grid().is_occupied(new_fruit));
}

#[test]
fn test_walking_off_the_left_edge_ends_the_game() {
    let (mut game, mut events) = started_game(3, Position::new(0, 5));

    assert!(game.update(&mut events));
    game.advance(Direction::Left);
    assert_eq!(game.player(), Position::new(-1, 5));

    // Out of bounds is a normal transient state; only the next tick's
    // validity check turns it into the terminal one.
    assert!(!game.game_over());
    assert!(!game.update(&mut events));
    assert!(events.ended);
    assert!(game.game_over());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_same_seed_replays_the_same_game() {
    let (mut a, mut ea) = started_game(777, Position::new(12, 7));
    let (mut b, mut eb) = started_game(777, Position::new(12, 7));
    assert_eq!(a.fruit(), b.fruit());

    walk_to_fruit(&mut a, &mut ea);
    walk_to_fruit(&mut b, &mut eb);
    assert!(a.update(&mut ea));
    assert!(b.update(&mut eb));

    assert_eq!(a.player(), b.player());
    assert_eq!(a.fruit(), b.fruit());
    assert_eq!(a.score(), b.score());
}
