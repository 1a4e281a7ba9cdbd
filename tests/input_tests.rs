//! Input chain tests: debouncer, filter, and poller working together

use std::time::Duration;

use tui_snake::input::{is_allowed, ButtonSource, Debouncer, Poller};
use tui_snake::types::{Button, Direction, DEBOUNCE_WIDTH, SAMPLE_INTERVAL_MS};

/// Replays a fixed per-step frame of raw button states; the poller reads
/// all four buttons once per sampling step, in `Button::ALL` order.
struct ScriptedSource {
    frames: Vec<[bool; 4]>,
    reads: usize,
}

impl ScriptedSource {
    fn new(frames: Vec<[bool; 4]>) -> Self {
        Self { frames, reads: 0 }
    }
}

impl ButtonSource for ScriptedSource {
    fn pressed(&mut self, button: Button) -> bool {
        let step = self.reads / Button::ALL.len();
        self.reads += 1;
        let frame = self
            .frames
            .get(step)
            .or_else(|| self.frames.last())
            .copied()
            .unwrap_or_default();
        frame[button.index()]
    }
}

fn no_sleep(_: Duration) {}

fn held(button: Button) -> [bool; 4] {
    let mut frame = [false; 4];
    frame[button.index()] = true;
    frame
}

#[test]
fn test_configured_width_builds_a_working_poller() {
    // The shipped debounce width is valid and yields one edge per press.
    let mut poller =
        Poller::new(ScriptedSource::new(vec![held(Button::Down)]), DEBOUNCE_WIDTH).unwrap();
    let next = poller.poll_with(Direction::Right, 200, no_sleep);
    assert_eq!(next, Direction::Down);
}

#[test]
fn test_debouncer_reports_exactly_once_per_sustained_press() {
    let mut debouncer = Debouncer::new(DEBOUNCE_WIDTH).unwrap();

    let mut edges = 0;
    for _ in 0..500 {
        if debouncer.update(true) {
            edges += 1;
        }
    }
    assert_eq!(edges, 1);

    // Release, press again: one more edge.
    debouncer.update(false);
    for _ in 0..500 {
        if debouncer.update(true) {
            edges += 1;
        }
    }
    assert_eq!(edges, 2);
}

#[test]
fn test_bounce_never_produces_an_edge() {
    // Alternate active/inactive faster than the register width.
    let mut debouncer = Debouncer::new(DEBOUNCE_WIDTH).unwrap();
    for i in 0..1000 {
        let active = i % 3 != 2;
        assert!(!debouncer.update(active), "bounce sample {} edged", i);
    }
}

#[test]
fn test_filter_truth_table_over_all_pairs() {
    let all = [
        Direction::None,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
    for current in all {
        for candidate in all {
            let expect = !(candidate != Direction::None && candidate.opposite() == current);
            assert_eq!(
                is_allowed(current, candidate),
                expect,
                "current {:?}, candidate {:?}",
                current,
                candidate
            );
        }
    }
}

#[test]
fn test_poll_consumes_the_full_tick_duration() {
    let mut poller = Poller::new(ScriptedSource::new(vec![]), DEBOUNCE_WIDTH).unwrap();

    let mut total_ms = 0u32;
    poller.poll_with(Direction::Up, 200, |d| total_ms += d.as_millis() as u32);
    assert_eq!(total_ms, 200);

    let mut slept = Vec::new();
    poller.poll_with(Direction::Up, 42, |d| slept.push(d.as_millis() as u32));
    // 8 whole sample intervals plus a 2 ms remainder.
    assert_eq!(slept.len(), 9);
    assert!(slept[..8].iter().all(|&ms| ms == SAMPLE_INTERVAL_MS));
    assert_eq!(slept[8], 2);
}

#[test]
fn test_tap_shorter_than_debounce_total_is_noise() {
    // Seven active samples at the shipped width of eight: no edge, heading
    // unchanged.
    let mut frames = vec![held(Button::Up); (DEBOUNCE_WIDTH - 1) as usize];
    frames.push([false; 4]);
    let mut poller = Poller::new(ScriptedSource::new(frames), DEBOUNCE_WIDTH).unwrap();

    assert_eq!(
        poller.poll_with(Direction::Right, 200, no_sleep),
        Direction::Right
    );
}

#[test]
fn test_reversal_is_never_accepted_within_a_tick() {
    // Hold the opposite button for the whole tick.
    let mut poller =
        Poller::new(ScriptedSource::new(vec![held(Button::Left)]), DEBOUNCE_WIDTH).unwrap();
    assert_eq!(
        poller.poll_with(Direction::Right, 200, no_sleep),
        Direction::Right
    );
}
