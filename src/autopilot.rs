//! Demo mode input
//!
//! Plays the game without a keyboard: runs left and right for random
//! stretches and hops now and then. Seeded, so the same seed always produces
//! the same key stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::scene::{InputEvent, Scancode};

/// Chance per decision of tapping jump while moving
const JUMP_CHANCE: f64 = 0.15;
/// Decisions an arrow key stays held
const MIN_HOLD: u32 = 3;
const MAX_HOLD: u32 = 15;

/// Seeded key-press generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Arrow key currently held down
    held: Option<Scancode>,
    /// Decisions left before releasing it
    hold_left: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: None,
            hold_left: 0,
        }
    }

    /// Key events for the next decision
    pub fn next_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if self.hold_left > 0 {
            self.hold_left -= 1;
            if self.held.is_some() && self.rng.random_bool(JUMP_CHANCE) {
                events.push(InputEvent::KeyDown(Scancode::UP));
                events.push(InputEvent::KeyUp(Scancode::UP));
            }
            return events;
        }

        if let Some(code) = self.held.take() {
            events.push(InputEvent::KeyUp(code));
        }

        // Mostly run right, sometimes back, sometimes stand still
        let roll = self.rng.random_range(0..100);
        let next = match roll {
            0..45 => Some(Scancode::RIGHT),
            45..80 => Some(Scancode::LEFT),
            _ => None,
        };
        if let Some(code) = next {
            events.push(InputEvent::KeyDown(code));
        }
        self.held = next;
        self.hold_left = self.rng.random_range(MIN_HOLD..=MAX_HOLD);
        events
    }

    /// Key-up for whatever is still held, so the hero stops cleanly
    pub fn release(&mut self) -> Option<InputEvent> {
        self.hold_left = 0;
        self.held.take().map(InputEvent::KeyUp)
    }
}
