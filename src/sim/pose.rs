//! Renderable snapshot of the hero

use serde::{Deserialize, Serialize};

use super::state::{Facing, Hero, Rect};
use crate::consts::*;

/// Sprite to draw for the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Idle,
    Jumping,
    /// Only shown while the jump velocity is negative, which the default
    /// tuning never produces; a negative jump increase can.
    Landing,
    /// Running animation frame in `0..RUN_FRAME_COUNT`
    Running(u8),
}

/// One render tick's view of the hero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub rect: Rect,
    pub sprite: Sprite,
    /// Flip horizontally (hero faces left)
    pub mirrored: bool,
    /// A footfall frame is showing; true for every render of that frame,
    /// so callers play the sound once per frame
    pub step: bool,
}

impl Pose {
    /// Select sprite and mirroring for the hero's current state
    pub fn of(hero: &Hero) -> Self {
        let facing_left = hero.direction == Facing::Left;

        let (sprite, mirrored, step) = if hero.speed == 0 {
            (Sprite::Idle, facing_left, false)
        } else if hero.jump_velocity > 0.0 {
            (Sprite::Jumping, facing_left, false)
        } else if hero.jump_velocity < 0.0 {
            (Sprite::Landing, facing_left, false)
        } else {
            let frame = (hero.animation_clock / TICKS_PER_RUN_FRAME).rem_euclid(RUN_FRAME_COUNT);
            (
                Sprite::Running(frame as u8),
                hero.speed < 0,
                frame % STEP_FRAME_INTERVAL == 0,
            )
        };

        Self {
            rect: hero.rect(),
            sprite,
            mirrored,
            step,
        }
    }
}
