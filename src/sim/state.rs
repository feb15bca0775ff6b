//! Simulation state and core types
//!
//! The hero is the only mutable entity; the block never moves.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// Which way the hero faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    /// Never moved yet
    #[default]
    Neutral,
    Right,
}

/// The player-controlled entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Top-left corner of the bounding box
    pub pos: IVec2,
    /// Bounding box size (fixed)
    pub size: IVec2,
    /// Horizontal speed, always one of -1, 0, +1
    pub speed: i32,
    /// Facing from the last nonzero speed; survives `stop`
    pub direction: Facing,
    /// Jump arc parameter; 0 means not in an arc
    pub jump_velocity: f64,
    /// Resting on the ground or on top of the block
    pub on_ground: bool,
    /// Tick counter for animation frames only
    pub animation_clock: i64,
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

impl Hero {
    /// Fresh hero standing on the ground at the spawn point
    pub fn new() -> Self {
        Self {
            pos: IVec2::new(HERO_START_X, GROUND - HERO_HEIGHT),
            size: IVec2::new(HERO_WIDTH, HERO_HEIGHT),
            speed: 0,
            direction: Facing::Neutral,
            jump_velocity: 0.0,
            on_ground: true,
            animation_clock: 0,
        }
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Rightmost x the hero's left edge may take inside the window
    pub fn max_x(&self) -> i32 {
        WINDOW_WIDTH - self.size.x
    }
}

/// The single static collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self {
            rect: Rect::new(OBSTACLE_X, OBSTACLE_Y, OBSTACLE_SIZE, OBSTACLE_SIZE),
        }
    }
}

/// Parameters adjustable at runtime through the debug keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tunable {
    Gravity,
    JumpConstant,
    JumpIncrease,
    InitialJumpVelocity,
}

/// Live-tunable parameters of the jump arc
///
/// Vertical displacement per tick is
/// `gravity * v^2 + jump_constant * v`, after which `v += jump_increase`.
/// With a negative `gravity` this rises, slows, then pulls the hero back down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Quadratic coefficient (negative)
    pub gravity: f64,
    /// Linear coefficient
    pub jump_constant: f64,
    /// Added to the jump velocity every tick of the arc
    pub jump_increase: f64,
    /// Jump velocity set by a jump
    pub initial_jump_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_constant: DEFAULT_JUMP_CONSTANT,
            jump_increase: DEFAULT_JUMP_INCREASE,
            initial_jump_velocity: DEFAULT_INITIAL_JUMP_VELOCITY,
        }
    }
}

impl PhysicsConfig {
    /// Vertical displacement (upward positive) for the given jump velocity
    #[inline]
    pub fn displacement(&self, jump_velocity: f64) -> f64 {
        self.gravity * jump_velocity * jump_velocity + self.jump_constant * jump_velocity
    }

    /// Current value of a tunable
    pub fn get(&self, tunable: Tunable) -> f64 {
        match tunable {
            Tunable::Gravity => self.gravity,
            Tunable::JumpConstant => self.jump_constant,
            Tunable::JumpIncrease => self.jump_increase,
            Tunable::InitialJumpVelocity => self.initial_jump_velocity,
        }
    }

    /// Add `delta` to a tunable
    pub fn adjust(&mut self, tunable: Tunable, delta: f64) {
        let slot = match tunable {
            Tunable::Gravity => &mut self.gravity,
            Tunable::JumpConstant => &mut self.jump_constant,
            Tunable::JumpIncrease => &mut self.jump_increase,
            Tunable::InitialJumpVelocity => &mut self.initial_jump_velocity,
        };
        *slot += delta;
    }

    /// Overlay labels, top to bottom
    pub fn overlay_lines(&self) -> [String; 4] {
        [
            format!("Gravity: {:.6}", self.gravity),
            format!("Jump inc: {:.6}", self.jump_increase),
            format!("Jump const: {:.6}", self.jump_constant),
            format!("Jump vel: {:.6}", self.initial_jump_velocity),
        ]
    }
}
