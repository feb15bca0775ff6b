//! Physics step and hero commands
//!
//! `advance` moves the hero one step, scaled by a motion factor derived from
//! elapsed wall-clock time. The steps run in a fixed order:
//! horizontal move, window clamp, block side collision, jump arc, landing on
//! the block, walking off the block, ground clamp, facing, animation clock.

use serde::{Deserialize, Serialize};

use super::collision::{blocks_leftward, blocks_rightward, clear_of_span, lands_on};
use super::pose::Pose;
use super::state::{Facing, Hero, Obstacle, PhysicsConfig, Tunable};
use crate::consts::*;

/// Commands issued to the engine by the scene controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Stop,
    Jump,
    /// Add a delta to one tunable
    Tune(Tunable, f64),
    /// Restore default tunables and a fresh hero
    Reset,
}

/// What the hero came to rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Ground,
    Obstacle,
}

/// Something that happened during a step or command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A jump started (plays the jump sound)
    Jumped,
    /// Hero stopped falling
    Landed(Surface),
    /// Hero walked off the block and started an arc
    LedgeLaunch,
    /// Hero was pushed back out of the block's side
    Blocked,
}

/// Owns the hero, the block and the tunables
#[derive(Debug, Clone, Default)]
pub struct KinematicsEngine {
    pub hero: Hero,
    pub obstacle: Obstacle,
    pub config: PhysicsConfig,
}

impl KinematicsEngine {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            hero: Hero::new(),
            obstacle: Obstacle::default(),
            config,
        }
    }

    /// Advance the hero by one step scaled by `factor`
    pub fn advance(&mut self, factor: u32) -> Vec<SimEvent> {
        let mut events = Vec::new();
        let block = self.obstacle.rect;
        let config = self.config;
        let hero = &mut self.hero;

        // Horizontal move, clamped to the window
        let step = i32::try_from(factor).unwrap_or(i32::MAX);
        hero.pos.x = hero
            .pos
            .x
            .saturating_add(hero.speed.saturating_mul(step))
            .clamp(0, hero.max_x());

        // Block sides: pin against the face, speed is left alone
        if hero.speed > 0 && blocks_rightward(&hero.rect(), &block) {
            hero.pos.x = block.left() - hero.size.x;
            events.push(SimEvent::Blocked);
        }
        if hero.speed < 0 && blocks_leftward(&hero.rect(), &block) {
            hero.pos.x = block.right();
            events.push(SimEvent::Blocked);
        }

        // Jump arc. Anything past the ground is caught by the ground clamp
        if hero.jump_velocity > 0.0 {
            let dy = config.displacement(hero.jump_velocity);
            hero.jump_velocity += config.jump_increase;
            hero.pos.y = hero.pos.y.saturating_sub(dy as i32).min(GROUND);
            hero.on_ground = false;
        }

        // Land on top of the block
        if lands_on(&hero.rect(), &block) {
            hero.pos.y = block.top() - hero.size.y;
            hero.on_ground = true;
            hero.jump_velocity = 0.0;
            events.push(SimEvent::Landed(Surface::Obstacle));
        }

        // Walked off the block: reuse the jump arc to fall
        if hero.rect().bottom() < GROUND && hero.on_ground && clear_of_span(&hero.rect(), &block) {
            hero.jump_velocity = LEDGE_LAUNCH_VELOCITY;
            hero.on_ground = false;
            events.push(SimEvent::LedgeLaunch);
        }

        // Ground
        if hero.rect().bottom() > GROUND {
            hero.pos.y = GROUND - hero.size.y;
            hero.jump_velocity = 0.0;
            hero.on_ground = true;
            events.push(SimEvent::Landed(Surface::Ground));
        }

        if hero.speed > 0 {
            hero.direction = Facing::Right;
        } else if hero.speed < 0 {
            hero.direction = Facing::Left;
        }

        if hero.animation_clock == i64::MAX {
            hero.animation_clock = -1;
        }
        hero.animation_clock += 1;

        events
    }

    pub fn move_right(&mut self) {
        self.hero.speed = 1;
    }

    pub fn move_left(&mut self) {
        self.hero.speed = -1;
    }

    /// Stop moving; facing is kept
    pub fn stop(&mut self) {
        self.hero.speed = 0;
    }

    /// Start a jump if standing still vertically
    ///
    /// Returns `Some(SimEvent::Jumped)` when a jump actually started. A
    /// non-positive initial jump velocity would never leave the ground, so it
    /// is treated as no jump.
    pub fn jump(&mut self) -> Option<SimEvent> {
        let hero = &mut self.hero;
        if !hero.on_ground || hero.jump_velocity != 0.0 {
            return None;
        }
        if self.config.initial_jump_velocity <= 0.0 {
            log::debug!(
                "jump ignored: initial jump velocity {} is not positive",
                self.config.initial_jump_velocity
            );
            return None;
        }

        hero.jump_velocity = self.config.initial_jump_velocity;
        hero.on_ground = false;
        Some(SimEvent::Jumped)
    }

    /// Adjust one tunable by `delta`
    pub fn tune(&mut self, tunable: Tunable, delta: f64) {
        self.config.adjust(tunable, delta);
        log::debug!("{:?} is now {:.6}", tunable, self.config.get(tunable));
    }

    /// Restore default tunables and put the hero back at the spawn point
    pub fn reset(&mut self) {
        self.config = PhysicsConfig::default();
        self.hero = Hero::new();
    }

    /// Apply a controller command
    pub fn apply(&mut self, command: Command) -> Vec<SimEvent> {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Stop => self.stop(),
            Command::Jump => return self.jump().into_iter().collect(),
            Command::Tune(tunable, delta) => self.tune(tunable, delta),
            Command::Reset => self.reset(),
        }
        Vec::new()
    }

    /// Snapshot for the render tick
    pub fn current_pose(&self) -> Pose {
        Pose::of(&self.hero)
    }
}
