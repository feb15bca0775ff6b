//! Kinematics simulation module
//!
//! All hero motion lives here. This module must stay pure:
//! - Integer positions, elapsed time arrives as a motion factor
//! - No clocks, rendering, audio or platform dependencies
//! - Every input yields a defined next state (nothing here can fail)

pub mod collision;
pub mod pose;
pub mod state;
pub mod tick;

pub use collision::{blocks_leftward, blocks_rightward, clear_of_span, lands_on};
pub use pose::{Pose, Sprite};
pub use state::{Facing, Hero, Obstacle, PhysicsConfig, Rect, Tunable};
pub use tick::{Command, KinematicsEngine, SimEvent, Surface};
