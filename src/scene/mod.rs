//! Scene controller module
//!
//! Owns the tick cadence and turns raw input into engine commands. All
//! engine access goes through one loop, so the engine needs no lock.

pub mod controller;
pub mod input;

pub use controller::{Flow, SceneController};
pub use input::{Action, InputEvent, Scancode, action_for};

use thiserror::Error;

use crate::renderer::RenderError;

/// Fatal run error
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unable to paint scene: {0}")]
    Render(#[from] RenderError),
}
