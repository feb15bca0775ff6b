//! Paint sink contract
//!
//! One frame is painted per render tick, always in the same z-order:
//! background, hero, block, then the four overlay labels.

pub mod trace;

pub use trace::TraceRenderer;

use thiserror::Error;

use crate::sim::{Rect, Sprite};

/// Failure reported by a paint sink
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Something that can draw the scene
pub trait PaintSink {
    /// Clear and draw the background
    fn paint_background(&mut self) -> Result<(), RenderError>;

    /// Draw the hero sprite, flipped horizontally when `mirrored`
    fn paint_hero(&mut self, rect: Rect, sprite: Sprite, mirrored: bool)
    -> Result<(), RenderError>;

    /// Draw the block
    fn paint_obstacle(&mut self, rect: Rect) -> Result<(), RenderError>;

    /// Draw an overlay label with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), RenderError>;

    /// Show the finished frame
    fn present(&mut self) -> Result<(), RenderError>;
}
