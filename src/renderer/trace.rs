//! Headless paint sink writing one JSON object per frame

use std::io::Write;

use serde::Serialize;

use super::{PaintSink, RenderError};
use crate::sim::{Rect, Sprite};

/// Hero draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroDraw {
    pub rect: Rect,
    pub sprite: Sprite,
    pub mirrored: bool,
}

/// Overlay draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDraw {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Everything painted between two `present` calls
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub index: u64,
    pub hero: Option<HeroDraw>,
    pub obstacle: Option<Rect>,
    pub texts: Vec<TextDraw>,
}

/// Writes frames as JSON lines to any `Write`
///
/// With `every` greater than one only every Nth frame is written; the rest
/// are still assembled so ordering mistakes surface either way.
pub struct TraceRenderer<W: Write> {
    out: W,
    every: u64,
    frame: Frame,
    frames: u64,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::sampled(out, 1)
    }

    pub fn sampled(out: W, every: u64) -> Self {
        Self {
            out,
            every: every.max(1),
            frame: Frame::default(),
            frames: 0,
        }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PaintSink for TraceRenderer<W> {
    fn paint_background(&mut self) -> Result<(), RenderError> {
        self.frame = Frame {
            index: self.frames,
            ..Frame::default()
        };
        Ok(())
    }

    fn paint_hero(
        &mut self,
        rect: Rect,
        sprite: Sprite,
        mirrored: bool,
    ) -> Result<(), RenderError> {
        self.frame.hero = Some(HeroDraw {
            rect,
            sprite,
            mirrored,
        });
        Ok(())
    }

    fn paint_obstacle(&mut self, rect: Rect) -> Result<(), RenderError> {
        if self.frame.hero.is_none() {
            return Err(RenderError::Other("block painted before hero".into()));
        }
        self.frame.obstacle = Some(rect);
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), RenderError> {
        self.frame.texts.push(TextDraw {
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        if self.frames % self.every == 0 {
            serde_json::to_writer(&mut self.out, &self.frame)?;
            self.out.write_all(b"\n")?;
        }
        self.frames += 1;
        Ok(())
    }
}
