//! Sound sink contract
//!
//! The scene only ever asks for a sound to be played once; mixing and
//! decoding belong to whatever implements [`SoundSink`].

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Footfall while running
    Step,
    /// Jump started
    Jump,
}

impl SoundEffect {
    /// Stable sound identifier
    pub fn id(&self) -> &'static str {
        match self {
            SoundEffect::Step => "step",
            SoundEffect::Jump => "jump",
        }
    }
}

/// Fire-and-forget sound playback
pub trait SoundSink {
    fn play_once(&mut self, effect: SoundEffect);
}

/// Sound sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio {
    steps: u64,
    jumps: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `effect` was played
    pub fn played(&self, effect: SoundEffect) -> u64 {
        match effect {
            SoundEffect::Step => self.steps,
            SoundEffect::Jump => self.jumps,
        }
    }
}

impl SoundSink for LogAudio {
    fn play_once(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::Step => self.steps += 1,
            SoundEffect::Jump => self.jumps += 1,
        }
        log::debug!("play {}", effect.id());
    }
}
