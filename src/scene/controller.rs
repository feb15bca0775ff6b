//! Update/render/input dispatch
//!
//! Three sources feed one loop: the update timer, the render timer and the
//! input channel. Only one of them is handled at a time.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use super::SceneError;
use super::input::{Action, InputEvent, action_for};
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::{OVERLAY_LINE_SPACING, OVERLAY_X, OVERLAY_Y};
use crate::renderer::PaintSink;
use crate::settings::Settings;
use crate::sim::{KinematicsEngine, SimEvent, Sprite};

/// Whether the run loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives the engine and bridges it to the paint and sound sinks
pub struct SceneController<P: PaintSink, S: SoundSink> {
    engine: KinematicsEngine,
    painter: P,
    audio: S,
    settings: Settings,
    last_update: Instant,
    /// Sounds raised by commands or steps, played on the next render tick
    pending_sounds: Vec<SoundEffect>,
    /// Footfall frame already played; cleared once a non-footfall frame shows
    last_step_frame: Option<u8>,
}

impl<P: PaintSink, S: SoundSink> SceneController<P, S> {
    pub fn new(
        engine: KinematicsEngine,
        painter: P,
        audio: S,
        settings: Settings,
        now: Instant,
    ) -> Self {
        Self {
            engine,
            painter,
            audio,
            settings: settings.sanitized(),
            last_update: now,
            pending_sounds: Vec::new(),
            last_step_frame: None,
        }
    }

    pub fn engine(&self) -> &KinematicsEngine {
        &self.engine
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn audio(&self) -> &S {
        &self.audio
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_parts(self) -> (KinematicsEngine, P, S) {
        (self.engine, self.painter, self.audio)
    }

    /// Dispatch one input event
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match action_for(event) {
            Action::Engine(command) => {
                log::debug!("{:?} -> {:?}", event, command);
                let events = self.engine.apply(command);
                self.absorb(&events);
            }
            Action::Quit => return Flow::Quit,
            Action::None => {}
            Action::Unknown(code) => log::warn!("unknown key {}", code.0),
        }
        Flow::Continue
    }

    /// Update tick: advance the engine by the time since the previous tick
    ///
    /// Returns the motion factor used.
    pub fn update(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_update);
        let factor = self.settings.factor_for(elapsed);
        self.last_update = now;

        let events = self.engine.advance(factor);
        self.absorb(&events);
        factor
    }

    /// Render tick: paint the frame, then play any pending sounds
    pub fn render(&mut self) -> Result<(), SceneError> {
        let pose = self.engine.current_pose();

        self.painter.paint_background()?;
        self.painter.paint_hero(pose.rect, pose.sprite, pose.mirrored)?;
        self.painter.paint_obstacle(self.engine.obstacle.rect)?;
        let mut y = OVERLAY_Y;
        for line in self.engine.config.overlay_lines() {
            self.painter.draw_text(OVERLAY_X, y, &line)?;
            y += OVERLAY_LINE_SPACING;
        }
        self.painter.present()?;

        // A running frame outlives several renders; play its footfall once
        match (pose.step, pose.sprite) {
            (true, Sprite::Running(frame)) => {
                if self.last_step_frame != Some(frame) {
                    self.audio.play_once(SoundEffect::Step);
                    self.last_step_frame = Some(frame);
                }
            }
            _ => self.last_step_frame = None,
        }
        for effect in self.pending_sounds.drain(..) {
            self.audio.play_once(effect);
        }
        Ok(())
    }

    /// Run until a quit event arrives, the input channel closes, or a paint
    /// fails
    pub fn run(&mut self, events: &Receiver<InputEvent>) -> Result<(), SceneError> {
        let update_every = self.settings.update_interval;
        let render_every = self.settings.render_interval;

        let start = Instant::now();
        self.last_update = start;
        let mut next_update = start + update_every;
        let mut next_render = start + render_every;
        log::info!(
            "scene running (update every {:?}, render every {:?})",
            update_every,
            render_every
        );

        loop {
            let now = Instant::now();
            if now >= next_update {
                let factor = self.update(now);
                log::trace!("update factor {}", factor);
                next_update = reschedule(next_update, update_every, now);
                continue;
            }
            if now >= next_render {
                self.render()?;
                next_render = reschedule(next_render, render_every, now);
                continue;
            }

            let wait = next_update.min(next_render) - now;
            match events.recv_timeout(wait) {
                Ok(event) => {
                    if self.handle_event(event) == Flow::Quit {
                        log::info!("quit requested");
                        return Ok(());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::info!("input closed, stopping scene");
                    return Ok(());
                }
            }
        }
    }

    fn absorb(&mut self, events: &[SimEvent]) {
        for event in events {
            match event {
                SimEvent::Jumped => self.pending_sounds.push(SoundEffect::Jump),
                SimEvent::Blocked => log::trace!("hero blocked at {:?}", self.engine.hero.pos),
                SimEvent::Landed(_) | SimEvent::LedgeLaunch => {
                    log::debug!("{:?} at {:?}", event, self.engine.hero.pos)
                }
            }
        }
    }
}

/// Next deadline for a periodic timer; missed ticks are dropped
fn reschedule(deadline: Instant, period: Duration, now: Instant) -> Instant {
    let next = deadline + period;
    if next <= now { now + period } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::RenderError;
    use crate::scene::Scancode;
    use crate::sim::{Rect, Sprite};
    use std::sync::mpsc;
    use std::thread;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Background,
        Hero(Rect, Sprite, bool),
        Obstacle(Rect),
        Text(i32, i32, String),
        Present,
    }

    #[derive(Default)]
    struct RecordingPainter {
        calls: Vec<Call>,
        fail: bool,
    }

    impl RecordingPainter {
        fn frames(&self) -> usize {
            self.calls.iter().filter(|c| **c == Call::Present).count()
        }
    }

    impl PaintSink for RecordingPainter {
        fn paint_background(&mut self) -> Result<(), RenderError> {
            if self.fail {
                return Err(RenderError::Other("no surface".into()));
            }
            self.calls.push(Call::Background);
            Ok(())
        }

        fn paint_hero(
            &mut self,
            rect: Rect,
            sprite: Sprite,
            mirrored: bool,
        ) -> Result<(), RenderError> {
            self.calls.push(Call::Hero(rect, sprite, mirrored));
            Ok(())
        }

        fn paint_obstacle(&mut self, rect: Rect) -> Result<(), RenderError> {
            self.calls.push(Call::Obstacle(rect));
            Ok(())
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), RenderError> {
            self.calls.push(Call::Text(x, y, text.to_string()));
            Ok(())
        }

        fn present(&mut self) -> Result<(), RenderError> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        played: Vec<SoundEffect>,
    }

    impl SoundSink for RecordingAudio {
        fn play_once(&mut self, effect: SoundEffect) {
            self.played.push(effect);
        }
    }

    fn scene(start: Instant) -> SceneController<RecordingPainter, RecordingAudio> {
        SceneController::new(
            KinematicsEngine::default(),
            RecordingPainter::default(),
            RecordingAudio::default(),
            Settings::default(),
            start,
        )
    }

    #[test]
    fn test_render_order() {
        let mut scene = scene(Instant::now());
        scene.render().unwrap();

        let calls = &scene.painter().calls;
        assert_eq!(calls.len(), 8);
        assert_eq!(calls[0], Call::Background);
        assert_eq!(
            calls[1],
            Call::Hero(Rect::new(HERO_START_X, GROUND - HERO_HEIGHT, 38, 68), Sprite::Idle, false)
        );
        assert_eq!(calls[2], Call::Obstacle(Rect::new(400, 310, 50, 50)));
        assert_eq!(calls[3], Call::Text(20, 20, "Gravity: -0.110000".into()));
        assert_eq!(calls[4], Call::Text(20, 40, "Jump inc: 0.250000".into()));
        assert_eq!(calls[5], Call::Text(20, 60, "Jump const: 1.200000".into()));
        assert_eq!(calls[6], Call::Text(20, 80, "Jump vel: 1.000000".into()));
        assert_eq!(calls[7], Call::Present);
        assert!(scene.audio().played.is_empty());
    }

    #[test]
    fn test_update_factor_from_elapsed_time() {
        let start = Instant::now();
        let mut scene = scene(start);
        scene.handle_event(InputEvent::KeyDown(Scancode::RIGHT));

        assert_eq!(scene.update(start + Duration::from_millis(10)), 3);
        assert_eq!(scene.engine().hero.pos.x, HERO_START_X + 3);

        // Measured from the previous update, remainder dropped
        assert_eq!(scene.update(start + Duration::from_millis(15)), 1);
        assert_eq!(scene.engine().hero.pos.x, HERO_START_X + 4);

        scene.handle_event(InputEvent::KeyUp(Scancode::RIGHT));
        assert_eq!(scene.update(start + Duration::from_millis(45)), 10);
        assert_eq!(scene.engine().hero.pos.x, HERO_START_X + 4);
    }

    #[test]
    fn test_jump_sound_plays_once() {
        let start = Instant::now();
        let mut scene = scene(start);
        scene.handle_event(InputEvent::KeyDown(Scancode::UP));
        // Second press mid-air is ignored
        scene.update(start + Duration::from_millis(10));
        scene.handle_event(InputEvent::KeyDown(Scancode::UP));

        scene.render().unwrap();
        scene.render().unwrap();
        assert_eq!(scene.audio().played, vec![SoundEffect::Jump]);
    }

    #[test]
    fn test_step_sound_while_running() {
        let start = Instant::now();
        let mut scene = scene(start);
        scene.handle_event(InputEvent::KeyDown(Scancode::RIGHT));
        scene.update(start + Duration::from_millis(10));

        // Clock is 1: running frame 0 is a footfall
        scene.render().unwrap();
        assert_eq!(scene.audio().played, vec![SoundEffect::Step]);
        assert!(matches!(
            scene.painter().calls[1],
            Call::Hero(_, Sprite::Running(0), false)
        ));
    }

    #[test]
    fn test_step_sound_once_per_footfall() {
        let start = Instant::now();
        let mut scene = scene(start);
        scene.handle_event(InputEvent::KeyDown(Scancode::RIGHT));
        scene.update(start + Duration::from_millis(10));

        // Several renders inside one running frame
        scene.render().unwrap();
        scene.render().unwrap();
        scene.render().unwrap();
        assert_eq!(scene.audio().played, vec![SoundEffect::Step]);

        // Run on through frames 1-3 into frame 4, rendering after every update
        for tick in 2..=45u64 {
            scene.update(start + Duration::from_millis(10 * tick));
            scene.render().unwrap();
        }
        assert_eq!(scene.engine().hero.animation_clock, 45);
        assert_eq!(
            scene.audio().played,
            vec![SoundEffect::Step, SoundEffect::Step]
        );
    }

    #[test]
    fn test_zero_intervals_are_replaced() {
        let settings = Settings {
            update_interval: Duration::ZERO,
            render_interval: Duration::ZERO,
            millis_per_factor: 0,
        };
        let scene = SceneController::new(
            KinematicsEngine::default(),
            RecordingPainter::default(),
            RecordingAudio::default(),
            settings,
            Instant::now(),
        );
        assert_eq!(scene.settings(), &Settings::default());
    }

    #[test]
    fn test_tuning_shows_in_overlay_and_reset_restores() {
        let start = Instant::now();
        let mut scene = scene(start);
        scene.handle_event(InputEvent::KeyDown(Scancode::Q));
        scene.handle_event(InputEvent::KeyDown(Scancode::R));
        scene.handle_event(InputEvent::KeyDown(Scancode::LEFT));
        scene.update(start + Duration::from_millis(30));
        assert!(scene.engine().hero.pos.x < HERO_START_X);

        scene.render().unwrap();
        let calls = &scene.painter().calls;
        assert_eq!(calls[3], Call::Text(20, 20, "Gravity: -0.120000".into()));
        assert_eq!(calls[6], Call::Text(20, 80, "Jump vel: 1.100000".into()));

        scene.handle_event(InputEvent::KeyDown(Scancode::ESCAPE));
        assert_eq!(scene.engine().config, crate::sim::PhysicsConfig::default());
        assert_eq!(scene.engine().hero, crate::sim::Hero::new());
    }

    #[test]
    fn test_unknown_and_quit() {
        let mut scene = scene(Instant::now());
        let before = scene.engine().hero.clone();
        assert_eq!(scene.handle_event(InputEvent::KeyDown(Scancode(99))), Flow::Continue);
        assert_eq!(scene.engine().hero, before);
        assert_eq!(scene.handle_event(InputEvent::Quit), Flow::Quit);
    }

    #[test]
    fn test_reschedule_drops_missed_ticks() {
        let start = Instant::now();
        let period = Duration::from_millis(10);
        assert_eq!(reschedule(start, period, start), start + period);
        let late = start + Duration::from_millis(35);
        assert_eq!(reschedule(start, period, late), late + period);
    }

    #[test]
    fn test_run_until_quit() {
        let (tx, rx) = mpsc::channel();
        let sender = thread::spawn(move || {
            tx.send(InputEvent::KeyDown(Scancode::RIGHT)).unwrap();
            thread::sleep(Duration::from_millis(150));
            tx.send(InputEvent::Quit).unwrap();
        });

        let mut scene = scene(Instant::now());
        scene.run(&rx).unwrap();
        sender.join().unwrap();

        assert!(scene.engine().hero.pos.x > HERO_START_X);
        assert!(scene.painter().frames() >= 1);
    }

    #[test]
    fn test_run_stops_when_input_closes() {
        let (tx, rx) = mpsc::channel::<InputEvent>();
        drop(tx);
        let mut scene = scene(Instant::now());
        assert!(scene.run(&rx).is_ok());
    }

    #[test]
    fn test_run_aborts_on_paint_failure() {
        let (_tx, rx) = mpsc::channel::<InputEvent>();
        let mut scene = SceneController::new(
            KinematicsEngine::default(),
            RecordingPainter {
                fail: true,
                ..Default::default()
            },
            RecordingAudio::default(),
            Settings::default(),
            Instant::now(),
        );
        let err = scene.run(&rx).unwrap_err();
        assert!(matches!(err, SceneError::Render(_)));
    }
}
