//! Runny Jumpy entry point
//!
//! Headless demo: the autopilot presses the keys, frames go to stdout as
//! JSON lines (with `--trace`) and sounds go to the log.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use runny_jumpy::audio::{LogAudio, SoundEffect};
use runny_jumpy::autopilot::Autopilot;
use runny_jumpy::consts::WINDOW_TITLE;
use runny_jumpy::renderer::TraceRenderer;
use runny_jumpy::scene::InputEvent;
use runny_jumpy::sim::KinematicsEngine;
use runny_jumpy::{SceneController, Settings, logging};

/// Runny Jumpy Guy, played by the autopilot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// How long to play, in seconds
    #[arg(long, default_value_t = 10)]
    seconds: u64,

    /// Write every Nth frame to stdout as JSON (0 = off)
    #[arg(long, default_value_t = 0)]
    trace: u64,

    /// Update timer period in milliseconds
    #[arg(long, default_value_t = runny_jumpy::consts::UPDATE_INTERVAL_MS)]
    update_ms: u64,

    /// Render timer period in milliseconds
    #[arg(long, default_value_t = runny_jumpy::consts::RENDER_INTERVAL_MS)]
    render_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Time between autopilot decisions
const DECISION_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = Settings::with_intervals(args.update_ms, args.render_ms);
    log::info!("{} (headless) starting, seed {}", WINDOW_TITLE, args.seed);
    match serde_json::to_string(&settings) {
        Ok(json) => log::debug!("settings: {}", json),
        Err(e) => log::warn!("unable to encode settings: {}", e),
    }

    let (tx, rx) = mpsc::channel();
    let seed = args.seed;
    let play_for = Duration::from_secs(args.seconds);
    let stopped = Arc::new(AtomicBool::new(false));
    let driver_stopped = Arc::clone(&stopped);
    let driver = thread::spawn(move || {
        let mut pilot = Autopilot::new(seed);
        let started = Instant::now();
        while started.elapsed() < play_for && !driver_stopped.load(Ordering::Relaxed) {
            for event in pilot.next_events() {
                if tx.send(event).is_err() {
                    return;
                }
            }
            thread::sleep(DECISION_INTERVAL);
        }
        if let Some(release) = pilot.release() {
            let _ = tx.send(release);
        }
        let _ = tx.send(InputEvent::Quit);
    });

    let out: Box<dyn io::Write> = if args.trace > 0 {
        Box::new(io::stdout())
    } else {
        Box::new(io::sink())
    };
    let painter = TraceRenderer::sampled(out, args.trace);
    let mut scene = SceneController::new(
        KinematicsEngine::default(),
        painter,
        LogAudio::new(),
        settings,
        Instant::now(),
    );

    let result = scene.run(&rx);
    // The scene may stop first (paint failure); let the driver finish
    stopped.store(true, Ordering::Relaxed);
    drop(rx);
    if driver.join().is_err() {
        log::warn!("autopilot thread panicked");
    }

    let (engine, painter, audio) = scene.into_parts();
    match result {
        Ok(()) => {
            log::info!(
                "done: {} frames, {} steps, {} jumps, hero at {:?}",
                painter.frames(),
                audio.played(SoundEffect::Step),
                audio.played(SoundEffect::Jump),
                engine.hero.pos
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Error running the game: {}", e);
            ExitCode::FAILURE
        }
    }
}
