//! Runny Jumpy - a single-screen platformer
//!
//! Core modules:
//! - `sim`: Kinematics engine (hero motion, jump arc, block/ground collision)
//! - `scene`: Tick cadence, input dispatch, bridging poses to the sinks
//! - `renderer`: Paint sink contract and a headless JSON-lines sink
//! - `audio`: Sound sink contract
//! - `autopilot`: Seeded demo input
//! - `settings`: Run options

pub mod audio;
pub mod autopilot;
pub mod logging;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::SceneController;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title for sinks that open a window
    pub const WINDOW_TITLE: &str = "Runny Jumpy Guy";
    /// Window width; the hero is clamped inside it
    pub const WINDOW_WIDTH: i32 = 800;

    /// Ground plane (y of the surface the hero stands on)
    pub const GROUND: i32 = 360;

    /// Hero bounding box
    pub const HERO_WIDTH: i32 = 38;
    pub const HERO_HEIGHT: i32 = 68;
    /// Hero spawn x (resting on the ground)
    pub const HERO_START_X: i32 = 100;

    /// Block position and size
    pub const OBSTACLE_X: i32 = 400;
    pub const OBSTACLE_Y: i32 = GROUND - 50;
    pub const OBSTACLE_SIZE: i32 = 50;

    /// Jump velocity forced when the hero walks off the block
    pub const LEDGE_LAUNCH_VELOCITY: f64 = 12.5;

    /// Running animation: frame count and physics ticks per frame
    pub const RUN_FRAME_COUNT: i64 = 8;
    pub const TICKS_PER_RUN_FRAME: i64 = 10;
    /// Every Nth running frame is a footfall
    pub const STEP_FRAME_INTERVAL: i64 = 4;

    /// Update timer period (~100 Hz)
    pub const UPDATE_INTERVAL_MS: u64 = 10;
    /// Render timer period (~31 Hz)
    pub const RENDER_INTERVAL_MS: u64 = 32;
    /// Elapsed milliseconds per unit of motion factor
    pub const MILLIS_PER_FACTOR: u64 = 3;

    /// Overlay labels: first line position and line spacing
    pub const OVERLAY_X: i32 = 20;
    pub const OVERLAY_Y: i32 = 20;
    pub const OVERLAY_LINE_SPACING: i32 = 20;

    /// Physics tunable defaults
    pub const DEFAULT_GRAVITY: f64 = -0.11;
    pub const DEFAULT_JUMP_CONSTANT: f64 = 1.2;
    pub const DEFAULT_JUMP_INCREASE: f64 = 0.25;
    pub const DEFAULT_INITIAL_JUMP_VELOCITY: f64 = 1.0;

    /// Debug-key step sizes
    pub const GRAVITY_STEP: f64 = 0.01;
    pub const JUMP_TUNING_STEP: f64 = 0.1;
}
