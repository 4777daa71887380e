//! Porsche 911 Dash - An endless side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game phases)
//! - `render`: Draw-command emission for an external renderer
//! - `input`: Raw input events mapped to the single primary action
//! - `game`: Frame driver tying simulation, background and rendering together
//! - `tuning` / `settings`: Data-driven game balance and preferences

pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical impulse applied on jump (negative is up)
    pub const JUMP_FORCE: f32 = -13.0;
    /// Ground line as a fraction of viewport height
    pub const GROUND_LEVEL_PERCENT: f32 = 0.85;

    /// World scroll speed at the start of a run (units/frame)
    pub const START_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 18.0;
    /// Speed gained every playing frame
    pub const SPEED_INCREMENT: f32 = 0.005;

    /// Spawn interval range at the start of a run (frames)
    pub const MIN_SPAWN_INTERVAL: u32 = 50;
    pub const MAX_SPAWN_INTERVAL: u32 = 150;
    /// Lower bounds the speed-adjusted interval range never drops below
    pub const MIN_SPAWN_FLOOR: u32 = 30;
    pub const MAX_SPAWN_FLOOR: u32 = 60;
    /// How strongly speed shortens each end of the interval range
    pub const MIN_SPAWN_SPEED_FACTOR: f32 = 1.5;
    pub const MAX_SPAWN_SPEED_FACTOR: f32 = 2.0;

    /// Vehicle defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Tyre defaults
    pub const TYRE_RADIUS_MIN: f32 = 12.0;
    pub const TYRE_RADIUS_MAX: f32 = 20.0;
    /// Rubber grey, RGBA 0-1
    pub const TYRE_COLOR: [f32; 4] = [40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0];
    /// Probability that a spawn is a stack instead of a single tyre
    pub const STACK_CHANCE: f32 = 0.2;
    pub const STACK_MIN_TYRES: u32 = 2;
    pub const STACK_MAX_TYRES: u32 = 3;
    /// Stacked tyres squash into each other
    pub const STACK_HEIGHT_FACTOR: f32 = 0.8;

    /// Raw score frames per displayed point
    pub const SCORE_DIVISOR: u64 = 10;

    /// Canvas sizing relative to the host window
    pub const MAX_CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_WIDTH_FRACTION: f32 = 0.9;
    pub const CANVAS_HEIGHT_FRACTION: f32 = 0.7;

    /// Hill silhouette sampling
    pub const HILL_SAMPLE_STEP: f32 = 50.0;
    pub const HILL_SHAPE_HEIGHT: f32 = 20.0;
}

/// Displayed score for a raw per-frame counter
#[inline]
pub fn display_score(raw: u64) -> u64 {
    raw / consts::SCORE_DIVISOR
}
