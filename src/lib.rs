//! Arena Dodge - a single-screen wave-survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, waves, collisions, game state)
//! - `platform`: Collaborator seams (renderer, audio, input)
//! - `render`: Frame composition through the renderer seam
//! - `app`: Frame driver tying input, simulation, and collaborators together
//! - `highscores`: Single-integer high score persistence
//! - `settings`: User preferences file

pub mod app;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::{FileStore, HighScoreStore, MemoryStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original ~16 ms frame delay)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation ticks per second
    pub const TICK_RATE: u64 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 64.0;
    pub const PLAYER_START_X: f32 = 368.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Pixels moved per key event (dt-independent)
    pub const PLAYER_STEP: f32 = 50.0;
    pub const START_LIVES: u8 = 3;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 32.0;
    /// Seeker speed is BASE + level * PER_LEVEL
    pub const SEEKER_BASE_SPEED: f32 = 80.0;
    pub const SEEKER_SPEED_PER_LEVEL: f32 = 15.0;
    pub const ENEMIES_PER_WAVE: u32 = 3;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 200.0;

    /// Item defaults
    pub const ITEM_SIZE: f32 = 32.0;
    pub const ITEM_START_X: f32 = 400.0;
    pub const ITEM_START_Y: f32 = 400.0;

    // Timers (ticks at 60 Hz)
    /// Invulnerability window: 1000 ms
    pub const INVULNERABLE_TICKS: u64 = TICK_RATE;
    /// Inter-wave delay: 3000 ms
    pub const WAVE_DELAY_TICKS: u64 = 3 * TICK_RATE;
    /// Shared ranged fire interval: 2000 ms
    pub const FIRE_INTERVAL_TICKS: u64 = 2 * TICK_RATE;

    // Scoring
    pub const CULL_SCORE: u32 = 5;
    pub const WAVE_SCORE: u32 = 20;
    pub const ITEM_SCORE: u32 = 10;
    /// Level-up every time the score crosses a multiple of this
    pub const LEVEL_SCORE_STEP: u32 = 30;

    // Time limit: max(MIN, BASE - (level-1) * STEP) seconds
    pub const BASE_TIME_LIMIT_SECS: u32 = 30;
    pub const TIME_LIMIT_STEP_SECS: u32 = 5;
    pub const MIN_TIME_LIMIT_SECS: u32 = 10;
}

/// Convert a tick count to whole elapsed seconds
#[inline]
pub fn ticks_to_secs(ticks: u64) -> u32 {
    (ticks / consts::TICK_RATE) as u32
}
