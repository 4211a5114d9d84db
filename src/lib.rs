//! Bucket Catch - A falling-drop catcher arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, session state)
//! - `clock`: Per-frame driver feeding wall-clock time into the simulation
//! - `renderer`: Renderer collaborator and a text renderer
//! - `audio`: Audio collaborator
//! - `ui`: Milestone notification collaborator
//! - `platform`: Key mapping for move intents
//! - `settings`: Difficulty presets and game settings

pub mod audio;
pub mod clock;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{GameError, GameResult};
pub use settings::{Difficulty, DifficultyConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player (bucket) defaults
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_Y: f32 = 550.0;
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Horizontal distance covered by one move intent
    pub const PLAYER_MOVE_STEP: f32 = 20.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Falling entities
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_SIZE: f32 = 15.0;
    /// Fall speeds in units per tick
    pub const OBSTACLE_FALL_SPEED: f32 = 4.0;
    pub const COLLECTIBLE_FALL_SPEED: f32 = 3.0;
    /// Chance a collectible spawns as dirty water
    pub const BAD_COLLECTIBLE_CHANCE: f64 = 0.25;

    /// Scoring
    pub const COLLECT_POINTS: u32 = 10;
    pub const FILL_PER_COLLECT: f32 = 0.18;
    /// Splash decay per tick (cosmetic)
    pub const SPLASH_DECAY: f32 = 0.08;

    /// Countdown period in milliseconds
    pub const COUNTDOWN_MS: u64 = 1000;
    /// How long a milestone toast stays on screen
    pub const NOTIFICATION_MS: u64 = 1800;
}
