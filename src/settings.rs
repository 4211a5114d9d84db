//! Game settings and difficulty presets
//!
//! Settings are read-only configuration loaded before a session starts.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::NOTIFICATION_MS;
use crate::error::{GameError, GameResult};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Pacing and goals for this preset
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                win_points: 50,
                time_limit_seconds: 180,
                obstacle_spawn_ms: 1600,
                collectible_spawn_ms: 1800,
            },
            Difficulty::Normal => DifficultyConfig {
                win_points: 100,
                time_limit_seconds: 120,
                obstacle_spawn_ms: 1200,
                collectible_spawn_ms: 1500,
            },
            Difficulty::Hard => DifficultyConfig {
                win_points: 150,
                time_limit_seconds: 60,
                obstacle_spawn_ms: 800,
                collectible_spawn_ms: 1100,
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" | "medium" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Goals and spawn cadence for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Score that wins the session
    pub win_points: u32,
    /// Countdown length
    pub time_limit_seconds: u32,
    /// Obstacle spawn period
    pub obstacle_spawn_ms: u64,
    /// Collectible spawn period
    pub collectible_spawn_ms: u64,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl DifficultyConfig {
    /// Reject configs that would produce a session that can't play out
    pub fn validate(&self) -> GameResult<()> {
        if self.win_points == 0 {
            return Err(GameError::InvalidConfig("win_points must be positive".into()));
        }
        if self.time_limit_seconds == 0 {
            return Err(GameError::InvalidConfig(
                "time_limit_seconds must be positive".into(),
            ));
        }
        if self.obstacle_spawn_ms == 0 || self.collectible_spawn_ms == 0 {
            return Err(GameError::InvalidConfig(
                "spawn intervals must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selected preset
    pub difficulty: Difficulty,
    /// Overrides the preset when present
    pub custom: Option<DifficultyConfig>,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Audio ===
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === HUD ===
    /// Milestone toast lifetime
    pub notification_ms: u64,
    /// Display refresh rate used by the headless runner
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            custom: None,
            seed: None,
            muted: false,
            master_volume: 0.8,
            notification_ms: NOTIFICATION_MS,
            fps: 60,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> GameResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> GameResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> GameResult<()> {
        if let Some(custom) = &self.custom {
            custom.validate().inspect_err(|e| log::warn!("Rejected custom difficulty: {}", e))?;
        }
        if self.fps == 0 {
            return Err(GameError::InvalidConfig("fps must be positive".into()));
        }
        Ok(())
    }

    /// The config a session should run with
    pub fn effective_config(&self) -> DifficultyConfig {
        self.custom.unwrap_or_else(|| self.difficulty.config())
    }

    /// Effective volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0)
        }
    }
}
