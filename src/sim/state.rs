//! Game state and core simulation types
//!
//! A `Session` owns everything one play-through touches: the player, the
//! falling entities, the seeded spawner and the periodic task scheduler.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::milestone::MilestoneTracker;
use super::spawn::Spawner;
use super::timer::{Scheduler, TaskKind};
use crate::consts::*;
use crate::error::{GameError, GameResult};
use crate::settings::{Difficulty, DifficultyConfig};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Ran out of lives
    Lose,
    /// Reached the difficulty's win points
    Win,
    /// Countdown reached zero
    TimeUp,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Gameplay running
    Active,
    /// Session over; score and lives are frozen
    Ended(Outcome),
}

/// The player's bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the bucket rim; y never changes
    pub pos: Vec2,
    /// Collision half-extent
    pub size: f32,
    /// Bucket fullness (0-1, cosmetic)
    pub fill: f32,
    /// Splash intensity (0-1, decays every tick)
    pub splash: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_Y),
            size: PLAYER_SIZE,
            fill: 0.0,
            splash: 0.0,
        }
    }
}

impl Player {
    /// Shift horizontally, clamped to keep the bucket on the playfield.
    /// Returns false (and leaves x untouched) when already at the edge.
    pub fn step(&mut self, dx: f32) -> bool {
        let target = (self.pos.x + dx).clamp(self.size, PLAYFIELD_WIDTH - self.size);
        if target == self.pos.x {
            return false;
        }
        self.pos.x = target;
        true
    }

    /// Clean water landed in the bucket
    pub fn absorb(&mut self) {
        self.fill = (self.fill + FILL_PER_COLLECT).min(1.0);
        self.splash = 1.0;
    }

    pub fn decay_splash(&mut self) {
        if self.splash > 0.0 {
            self.splash = (self.splash - SPLASH_DECAY).max(0.0);
        }
    }
}

/// A mud drop. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
}

impl Obstacle {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// A water drop. `pos` is the center; `bad` drops are dirty and cost a life.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub bad: bool,
}

/// What cost the player a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    Obstacle,
    BadWater,
}

/// Things that happened during a tick or timer pass, in order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    ObstacleSpawned { id: u32 },
    CollectibleSpawned { id: u32, bad: bool },
    /// Clean water caught (audio cue)
    Collected { id: u32, score: u32 },
    LifeLost { source: HitSource, lives: u8 },
    /// One-time celebratory notification
    Milestone { threshold: u32, message: &'static str },
    Countdown { time_left: u32 },
    Ended { outcome: Outcome, final_score: u32 },
}

/// Result of a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Set when this tick ended the session
    pub ended: Option<Outcome>,
}

/// Final result shown on the game over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub final_score: u32,
    pub outcome: Outcome,
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub collectibles: &'a [Collectible],
    pub lives: u8,
    pub score: u32,
    pub time_left: u32,
}

/// One play-through, from start/restart to Ended
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the spawner was created with
    pub seed: u64,
    pub(crate) phase: GamePhase,
    pub(crate) config: DifficultyConfig,
    pub(crate) score: u32,
    pub(crate) lives: u8,
    /// Countdown in seconds
    pub(crate) time_left: u32,
    /// Ticks executed this session
    pub time_ticks: u64,
    pub player: Player,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Active collectibles (spawn order)
    pub collectibles: Vec<Collectible>,
    pub(crate) milestones: MilestoneTracker,
    pub(crate) spawner: Spawner,
    pub(crate) scheduler: Scheduler,
    next_id: u32,
}

impl Session {
    /// Create an idle session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            config: DifficultyConfig::default(),
            score: 0,
            lives: STARTING_LIVES,
            time_left: 0,
            time_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            milestones: MilestoneTracker::default(),
            spawner: Spawner::new(seed),
            scheduler: Scheduler::new(),
            next_id: 1,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn milestone_fired(&self, threshold: u32) -> bool {
        self.milestones.has_fired(threshold)
    }

    /// Start a session on a preset
    pub fn start(&mut self, difficulty: Difficulty) -> GameResult<()> {
        self.start_with(difficulty.config())
    }

    /// Start a session on a preset given by name; unknown names are rejected
    pub fn start_named(&mut self, name: &str) -> GameResult<()> {
        self.start(name.parse()?)
    }

    /// Start a session on an arbitrary config
    pub fn start_with(&mut self, config: DifficultyConfig) -> GameResult<()> {
        if self.is_active() {
            return Err(GameError::InvalidTransition {
                action: "start",
                phase: self.phase,
            });
        }
        self.begin(config)
    }

    /// Start over after a session ended
    pub fn restart(&mut self, difficulty: Difficulty) -> GameResult<()> {
        self.restart_with(difficulty.config())
    }

    pub fn restart_with(&mut self, config: DifficultyConfig) -> GameResult<()> {
        if !matches!(self.phase, GamePhase::Ended(_)) {
            return Err(GameError::InvalidTransition {
                action: "restart",
                phase: self.phase,
            });
        }
        self.begin(config)
    }

    /// Full reset into Active, arming spawn and countdown tasks
    fn begin(&mut self, config: DifficultyConfig) -> GameResult<()> {
        config.validate()?;

        self.config = config;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_left = config.time_limit_seconds;
        self.time_ticks = 0;
        self.player = Player::default();
        self.obstacles.clear();
        self.collectibles.clear();
        self.milestones.reset();
        self.next_id = 1;

        self.scheduler.reset();
        self.scheduler
            .arm(TaskKind::SpawnObstacle, config.obstacle_spawn_ms);
        self.scheduler
            .arm(TaskKind::SpawnCollectible, config.collectible_spawn_ms);
        self.scheduler.arm(TaskKind::Countdown, COUNTDOWN_MS);

        self.phase = GamePhase::Active;
        log::info!(
            "Session started: win at {} points, {}s limit, spawns every {}ms/{}ms",
            config.win_points,
            config.time_limit_seconds,
            config.obstacle_spawn_ms,
            config.collectible_spawn_ms
        );
        Ok(())
    }

    /// End the session, canceling every periodic task.
    /// Returns false if the session was not active (the first outcome stands).
    pub fn end(&mut self, outcome: Outcome) -> bool {
        if !self.is_active() {
            return false;
        }
        self.phase = GamePhase::Ended(outcome);
        let canceled = self.scheduler.cancel_all();
        log::info!(
            "Session ended: {:?} with score {} ({} tasks canceled)",
            outcome,
            self.score,
            canceled
        );
        true
    }

    /// End and record the transition as an event
    pub(crate) fn end_with(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) -> bool {
        if !self.end(outcome) {
            return false;
        }
        events.push(GameEvent::Ended {
            outcome,
            final_score: self.score,
        });
        true
    }

    /// Take one life; running out ends the session as a loss
    pub(crate) fn lose_life(&mut self, source: HitSource, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        log::debug!("Life lost to {:?}, {} left", source, self.lives);
        events.push(GameEvent::LifeLost {
            source,
            lives: self.lives,
        });
        if self.lives == 0 {
            self.end_with(Outcome::Lose, events);
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_obstacle(&mut self) -> u32 {
        let id = self.next_entity_id();
        let obstacle = self.spawner.spawn_obstacle(id);
        log::debug!("Spawned obstacle {} at x={:.1}", id, obstacle.pos.x);
        self.obstacles.push(obstacle);
        id
    }

    pub fn spawn_collectible(&mut self) -> u32 {
        let id = self.next_entity_id();
        let collectible = self.spawner.spawn_collectible(id);
        log::debug!(
            "Spawned {} collectible {} at x={:.1}",
            if collectible.bad { "bad" } else { "good" },
            id,
            collectible.pos.x
        );
        self.collectibles.push(collectible);
        id
    }

    /// Advance the wall-clock timeline by `dt_ms`, running every periodic task
    /// that comes due in order. Stops as soon as the session leaves Active.
    pub fn advance_time(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.is_active() {
            return events;
        }

        let until = self.scheduler.now_ms().saturating_add(dt_ms);
        while self.is_active() {
            let Some(kind) = self.scheduler.pop_due(until) else {
                break;
            };
            match kind {
                TaskKind::SpawnObstacle => {
                    let id = self.spawn_obstacle();
                    events.push(GameEvent::ObstacleSpawned { id });
                }
                TaskKind::SpawnCollectible => {
                    let id = self.spawn_collectible();
                    let bad = self.collectibles.last().is_some_and(|c| c.bad);
                    events.push(GameEvent::CollectibleSpawned { id, bad });
                }
                TaskKind::Countdown => self.count_down(&mut events),
            }
        }
        self.scheduler.advance_to(until);
        events
    }

    /// One second elapsed
    fn count_down(&mut self, events: &mut Vec<GameEvent>) {
        self.time_left = self.time_left.saturating_sub(1);
        events.push(GameEvent::Countdown {
            time_left: self.time_left,
        });
        if self.time_left == 0 {
            self.end_with(Outcome::TimeUp, events);
        }
    }

    /// Run one simulation step (see [`super::tick::tick`])
    pub fn tick(&mut self) -> TickReport {
        super::tick::tick(self)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            obstacles: &self.obstacles,
            collectibles: &self.collectibles,
            lives: self.lives,
            score: self.score,
            time_left: self.time_left,
        }
    }

    /// Final score and outcome, once ended
    pub fn summary(&self) -> Option<SessionSummary> {
        self.outcome().map(|outcome| SessionSummary {
            final_score: self.score,
            outcome,
        })
    }
}
