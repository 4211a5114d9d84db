//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Wall-clock time enters only through `Session::advance_time`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod milestone;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{overlaps, resolve_collisions};
pub use milestone::{MILESTONES, MilestoneTracker};
pub use spawn::Spawner;
pub use state::{
    Collectible, GameEvent, GamePhase, HitSource, Obstacle, Outcome, Player, Session,
    SessionSummary, Snapshot, TickReport,
};
pub use tick::{MoveIntent, cleanup_entities, move_entities, tick};
pub use timer::{PeriodicTask, Scheduler, TaskKind};
