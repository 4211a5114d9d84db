//! Falling entity spawner
//!
//! Owns the session's seeded RNG so a given seed always produces the same
//! sequence of drops.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Collectible, Obstacle};
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    width: f32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            width: PLAYFIELD_WIDTH,
        }
    }

    /// One obstacle just above the visible area
    pub fn spawn_obstacle(&mut self, id: u32) -> Obstacle {
        let x = self.random_x(OBSTACLE_SIZE);
        Obstacle {
            id,
            pos: Vec2::new(x, -OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        }
    }

    /// One collectible just above the visible area, dirty with a fixed chance
    pub fn spawn_collectible(&mut self, id: u32) -> Collectible {
        let x = self.random_x(COLLECTIBLE_SIZE);
        let bad = self.rng.random_bool(BAD_COLLECTIBLE_CHANCE);
        Collectible {
            id,
            pos: Vec2::new(x, -COLLECTIBLE_SIZE),
            size: COLLECTIBLE_SIZE,
            bad,
        }
    }

    /// Uniform in [0, width - size)
    fn random_x(&mut self, size: f32) -> f32 {
        self.rng.random::<f32>() * (self.width - size).max(0.0)
    }
}
