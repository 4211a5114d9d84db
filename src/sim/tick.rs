//! Per-frame simulation tick
//!
//! One tick = splash decay, motion, cleanup, then collision resolution.
//! Spawning and the countdown are not part of the tick; they run on the
//! session's scheduler (see `Session::advance_time`).

use super::collision::resolve_collisions;
use super::state::{Collectible, GamePhase, Obstacle, Session, TickReport};
use crate::consts::*;

/// Discrete horizontal move request from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Left,
    Right,
}

impl MoveIntent {
    pub fn dx(self) -> f32 {
        match self {
            MoveIntent::Left => -PLAYER_MOVE_STEP,
            MoveIntent::Right => PLAYER_MOVE_STEP,
        }
    }
}

impl Session {
    /// Move the bucket. Ignored while not active or when already at the edge.
    pub fn apply_input(&mut self, intent: MoveIntent) -> bool {
        if !self.is_active() {
            return false;
        }
        self.player.step(intent.dx())
    }
}

/// Advance the session by one tick. Has no effect unless the session is active.
pub fn tick(session: &mut Session) -> TickReport {
    let mut report = TickReport::default();
    if !session.is_active() {
        return report;
    }

    session.time_ticks += 1;
    session.player.decay_splash();

    move_entities(&mut session.obstacles, &mut session.collectibles);
    cleanup_entities(
        &mut session.obstacles,
        &mut session.collectibles,
        PLAYFIELD_HEIGHT,
    );

    resolve_collisions(session, &mut report);

    if let GamePhase::Ended(outcome) = session.phase {
        report.ended = Some(outcome);
    }
    report
}

/// Constant-velocity fall
pub fn move_entities(obstacles: &mut [Obstacle], collectibles: &mut [Collectible]) {
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.y += OBSTACLE_FALL_SPEED;
    }
    for collectible in collectibles.iter_mut() {
        collectible.pos.y += COLLECTIBLE_FALL_SPEED;
    }
}

/// Drop everything that fell past the bottom edge, keeping order
pub fn cleanup_entities(
    obstacles: &mut Vec<Obstacle>,
    collectibles: &mut Vec<Collectible>,
    height: f32,
) {
    obstacles.retain(|o| o.pos.y < height);
    collectibles.retain(|c| c.pos.y < height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use crate::sim::state::Outcome;
    use glam::Vec2;

    fn active_session() -> Session {
        let mut session = Session::new(12345);
        session.start(Difficulty::Normal).unwrap();
        session
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut session = Session::new(12345);
        session.obstacles.push(Obstacle {
            id: 1,
            pos: Vec2::new(10.0, 10.0),
            size: OBSTACLE_SIZE,
        });
        let report = tick(&mut session);
        assert_eq!(report, TickReport::default());
        assert_eq!(session.time_ticks, 0);
        assert_eq!(session.obstacles[0].pos.y, 10.0);
    }

    #[test]
    fn test_tick_after_end_is_noop() {
        let mut session = active_session();
        session.end(Outcome::TimeUp);
        session.player.splash = 1.0;
        let report = session.tick();
        assert!(report.events.is_empty());
        assert_eq!(session.player.splash, 1.0);
    }

    #[test]
    fn test_fall_speeds() {
        let mut session = active_session();
        session.obstacles.push(Obstacle {
            id: 1,
            pos: Vec2::new(0.0, 0.0),
            size: OBSTACLE_SIZE,
        });
        session.collectibles.push(Collectible {
            id: 2,
            pos: Vec2::new(0.0, 0.0),
            size: COLLECTIBLE_SIZE,
            bad: false,
        });

        tick(&mut session);
        assert_eq!(session.obstacles[0].pos.y, OBSTACLE_FALL_SPEED);
        assert_eq!(session.collectibles[0].pos.y, COLLECTIBLE_FALL_SPEED);
        assert_eq!(session.time_ticks, 1);
    }

    #[test]
    fn test_cleanup_preserves_order() {
        let mut obstacles: Vec<Obstacle> = [596.0, 10.0, 597.0, 20.0]
            .iter()
            .enumerate()
            .map(|(i, &y)| Obstacle {
                id: i as u32,
                pos: Vec2::new(0.0, y),
                size: OBSTACLE_SIZE,
            })
            .collect();
        let mut collectibles = vec![Collectible {
            id: 9,
            pos: Vec2::new(0.0, 597.0),
            size: COLLECTIBLE_SIZE,
            bad: true,
        }];

        move_entities(&mut obstacles, &mut collectibles);
        cleanup_entities(&mut obstacles, &mut collectibles, PLAYFIELD_HEIGHT);

        let ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(collectibles.is_empty());
    }

    #[test]
    fn test_drops_fall_through_without_player() {
        let mut session = active_session();
        session.player.pos.x = PLAYER_SIZE;
        session.collectibles.push(Collectible {
            id: 1,
            pos: Vec2::new(350.0, -COLLECTIBLE_SIZE),
            size: COLLECTIBLE_SIZE,
            bad: false,
        });

        for _ in 0..300 {
            tick(&mut session);
        }
        assert!(session.collectibles.is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_falling_drop_is_caught() {
        let mut session = active_session();
        let x = session.player.pos.x;
        session.collectibles.push(Collectible {
            id: 1,
            pos: Vec2::new(x, -COLLECTIBLE_SIZE),
            size: COLLECTIBLE_SIZE,
            bad: false,
        });

        let mut collected = false;
        for _ in 0..300 {
            let report = tick(&mut session);
            if !report.events.is_empty() {
                collected = true;
                break;
            }
        }
        assert!(collected);
        assert_eq!(session.score(), COLLECT_POINTS);
    }

    #[test]
    fn test_tick_reports_lose() {
        let mut session = active_session();
        session.lives = 1;
        session.obstacles.push(Obstacle {
            id: 1,
            pos: session.player.pos - Vec2::new(15.0, 19.0),
            size: OBSTACLE_SIZE,
        });
        let report = tick(&mut session);
        assert_eq!(report.ended, Some(Outcome::Lose));
        assert_eq!(session.lives(), 0);

        // The losing tick was the last one executed
        assert_eq!(tick(&mut session), TickReport::default());
    }

    #[test]
    fn test_splash_decays_each_tick() {
        let mut session = active_session();
        session.player.splash = 1.0;
        tick(&mut session);
        assert!((session.player.splash - (1.0 - SPLASH_DECAY)).abs() < 1e-6);
    }

    #[test]
    fn test_input_ignored_when_not_active() {
        let mut session = Session::new(1);
        let x = session.player.pos.x;
        assert!(!session.apply_input(MoveIntent::Left));
        assert_eq!(session.player.pos.x, x);

        session.start(Difficulty::Easy).unwrap();
        assert!(session.apply_input(MoveIntent::Left));
        assert_eq!(session.player.pos.x, x - PLAYER_MOVE_STEP);
    }
}
