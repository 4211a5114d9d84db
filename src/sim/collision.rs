//! Collision detection and scoring
//!
//! Overlap is a loose axis-aligned proximity test: a point collides with the
//! bucket when it is within `player.size` of the bucket center on both axes.
//! Every overlapping entity is resolved in the same pass; once the session
//! ends, the remaining entities are left untouched.

use glam::Vec2;

use super::state::{GameEvent, HitSource, Outcome, Player, Session, TickReport};
use crate::consts::COLLECT_POINTS;

/// Axis-aligned proximity test against the bucket
#[inline]
pub fn overlaps(player: &Player, point: Vec2) -> bool {
    let d = (player.pos - point).abs();
    d.x < player.size && d.y < player.size
}

/// Resolve every obstacle, then every collectible, against the player
pub fn resolve_collisions(session: &mut Session, report: &mut TickReport) {
    resolve_obstacles(session, report);
    resolve_collectibles(session, report);
}

fn resolve_obstacles(session: &mut Session, report: &mut TickReport) {
    let mut i = 0;
    while i < session.obstacles.len() && session.is_active() {
        if overlaps(&session.player, session.obstacles[i].center()) {
            let obstacle = session.obstacles.remove(i);
            log::debug!("Obstacle {} hit the bucket", obstacle.id);
            session.lose_life(HitSource::Obstacle, &mut report.events);
        } else {
            i += 1;
        }
    }
}

fn resolve_collectibles(session: &mut Session, report: &mut TickReport) {
    let mut i = 0;
    while i < session.collectibles.len() && session.is_active() {
        if !overlaps(&session.player, session.collectibles[i].pos) {
            i += 1;
            continue;
        }

        let collectible = session.collectibles.remove(i);
        if collectible.bad {
            log::debug!("Caught dirty water {}", collectible.id);
            session.lose_life(HitSource::BadWater, &mut report.events);
        } else {
            collect(session, collectible.id, &mut report.events);
        }
    }
}

/// Clean water: score, fill the bucket, then check win and milestones
fn collect(session: &mut Session, id: u32, events: &mut Vec<GameEvent>) {
    session.score = session.score.saturating_add(COLLECT_POINTS);
    session.player.absorb();
    events.push(GameEvent::Collected {
        id,
        score: session.score,
    });

    if session.score >= session.config.win_points {
        session.end_with(Outcome::Win, events);
    }

    for (threshold, message) in session.milestones.check(session.score) {
        log::debug!("Milestone {}: {}", threshold, message);
        events.push(GameEvent::Milestone { threshold, message });
    }
}
