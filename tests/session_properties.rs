//! Property tests: session invariants hold under arbitrary input and timing

use bucket_catch::consts::*;
use bucket_catch::sim::{Collectible, GamePhase, MoveIntent, Obstacle, Session};
use bucket_catch::Difficulty;
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Tick,
    Advance(u64),
    Move(MoveIntent),
    DropGood,
    DropBad,
    DropObstacle,
    End,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Tick),
        2 => (0u64..2500).prop_map(Op::Advance),
        2 => prop_oneof![Just(MoveIntent::Left), Just(MoveIntent::Right)].prop_map(Op::Move),
        1 => Just(Op::DropGood),
        1 => Just(Op::DropBad),
        1 => Just(Op::DropObstacle),
        1 => Just(Op::End),
    ]
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Normal),
        Just(Difficulty::Hard)
    ]
}

fn apply(session: &mut Session, op: &Op) {
    match op {
        Op::Tick => {
            session.tick();
        }
        Op::Advance(ms) => {
            session.advance_time(*ms);
        }
        Op::Move(intent) => {
            session.apply_input(*intent);
        }
        Op::DropGood | Op::DropBad => {
            let id = session.next_entity_id();
            session.collectibles.push(Collectible {
                id,
                pos: session.player.pos,
                size: COLLECTIBLE_SIZE,
                bad: matches!(op, Op::DropBad),
            });
        }
        Op::DropObstacle => {
            let id = session.next_entity_id();
            session.obstacles.push(Obstacle {
                id,
                pos: session.player.pos - Vec2::splat(OBSTACLE_SIZE / 2.0),
                size: OBSTACLE_SIZE,
            });
        }
        Op::End => {
            session.end(bucket_catch::sim::Outcome::TimeUp);
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold(
        seed in any::<u64>(),
        difficulty in difficulty_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut session = Session::new(seed);
        session.start(difficulty).unwrap();
        let win_points = session.config().win_points;

        for op in &ops {
            let was_active = session.is_active();
            let before = (session.score(), session.lives(), session.phase());

            apply(&mut session, op);

            prop_assert!(session.lives() <= STARTING_LIVES);
            prop_assert_eq!(session.score() % COLLECT_POINTS, 0);
            prop_assert!(session.player.pos.x >= PLAYER_SIZE);
            prop_assert!(session.player.pos.x <= PLAYFIELD_WIDTH - PLAYER_SIZE);
            prop_assert!((0.0..=1.0).contains(&session.player.fill));
            prop_assert!((0.0..=1.0).contains(&session.player.splash));

            if was_active {
                // Score never decreases while playing
                prop_assert!(session.score() >= before.0);
                if matches!(op, Op::Tick) {
                    prop_assert!(session.obstacles.iter().all(|o| o.pos.y < PLAYFIELD_HEIGHT));
                    prop_assert!(session.collectibles.iter().all(|c| c.pos.y < PLAYFIELD_HEIGHT));
                }
            } else {
                // Ended sessions are frozen, and the first outcome stands
                prop_assert_eq!(session.score(), before.0);
                prop_assert_eq!(session.lives(), before.1);
                prop_assert_eq!(session.phase(), before.2);
            }

            match session.phase() {
                GamePhase::Active => {
                    prop_assert!(session.lives() > 0);
                    prop_assert!(session.score() < win_points);
                    prop_assert!(session.time_left() > 0);
                    prop_assert_eq!(session.scheduler().armed_count(), 3);
                }
                GamePhase::Ended(_) => {
                    prop_assert_eq!(session.scheduler().armed_count(), 0);
                }
                GamePhase::Idle => prop_assert!(false, "session returned to Idle"),
            }
        }
    }

    #[test]
    fn good_catch_is_plus_ten_and_no_life_change(seed in any::<u64>(), x_steps in 0usize..12) {
        let mut session = Session::new(seed);
        session.start(Difficulty::Normal).unwrap();
        for _ in 0..x_steps {
            session.apply_input(MoveIntent::Right);
        }
        let id = session.next_entity_id();
        session.collectibles.push(Collectible {
            id,
            pos: session.player.pos,
            size: COLLECTIBLE_SIZE,
            bad: false,
        });
        session.tick();
        prop_assert_eq!(session.score(), COLLECT_POINTS);
        prop_assert_eq!(session.lives(), STARTING_LIVES);
    }

    #[test]
    fn hit_is_minus_one_life_and_no_score_change(seed in any::<u64>(), bad_water in any::<bool>()) {
        let mut session = Session::new(seed);
        session.start(Difficulty::Normal).unwrap();
        let id = session.next_entity_id();
        if bad_water {
            session.collectibles.push(Collectible {
                id,
                pos: session.player.pos,
                size: COLLECTIBLE_SIZE,
                bad: true,
            });
        } else {
            session.obstacles.push(Obstacle {
                id,
                pos: session.player.pos - Vec2::splat(OBSTACLE_SIZE / 2.0),
                size: OBSTACLE_SIZE,
            });
        }
        session.tick();
        prop_assert_eq!(session.lives(), STARTING_LIVES - 1);
        prop_assert_eq!(session.score(), 0);
    }
}
