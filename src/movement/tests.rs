//! Movement domain: tests for the per-tick physics, collisions and scoring.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{FallTracker, MovementInput, MovementTuning, Physical, Player};
use crate::content::{LevelDef, default_clips};
use crate::geometry::Bounds;
use crate::level::{CollisionBlock, LevelBlocks};
use crate::sprites::{Animatable, ClipKey, SpriteAnimator};

/// Resting y for a player standing on a surface at y = 200.
const STANDING_Y: f32 = 146.99;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn player_at(x: f32, y: f32) -> Player {
    let tuning = MovementTuning::default();
    let animator = SpriteAnimator::from_defs(&default_clips(), ClipKey::Idle);
    Player::new(Vec2::new(x, y), &tuning, animator)
}

fn level(solids: &[Bounds], platforms: &[Bounds]) -> LevelBlocks {
    LevelBlocks::new(
        solids.iter().copied().map(CollisionBlock::solid).collect(),
        platforms.iter().copied().map(CollisionBlock::platform).collect(),
        Vec2::new(600.0, 432.0),
    )
}

fn floor() -> Bounds {
    Bounds::new(0.0, 200.0, 600.0, 16.0)
}

/// Step until grounded. Panics if the player never lands.
fn settle(player: &mut Player, tuning: &MovementTuning, level: &LevelBlocks) {
    for _ in 0..300 {
        player.update(tuning, level);
        if player.is_grounded() {
            return;
        }
    }
    panic!("player never landed");
}

#[test]
fn test_landing_on_solid_block_is_idempotent() {
    let tuning = MovementTuning::default();
    let level = level(&[floor()], &[]);
    let mut player = player_at(100.0, 100.0);

    settle(&mut player, &tuning, &level);
    assert_eq!(player.velocity().y, 0.0);
    assert!(player.body.can_jump);
    assert!(close(player.position().y, STANDING_Y));

    for _ in 0..120 {
        player.update(&tuning, &level);
        assert!(player.is_grounded());
        assert_eq!(player.velocity().y, 0.0);
        assert!(close(player.position().y, STANDING_Y));
    }
}

#[test]
fn test_jump_then_land_round_trip() {
    let tuning = MovementTuning::default();
    let level = level(&[floor()], &[]);
    let mut player = player_at(100.0, 100.0);
    settle(&mut player, &tuning, &level);

    assert!(player.jump(&tuning));
    assert_eq!(player.velocity().y, tuning.jump_force);
    assert!(!player.is_grounded());
    assert!(!player.body.can_jump);
    assert!(!player.jump(&tuning), "no second jump while airborne");

    let mut landed = false;
    for _ in 0..300 {
        player.update(&tuning, &level);
        if player.is_grounded() {
            landed = true;
            break;
        }
        assert!(!player.body.can_jump);
    }

    assert!(landed);
    assert!(player.body.can_jump);
    assert!(player.velocity().y >= 0.0);
    assert!(close(player.position().y, STANDING_Y));
    assert!(!player.check_fall_damage(&tuning));
}

#[test]
fn test_jump_requires_ground() {
    let tuning = MovementTuning::default();
    let mut player = player_at(100.0, 100.0);

    assert!(!player.jump(&tuning));
    assert_eq!(player.velocity().y, 0.0);
}

fn fall_damage_frames(drop_height: f32) -> (Vec<usize>, Option<usize>) {
    let tuning = MovementTuning::default();
    let ledge = Bounds::new(0.0, 200.0, 64.0, 16.0);
    let ground = Bounds::new(0.0, 200.0 + drop_height, 600.0, 16.0);
    let level = level(&[ledge, ground], &[]);
    let input = MovementInput {
        move_right: true,
        ..default()
    };

    let mut player = player_at(5.0, STANDING_Y);
    let mut left_ledge = false;
    let mut landing_frame = None;
    let mut hits = Vec::new();

    for frame in 0..400 {
        player.update(&tuning, &level);
        player.apply_move_intent(&input, &tuning);
        if player.check_fall_damage(&tuning) {
            hits.push(frame);
        }

        if frame > 0 && !player.is_grounded() {
            left_ledge = true;
        }
        if left_ledge && landing_frame.is_none() && player.is_grounded() {
            landing_frame = Some(frame);
        }
        if landing_frame.is_some_and(|landed| frame > landed + 10) {
            break;
        }
    }

    (hits, landing_frame)
}

#[test]
fn test_long_drop_ends_run_exactly_on_landing_frame() {
    let (hits, landing_frame) = fall_damage_frames(180.0);

    let landing_frame = landing_frame.expect("player reaches the lower floor");
    assert_eq!(hits, vec![landing_frame]);
}

#[test]
fn test_short_drop_is_survivable() {
    let (hits, landing_frame) = fall_damage_frames(100.0);

    assert!(landing_frame.is_some());
    assert!(hits.is_empty());
}

#[test]
fn test_terminal_fall_speed_ends_run_midair() {
    let tuning = MovementTuning::default();
    let mut player = player_at(100.0, 0.0);

    player.body.velocity.y = tuning.game_over_fall_speed - 0.5;
    assert!(!player.check_fall_damage(&tuning));

    player.body.velocity.y = tuning.game_over_fall_speed + 0.5;
    assert!(player.check_fall_damage(&tuning));
}

#[test]
fn test_fall_speed_is_capped() {
    let tuning = MovementTuning::default();
    let level = level(&[], &[]);
    let mut player = player_at(100.0, 0.0);

    for _ in 0..200 {
        player.update(&tuning, &level);
        assert!(player.velocity().y <= tuning.max_fall_speed);
    }
    assert_eq!(player.velocity().y, tuning.max_fall_speed);
}

#[test]
fn test_wall_stops_horizontal_motion() {
    let tuning = MovementTuning::default();
    let wall = Bounds::new(120.0, 100.0, 16.0, 100.0);
    let level = level(&[floor(), wall], &[]);
    let input = MovementInput {
        move_right: true,
        ..default()
    };
    // Hitbox right flush against the wall, minus the snap gap.
    let blocked_x = 120.0 - 35.0 - 14.0 - 0.01;

    let mut player = player_at(5.0, STANDING_Y);
    let mut collided = false;
    for _ in 0..100 {
        player.apply_move_intent(&input, &tuning);
        player.update(&tuning, &level);

        assert!(player.position().x <= blocked_x + 1e-3);
        if player.velocity().x == 0.0 {
            collided = true;
        }
        if collided {
            assert_eq!(player.velocity().x, 0.0);
            assert!(close(player.position().x, blocked_x));
        }
    }
    assert!(collided);
}

#[test]
fn test_platform_is_one_way() {
    let tuning = MovementTuning::default();
    let platform = Bounds::new(0.0, 150.0, 200.0, 4.0);
    let level = level(&[floor()], &[platform]);
    let mut player = player_at(100.0, 50.0);

    // Falling from above lands on the platform.
    settle(&mut player, &tuning, &level);
    assert!(close(player.position().y, 150.0 - 53.0 - 0.01));

    // From below the player jumps through it and lands on top.
    let mut player = player_at(100.0, STANDING_Y);
    settle(&mut player, &tuning, &level);
    assert!(close(player.position().y, STANDING_Y));
    assert!(player.jump(&tuning));

    let mut landed = false;
    for _ in 0..300 {
        player.update(&tuning, &level);
        if player.is_grounded() {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert!(close(player.position().y, 150.0 - 53.0 - 0.01));
}

#[test]
fn test_ceiling_stops_rise() {
    let tuning = MovementTuning::default();
    let ceiling = Bounds::new(0.0, 100.0, 200.0, 16.0);
    let level = level(&[floor(), ceiling], &[]);
    let mut player = player_at(100.0, STANDING_Y);
    settle(&mut player, &tuning, &level);
    assert!(player.jump(&tuning));

    let mut bumped = false;
    for _ in 0..300 {
        player.update(&tuning, &level);
        assert!(player.hitbox().top() >= ceiling.bottom() - 1e-3);
        if !player.is_grounded() && player.velocity().y == 0.0 {
            bumped = true;
        }
        if player.is_grounded() {
            break;
        }
    }

    assert!(bumped);
    assert!(player.is_grounded());
    assert!(close(player.position().y, STANDING_Y));
}

#[test]
fn test_level_edges_zero_outward_velocity() {
    let mut player = player_at(600.0 - 35.0 - 14.0 - 1.0, 0.0);
    player.body.velocity.x = 2.5;
    player.stop_at_level_edges(600.0);
    assert_eq!(player.velocity().x, 0.0);

    let mut player = player_at(-35.0 + 1.0, 0.0);
    player.body.velocity.x = -2.5;
    player.stop_at_level_edges(600.0);
    assert_eq!(player.velocity().x, 0.0);

    let mut player = player_at(300.0, 0.0);
    player.body.velocity.x = 2.5;
    player.stop_at_level_edges(600.0);
    assert_eq!(player.velocity().x, 2.5);
}

#[test]
fn test_running_edges_follow_grounded_motion() {
    let tuning = MovementTuning::default();
    let level = level(&[floor()], &[]);
    let mut player = player_at(100.0, STANDING_Y);
    settle(&mut player, &tuning, &level);

    let right = MovementInput {
        move_right: true,
        ..default()
    };
    player.apply_move_intent(&right, &tuning);

    let started = player.update(&tuning, &level);
    assert!(started.running_started);
    assert!(!started.running_stopped);

    player.apply_move_intent(&right, &tuning);
    let running = player.update(&tuning, &level);
    assert!(!running.running_started);
    assert!(!running.running_stopped);

    player.apply_move_intent(&MovementInput::default(), &tuning);
    let stopped = player.update(&tuning, &level);
    assert!(stopped.running_stopped);
}

#[test]
fn test_move_intent_sets_velocity_and_facing() {
    let tuning = MovementTuning::default();
    let mut player = player_at(100.0, 100.0);

    let both = MovementInput {
        move_left: true,
        move_right: true,
        ..default()
    };
    player.apply_move_intent(&both, &tuning);
    assert_eq!(player.velocity().x, tuning.move_speed);
    assert_eq!(player.facing, super::Facing::Right);

    let left = MovementInput {
        move_left: true,
        ..default()
    };
    player.apply_move_intent(&left, &tuning);
    assert_eq!(player.velocity().x, -tuning.move_speed);
    assert_eq!(player.facing, super::Facing::Left);

    player.apply_move_intent(&MovementInput::default(), &tuning);
    assert_eq!(player.velocity().x, 0.0);
    assert_eq!(player.facing, super::Facing::Left);
}

#[test]
fn test_move_intent_picks_air_clip_once_loaded() {
    let tuning = MovementTuning::default();
    let level = level(&[floor()], &[]);
    let mut player = player_at(100.0, STANDING_Y);
    player.animator.set_loaded(true);
    settle(&mut player, &tuning, &level);

    let left = MovementInput {
        move_left: true,
        ..default()
    };
    player.apply_move_intent(&left, &tuning);
    assert_eq!(player.animator.active_clip(), ClipKey::RunLeft);

    assert!(player.jump(&tuning));
    player.update(&tuning, &level);
    player.apply_move_intent(&left, &tuning);
    assert_eq!(player.animator.active_clip(), ClipKey::JumpLeft);
}

#[test]
fn test_score_never_decreases() {
    let tuning = MovementTuning::default();
    let level = LevelBlocks::from_def(&LevelDef::fallback());
    let mut player = player_at(100.0, 300.0);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut input = MovementInput::default();

    let mut last_score = 0;
    for _ in 0..3000 {
        if rng.random_bool(0.05) {
            player.jump(&tuning);
        }
        player.stop_at_level_edges(level.width());
        player.update(&tuning, &level);

        match rng.random_range(0..3) {
            0 => {
                input.move_left = true;
                input.move_right = false;
            }
            1 => {
                input.move_left = false;
                input.move_right = true;
            }
            _ => {
                input.move_left = false;
                input.move_right = false;
            }
        }
        player.apply_move_intent(&input, &tuning);

        assert!(player.score >= last_score);
        assert!(player.max_height <= 0.0);
        assert_eq!(player.score, player.height(&tuning));
        last_score = player.score;
    }
}

#[test]
fn test_fall_tracker_without_origin_records_nothing() {
    let mut tracker = FallTracker::default();
    tracker.land(300.0);
    assert_eq!(tracker.landing_drop(), None);

    tracker.leave_ground(100.0);
    assert_eq!(tracker.origin(), Some(100.0));
    tracker.land(260.0);
    assert_eq!(tracker.origin(), None);
    assert_eq!(tracker.take_landing_drop(), Some(160.0));
    assert_eq!(tracker.take_landing_drop(), None);
}

#[test]
fn test_single_jump_height_matches_simulation() {
    let tuning = MovementTuning::default();
    let level = level(&[floor()], &[]);
    let mut player = player_at(100.0, STANDING_Y);
    settle(&mut player, &tuning, &level);

    let start_y = player.position().y;
    assert!(player.jump(&tuning));
    let mut apex = start_y;
    for _ in 0..120 {
        player.update(&tuning, &level);
        apex = apex.min(player.position().y);
    }

    assert!((start_y - apex - tuning.single_jump_height()).abs() < 0.05);
}

#[test]
fn test_score_counts_height_above_level_top() {
    let tuning = MovementTuning::default();
    let level = level(&[], &[]);
    let mut player = player_at(100.0, -10.0);

    player.update(&tuning, &level);
    assert_eq!(player.max_height, -10.0);
    assert_eq!(player.score, 5);

    // Falling back down keeps the best height.
    for _ in 0..30 {
        player.update(&tuning, &level);
    }
    assert_eq!(player.score, 5);
}
