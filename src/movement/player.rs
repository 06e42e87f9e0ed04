//! Movement domain: the player state machine advanced once per fixed tick.

use bevy::prelude::*;

use crate::geometry::Bounds;
use crate::level::LevelBlocks;
use crate::movement::collisions::{resolve_horizontal, resolve_vertical};
use crate::movement::physics::{Physical, PhysicsBody};
use crate::movement::{Facing, FallTracker, MOVING_EPSILON, MovementInput, MovementTuning};
use crate::sprites::{Animatable, ClipKey, Pose, SpriteAnimator};

/// Edges reported by one `Player::update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub running_started: bool,
    pub running_stopped: bool,
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub body: PhysicsBody,
    pub animator: SpriteAnimator,
    pub fall: FallTracker,
    pub facing: Facing,
    /// Highest point reached, as a level y. More negative is higher.
    pub max_height: f32,
    pub score: u32,
    pub was_moving: bool,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &MovementTuning, animator: SpriteAnimator) -> Self {
        Self {
            body: PhysicsBody::new(spawn, tuning),
            animator,
            fall: FallTracker::default(),
            facing: Facing::Right,
            max_height: 0.0,
            score: 0,
            was_moving: false,
        }
    }

    pub fn update(&mut self, tuning: &MovementTuning, level: &LevelBlocks) -> FrameEvents {
        self.animator.advance_frame();
        self.body.refresh_hitbox(tuning);
        self.body.refresh_camera_box(tuning);

        self.track_score(tuning);

        self.body.position.x += self.body.velocity.x;
        self.body.refresh_hitbox(tuning);
        resolve_horizontal(&mut self.body, &level.solids);

        let was_grounded = self.body.grounded;
        self.body.velocity.y += tuning.gravity;
        self.body.position.y += self.body.velocity.y;
        self.body.refresh_hitbox(tuning);
        resolve_vertical(&mut self.body, &level.solids, &level.platforms);
        self.body.refresh_hitbox(tuning);

        self.body.velocity.x *= tuning.air_resistance;
        self.body.velocity.y = self.body.velocity.y.min(tuning.max_fall_speed);

        match (was_grounded, self.body.grounded) {
            (false, true) => {
                self.fall.land(self.body.position.y);
                debug!(
                    "Landed at y={:.1}, drop={:?}",
                    self.body.position.y,
                    self.fall.landing_drop()
                );
            }
            (true, false) => self.fall.leave_ground(self.body.position.y),
            _ => {}
        }

        self.running_edges()
    }

    fn track_score(&mut self, tuning: &MovementTuning) {
        if self.body.position.y < self.max_height {
            self.max_height = self.body.position.y;
            self.score = self.score.max(self.height(tuning));
        }
    }

    fn running_edges(&mut self) -> FrameEvents {
        let is_moving = self.body.velocity.x.abs() > MOVING_EPSILON;
        let grounded = self.body.grounded;

        let events = FrameEvents {
            running_started: is_moving && !self.was_moving && grounded,
            running_stopped: !is_moving || !grounded,
        };
        self.was_moving = is_moving;
        events
    }

    /// Start a jump if standing on something. Returns whether it happened.
    pub fn jump(&mut self, tuning: &MovementTuning) -> bool {
        if !self.body.grounded || !self.body.can_jump {
            return false;
        }

        self.body.velocity.y = tuning.jump_force;
        self.body.grounded = false;
        self.body.can_jump = false;
        self.fall.leave_ground(self.body.position.y);
        true
    }

    /// Whether this tick ends the run: a hard landing or a too-fast fall.
    /// A recorded landing drop is consumed by the first grounded check.
    pub fn check_fall_damage(&mut self, tuning: &MovementTuning) -> bool {
        if self.body.grounded {
            let hard_landing = self
                .fall
                .take_landing_drop()
                .is_some_and(|drop| drop > tuning.fall_damage_height);
            if hard_landing {
                return true;
            }
        }

        self.body.velocity.y > tuning.game_over_fall_speed
    }

    /// Zero horizontal velocity when the next step would leave the level.
    pub fn stop_at_level_edges(&mut self, level_width: f32) {
        let next_right = self.body.hitbox.right() + self.body.velocity.x;
        let next_left = self.body.hitbox.left() + self.body.velocity.x;
        if next_right >= level_width || next_left <= 0.0 {
            self.body.velocity.x = 0.0;
        }
    }

    /// Apply held direction keys and pick the clip for the resulting motion.
    pub fn apply_move_intent(&mut self, input: &MovementInput, tuning: &MovementTuning) {
        let direction = input.direction();
        self.body.velocity.x = direction * tuning.move_speed;
        if direction > 0.0 {
            self.facing = Facing::Right;
        } else if direction < 0.0 {
            self.facing = Facing::Left;
        }

        let pose = Pose::choose(direction != 0.0, self.body.velocity.y);
        self.animator.switch_clip(ClipKey::for_pose(pose, self.facing));
    }

    /// Best height so far in display units.
    pub fn height(&self, tuning: &MovementTuning) -> u32 {
        (self.max_height.abs() * tuning.height_multiplier)
            .floor()
            .max(0.0) as u32
    }

    pub fn camera_box(&self) -> Bounds {
        self.body.camera_box
    }
}

impl Physical for Player {
    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    fn hitbox(&self) -> Bounds {
        self.body.hitbox
    }

    fn is_grounded(&self) -> bool {
        self.body.grounded
    }
}
