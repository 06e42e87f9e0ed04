//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::GameConfig;

/// Snap gap left between a resolved hitbox and the block it hit.
pub const COLLISION_EPSILON: f32 = 0.01;
/// Horizontal speed below which the player counts as standing still.
pub const MOVING_EPSILON: f32 = 0.1;

/// Per-tick physics constants and player geometry.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub gravity: f32,
    /// Negative: up is -y.
    pub jump_force: f32,
    pub move_speed: f32,
    pub max_fall_speed: f32,
    pub air_resistance: f32,
    pub hitbox_offset: Vec2,
    pub hitbox_size: Vec2,
    pub camera_box_offset: Vec2,
    pub camera_box_size: Vec2,
    pub fall_damage_height: f32,
    pub game_over_fall_speed: f32,
    pub height_multiplier: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl MovementTuning {
    pub fn from_config(config: &GameConfig) -> Self {
        let physics = &config.physics;
        Self {
            gravity: physics.gravity,
            jump_force: physics.jump_force,
            move_speed: physics.move_speed,
            max_fall_speed: physics.max_fall_speed,
            air_resistance: physics.air_resistance,
            hitbox_offset: config.player.hitbox_offset.into(),
            hitbox_size: config.player.hitbox_size.into(),
            camera_box_offset: config.camera.box_offset.into(),
            camera_box_size: config.camera.box_size.into(),
            fall_damage_height: config.gameplay.fall_damage_height,
            game_over_fall_speed: config.gameplay.game_over_fall_speed,
            height_multiplier: config.gameplay.height_multiplier,
        }
    }

    /// Apex height of a standing jump, ignoring the fall-speed cap:
    /// the sum of per-tick rises `|jump_force| - k * gravity`.
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        let v = self.jump_force.abs();
        let ticks = (v / self.gravity).floor();
        ticks * v - self.gravity * ticks * (ticks + 1.0) / 2.0
    }
}

/// Movement intent for the next fixed tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Latched on press and consumed by the next tick.
    pub jump_requested: bool,
}

impl MovementInput {
    /// -1 for left, 1 for right, 0 for none. Right wins when both are held.
    pub fn direction(&self) -> f32 {
        if self.move_right {
            1.0
        } else if self.move_left {
            -1.0
        } else {
            0.0
        }
    }
}

/// On-screen button state, written by the HUD and merged into `MovementInput`.
#[derive(Resource, Debug, Default)]
pub struct TouchControls {
    pub left: bool,
    pub right: bool,
}
