//! Movement domain: the kinematic body integrated once per tick.

use bevy::prelude::*;

use crate::geometry::Bounds;
use crate::movement::MovementTuning;

/// Capability of anything with a position, velocity and collision box.
pub trait Physical {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn hitbox(&self) -> Bounds;
    fn is_grounded(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    /// Top-left of the sprite bounds, not of the hitbox.
    pub position: Vec2,
    pub velocity: Vec2,
    pub hitbox: Bounds,
    /// Follow box the camera keeps inside its dead zone.
    pub camera_box: Bounds,
    pub grounded: bool,
    pub can_jump: bool,
}

impl PhysicsBody {
    pub fn new(position: Vec2, tuning: &MovementTuning) -> Self {
        let mut body = Self {
            position,
            velocity: Vec2::ZERO,
            hitbox: Bounds::default(),
            camera_box: Bounds::default(),
            grounded: false,
            can_jump: true,
        };
        body.refresh_hitbox(tuning);
        body.refresh_camera_box(tuning);
        body
    }

    pub fn refresh_hitbox(&mut self, tuning: &MovementTuning) {
        self.hitbox = Bounds::offset_from(self.position, tuning.hitbox_offset, tuning.hitbox_size);
    }

    pub fn refresh_camera_box(&mut self, tuning: &MovementTuning) {
        self.camera_box =
            Bounds::offset_from(self.position, tuning.camera_box_offset, tuning.camera_box_size);
    }
}
