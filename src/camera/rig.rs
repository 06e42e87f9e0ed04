//! Camera domain: the dead-zone pan rules.
//!
//! `offset` is the translation applied to the level when drawing, so it moves
//! opposite to the player: the visible slice of the level starts at
//! `-offset`. Each rule fires only when the follow box has reached the edge of
//! the visible slice and the level still extends past it.

use bevy::prelude::*;

use crate::geometry::Bounds;

/// Visible slice size and level extent, both in level pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub level_width: f32,
    pub level_height: f32,
}

impl Viewport {
    pub fn new(size: Vec2, level_size: Vec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
            level_width: level_size.x,
            level_height: level_size.y,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub offset: Vec2,
}

impl CameraRig {
    /// Starts at the bottom-left corner of the level.
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            offset: Vec2::new(0.0, viewport.height - viewport.level_height),
        }
    }

    pub fn reset(&mut self, viewport: &Viewport) {
        *self = Self::new(viewport);
    }

    /// Apply every rule whose direction matches the player's motion.
    pub fn follow(&mut self, camera_box: &Bounds, velocity: Vec2, viewport: &Viewport) {
        if velocity.x < 0.0 {
            self.pan_right(camera_box, velocity, viewport);
        }
        if velocity.x > 0.0 {
            self.pan_left(camera_box, velocity, viewport);
        }
        if velocity.y < 0.0 {
            self.pan_down(camera_box, velocity, viewport);
        }
        if velocity.y > 0.0 {
            self.pan_up(camera_box, velocity, viewport);
        }
    }

    /// Player moving right: scroll the level left.
    pub fn pan_left(&mut self, camera_box: &Bounds, velocity: Vec2, viewport: &Viewport) {
        if camera_box.right() >= viewport.level_width {
            return;
        }
        if camera_box.right() >= viewport.width + self.offset.x.abs() {
            self.offset.x -= velocity.x;
        }
    }

    /// Player moving left: scroll the level right.
    pub fn pan_right(&mut self, camera_box: &Bounds, velocity: Vec2, _viewport: &Viewport) {
        if camera_box.left() <= 0.0 {
            return;
        }
        if camera_box.left() <= self.offset.x.abs() {
            self.offset.x -= velocity.x;
        }
    }

    /// Player rising: scroll the level down.
    pub fn pan_down(&mut self, camera_box: &Bounds, velocity: Vec2, _viewport: &Viewport) {
        if camera_box.top() + velocity.y <= 0.0 {
            return;
        }
        if camera_box.top() <= self.offset.y.abs() {
            self.offset.y -= velocity.y;
        }
    }

    /// Player falling: scroll the level up.
    pub fn pan_up(&mut self, camera_box: &Bounds, velocity: Vec2, viewport: &Viewport) {
        if camera_box.bottom() + velocity.y >= viewport.level_height {
            return;
        }
        if camera_box.bottom() >= self.offset.y.abs() + viewport.height {
            self.offset.y -= velocity.y;
        }
    }

    /// Centre of the visible slice, in level space.
    pub fn view_center(&self, viewport: &Viewport) -> Vec2 {
        -self.offset + Vec2::new(viewport.width, viewport.height) * 0.5
    }
}
