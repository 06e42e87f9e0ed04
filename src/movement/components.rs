//! Movement domain: small components and value types shared by the player.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Tracks where the player last left the ground and how far they dropped on
/// the most recent landing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallTracker {
    origin: Option<f32>,
    landing_drop: Option<f32>,
}

impl FallTracker {
    /// Record `y` as the fall origin (walked off a ledge or jumped).
    pub fn leave_ground(&mut self, y: f32) {
        self.origin = Some(y);
    }

    /// Clear the origin, keeping the net downward drop for the game-over check.
    pub fn land(&mut self, y: f32) {
        self.landing_drop = self.origin.take().map(|origin| y - origin);
    }

    pub fn origin(&self) -> Option<f32> {
        self.origin
    }

    pub fn landing_drop(&self) -> Option<f32> {
        self.landing_drop
    }

    pub fn take_landing_drop(&mut self) -> Option<f32> {
        self.landing_drop.take()
    }
}

/// Marker for entities that belong to the current run and go away with it
#[derive(Component, Debug)]
pub struct RunEntity;
