//! Sprites module: clip state machines and strip-based player drawing.
//!
//! This module handles:
//! - Clip selection and frame timing (`SpriteAnimator`, counted in ticks)
//! - Loading every animation strip up front
//! - Cropping the active frame for the player sprite

mod animation;
mod render;


use bevy::prelude::*;

pub use animation::{Animatable, AnimationClip, ClipKey, Pose, SpriteAnimator};
pub use render::{ClipImages, PlayerSprite};

use render::{load_clip_images, sync_player_sprite, track_clip_loads};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipImages>()
            .add_systems(Startup, load_clip_images)
            .add_systems(Update, (track_clip_loads, sync_player_sprite).chain());
    }
}
