//! Sprite strip loading and per-frame drawing of the player.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::GameConfig;
use crate::geometry::level_to_world;
use crate::movement::{Physical, Player};
use crate::sprites::Animatable;

const PLAYER_Z: f32 = 10.0;
const FALLBACK_COLOR: Color = Color::srgb(0.85, 0.35, 0.3);

/// Marker for the entity drawing the player.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// Image handles for every animation strip, keyed by asset path.
#[derive(Resource, Debug, Default)]
pub struct ClipImages {
    pub handles: HashMap<String, Handle<Image>>,
    /// Every strip has finished loading or failed.
    pub settled: bool,
}

impl ClipImages {
    pub fn get(&self, path: &str) -> Option<&Handle<Image>> {
        self.handles.get(path)
    }
}

pub(crate) fn load_clip_images(
    mut images: ResMut<ClipImages>,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    for clip in config.clips() {
        images
            .handles
            .entry(clip.image.clone())
            .or_insert_with(|| asset_server.load(clip.image));
    }
    info!("Requested {} animation strips", images.handles.len());
}

/// Mark the strips settled once none is still in flight, then let every
/// player's animator start switching clips.
pub(crate) fn track_clip_loads(
    mut images: ResMut<ClipImages>,
    asset_server: Res<AssetServer>,
    mut players: Query<&mut Player>,
) {
    if !images.settled {
        let mut failed = 0;
        let mut pending = 0;
        for (path, handle) in &images.handles {
            match asset_server.load_state(handle.id()) {
                LoadState::Loaded => {}
                LoadState::Failed(err) => {
                    warn!("Animation strip {} failed to load: {}", path, err);
                    failed += 1;
                }
                _ => pending += 1,
            }
        }
        if pending > 0 {
            return;
        }
        images.settled = true;
        info!(
            "Animation strips settled ({} failed, drawn as rectangles)",
            failed
        );
    }

    for mut player in &mut players {
        if !player.animator.is_loaded() {
            player.animator.set_loaded(true);
        }
    }
}

/// Crop the active frame out of its strip, or draw the hitbox as a plain
/// rectangle while the strip is unavailable.
pub(crate) fn sync_player_sprite(
    clip_images: Res<ClipImages>,
    images: Res<Assets<Image>>,
    config: Res<GameConfig>,
    mut query: Query<(&Player, &mut Sprite, &mut Transform), With<PlayerSprite>>,
) {
    for (player, mut sprite, mut transform) in &mut query {
        let strip = clip_images
            .get(player.animator.image())
            .and_then(|handle| images.get(handle).map(|image| (handle, image.size_f32())));

        match strip {
            Some((handle, size)) => {
                let frame_width = size.x / player.animator.frame_count() as f32;
                let left = player.animator.frame_index() as f32 * frame_width;
                let drawn = Vec2::new(frame_width, size.y) * config.player.sprite_scale;

                sprite.image = handle.clone();
                sprite.rect = Some(Rect::new(left, 0.0, left + frame_width, size.y));
                sprite.custom_size = Some(drawn);
                sprite.color = Color::WHITE;
                transform.translation =
                    level_to_world(player.position() + drawn * 0.5, PLAYER_Z);
            }
            None => {
                let hitbox = player.hitbox();
                sprite.image = Handle::default();
                sprite.rect = None;
                sprite.custom_size = Some(hitbox.size());
                sprite.color = FALLBACK_COLOR;
                transform.translation = level_to_world(hitbox.center(), PLAYER_Z);
            }
        }
    }
}
