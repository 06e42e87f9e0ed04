//! Semantic checks for loaded content that the parser cannot express.

use std::collections::HashSet;

use super::data::{GameConfig, LevelDef};
use crate::sprites::ClipKey;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.source_type, self.field, self.message)
    }
}

/// Helper macro for pushing an error when a condition fails
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate the game config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &GameConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let physics = &config.physics;

    for (field, value) in [
        ("gravity", physics.gravity),
        ("jump_force", physics.jump_force),
        ("move_speed", physics.move_speed),
        ("max_fall_speed", physics.max_fall_speed),
        ("air_resistance", physics.air_resistance),
    ] {
        check!(errors, value.is_finite(), "Physics", field, "must be finite, got {}", value);
    }
    check!(
        errors,
        physics.jump_force < 0.0,
        "Physics",
        "jump_force",
        "must be negative (up is -y), got {}",
        physics.jump_force
    );
    check!(
        errors,
        physics.air_resistance > 0.0 && physics.air_resistance <= 1.0,
        "Physics",
        "air_resistance",
        "must be in (0, 1], got {}",
        physics.air_resistance
    );
    check!(
        errors,
        physics.tick_hz > 0.0,
        "Physics",
        "tick_hz",
        "must be positive, got {}",
        physics.tick_hz
    );

    check!(
        errors,
        config.window.scale > 0.0,
        "Window",
        "scale",
        "must be positive, got {}",
        config.window.scale
    );
    check!(
        errors,
        config.player.sprite_scale > 0.0,
        "Player",
        "sprite_scale",
        "must be positive, got {}",
        config.player.sprite_scale
    );
    check!(
        errors,
        config.player.hitbox_size.x >= 0.0 && config.player.hitbox_size.y >= 0.0,
        "Player",
        "hitbox_size",
        "must not be negative"
    );
    check!(
        errors,
        config.camera.box_size.x >= 0.0 && config.camera.box_size.y >= 0.0,
        "Camera",
        "box_size",
        "must not be negative"
    );
    check!(
        errors,
        config.gameplay.height_multiplier >= 0.0,
        "Gameplay",
        "height_multiplier",
        "must not be negative"
    );

    let mut seen = HashSet::new();
    for clip in &config.animations {
        check!(
            errors,
            clip.frame_count > 0,
            "Animation",
            "frame_count",
            "clip {:?} has no frames",
            clip.key
        );
        check!(
            errors,
            clip.frame_buffer > 0,
            "Animation",
            "frame_buffer",
            "clip {:?} has a zero frame buffer",
            clip.key
        );
        check!(
            errors,
            seen.insert(clip.key),
            "Animation",
            "key",
            "clip {:?} is listed twice",
            clip.key
        );
    }
    if !config.animations.is_empty() {
        for key in ClipKey::ALL {
            check!(
                errors,
                seen.contains(&key),
                "Animation",
                "key",
                "clip {:?} is missing",
                key
            );
        }
    }

    errors
}

/// Validate a level definition.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(errors, level.stride > 0, "Level", "stride", "must be positive");
    check!(
        errors,
        level.tile_size > 0.0,
        "Level",
        "tile_size",
        "must be positive, got {}",
        level.tile_size
    );
    check!(
        errors,
        level.platform_height > 0.0 && level.platform_height <= level.tile_size,
        "Level",
        "platform_height",
        "must be in (0, tile_size], got {}",
        level.platform_height
    );
    check!(
        errors,
        level.floor_tiles.contains(&level.marker),
        "Level",
        "floor_tiles",
        "no tile carries the marker {}",
        level.marker
    );

    errors
}
