//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/config.ron and assets/data/level.ron and
//! are used for deserialization. Every section has a `Default` equal to the
//! shipped tuning, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sprites::ClipKey;

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl Vec2Def {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

// ============================================================================
// Game configuration (config.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowDef,
    pub physics: PhysicsDef,
    pub player: PlayerDef,
    pub camera: CameraDef,
    pub gameplay: GameplayDef,
    pub audio: AudioDef,
    pub animations: Vec<ClipDef>,
    pub paths: PathsDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowDef {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Screen pixels per level pixel.
    pub scale: f32,
}

impl Default for WindowDef {
    fn default() -> Self {
        Self {
            title: "Jump Quest".to_string(),
            width: 1024,
            height: 576,
            scale: 4.0,
        }
    }
}

impl WindowDef {
    /// Size of the visible slice of the level, in level pixels.
    pub fn viewport_size(&self) -> Vec2 {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        Vec2::new(self.width as f32 / scale, self.height as f32 / scale)
    }
}

/// Per-tick integration constants (one tick = 1/60 s).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsDef {
    pub gravity: f32,
    pub jump_force: f32,
    pub move_speed: f32,
    pub max_fall_speed: f32,
    pub air_resistance: f32,
    pub tick_hz: f64,
}

impl Default for PhysicsDef {
    fn default() -> Self {
        Self {
            gravity: 0.15,
            jump_force: -5.5,
            move_speed: 2.5,
            max_fall_speed: 10.0,
            air_resistance: 0.95,
            tick_hz: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDef {
    pub spawn: Vec2Def,
    /// Drawn size of one strip frame relative to its image size.
    pub sprite_scale: f32,
    pub hitbox_offset: Vec2Def,
    pub hitbox_size: Vec2Def,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            spawn: Vec2Def::new(100.0, 300.0),
            sprite_scale: 0.5,
            hitbox_offset: Vec2Def::new(35.0, 26.0),
            hitbox_size: Vec2Def::new(14.0, 27.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraDef {
    pub box_offset: Vec2Def,
    pub box_size: Vec2Def,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            box_offset: Vec2Def::new(-50.0, 0.0),
            box_size: Vec2Def::new(200.0, 80.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDef {
    /// Net downward drop, in level pixels, that ends the run on landing.
    pub fall_damage_height: f32,
    /// Downward speed that ends the run immediately.
    pub game_over_fall_speed: f32,
    pub height_multiplier: f32,
}

impl Default for GameplayDef {
    fn default() -> Self {
        Self {
            fall_damage_height: 150.0,
            game_over_fall_speed: 8.0,
            height_multiplier: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioDef {
    pub master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub ambient_interval_secs: f32,
    pub footstep_interval_secs: f32,
    /// Fixed seed for the ambient note picker; random when absent.
    pub seed: Option<u64>,
}

impl Default for AudioDef {
    fn default() -> Self {
        Self {
            master_volume: 0.7,
            music_volume: 1.0,
            sfx_volume: 1.0,
            ambient_interval_secs: 2.0,
            footstep_interval_secs: 0.25,
            seed: None,
        }
    }
}

/// One animation strip: `frame_count` frames laid out horizontally.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClipDef {
    pub key: ClipKey,
    pub image: String,
    pub frame_count: u32,
    pub frame_buffer: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsDef {
    /// Filesystem path of the level file.
    pub level: String,
    /// Filesystem path of the persisted high score.
    pub high_score: String,
    /// Asset-server path of the backdrop image.
    pub background: String,
}

impl Default for PathsDef {
    fn default() -> Self {
        Self {
            level: "assets/data/level.ron".to_string(),
            high_score: "save/high_score.json".to_string(),
            background: "img/background.png".to_string(),
        }
    }
}

impl GameConfig {
    /// Clip table, falling back to the warrior strips when the file lists none.
    pub fn clips(&self) -> Vec<ClipDef> {
        if self.animations.is_empty() {
            default_clips()
        } else {
            self.animations.clone()
        }
    }
}

pub fn default_clips() -> Vec<ClipDef> {
    let clip = |key, image: &str, frame_count, frame_buffer| ClipDef {
        key,
        image: image.to_string(),
        frame_count,
        frame_buffer,
    };

    vec![
        clip(ClipKey::Idle, "img/warrior/Idle.png", 8, 3),
        clip(ClipKey::Run, "img/warrior/Run.png", 8, 5),
        clip(ClipKey::Jump, "img/warrior/Jump.png", 2, 3),
        clip(ClipKey::Fall, "img/warrior/Fall.png", 2, 3),
        clip(ClipKey::IdleLeft, "img/warrior/IdleLeft.png", 8, 3),
        clip(ClipKey::RunLeft, "img/warrior/RunLeft.png", 8, 5),
        clip(ClipKey::JumpLeft, "img/warrior/JumpLeft.png", 2, 3),
        clip(ClipKey::FallLeft, "img/warrior/FallLeft.png", 2, 3),
    ]
}

// ============================================================================
// Level (level.ron)
// ============================================================================

/// Two parallel tile grids sharing one stride. Tiles equal to `marker` are
/// occupied; every other value is empty.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub stride: usize,
    pub tile_size: f32,
    pub marker: u32,
    /// Height of one-way platform blocks; solid blocks are a full tile tall.
    pub platform_height: f32,
    pub floor_tiles: Vec<u32>,
    pub platform_tiles: Vec<u32>,
}

pub const FALLBACK_STRIDE: usize = 36;
pub const FALLBACK_ROWS: usize = 27;
pub const TILE_MARKER: u32 = 202;

impl LevelDef {
    /// Built-in level used when level.ron cannot be read: a two-row floor, a
    /// wall on each side and a zig-zag ladder of platforms up to the top.
    pub fn fallback() -> Self {
        let cells = FALLBACK_STRIDE * FALLBACK_ROWS;
        let mut floor_tiles = vec![0; cells];
        let mut platform_tiles = vec![0; cells];

        for row in 0..FALLBACK_ROWS {
            for col in 0..FALLBACK_STRIDE {
                let wall = col == 0 || col == FALLBACK_STRIDE - 1;
                let ground = row >= FALLBACK_ROWS - 2;
                if wall || ground {
                    floor_tiles[row * FALLBACK_STRIDE + col] = TILE_MARKER;
                }
            }
        }

        // Four rows apart keeps every hop inside a single jump's reach.
        let mut row = FALLBACK_ROWS - 6;
        let mut left_side = true;
        loop {
            let start = if left_side { 4 } else { 20 };
            for col in start..start + 10 {
                platform_tiles[row * FALLBACK_STRIDE + col] = TILE_MARKER;
            }
            left_side = !left_side;
            if row < 6 {
                break;
            }
            row -= 4;
        }

        Self {
            stride: FALLBACK_STRIDE,
            tile_size: 16.0,
            marker: TILE_MARKER,
            platform_height: 4.0,
            floor_tiles,
            platform_tiles,
        }
    }

    /// Number of rows, counting a trailing partial row.
    pub fn rows(&self) -> usize {
        if self.stride == 0 {
            return 0;
        }
        let longest = self.floor_tiles.len().max(self.platform_tiles.len());
        longest.div_ceil(self.stride)
    }

    /// Level extent in level pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.stride as f32 * self.tile_size,
            self.rows() as f32 * self.tile_size,
        )
    }
}
