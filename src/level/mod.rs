//! Level domain: collision blocks built from the tile grids, plus their
//! on-screen quads.

mod blocks;
mod tiles;

#[cfg(test)]
mod tests;

pub use blocks::{BlockKind, CollisionBlock, LevelBlocks};
pub use tiles::blocks_from_tiles;

use bevy::prelude::*;

use crate::content::{GameConfig, LevelDef};
use crate::geometry::level_to_world;

const SOLID_COLOR: Color = Color::srgb(0.32, 0.3, 0.38);
const PLATFORM_COLOR: Color = Color::srgb(0.55, 0.42, 0.28);

/// Marker for level backdrop and block quads
#[derive(Component, Debug)]
pub struct LevelVisual;

/// Needs `ContentPlugin` added first so `LevelDef` is already present.
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        let blocks = match app.world().get_resource::<LevelDef>() {
            Some(def) => LevelBlocks::from_def(def),
            None => {
                warn!("LevelDef missing at build time, using the fallback level");
                LevelBlocks::from_def(&LevelDef::fallback())
            }
        };
        info!(
            "Level built: {} solid blocks, {} platforms, {}x{} px",
            blocks.solids.len(),
            blocks.platforms.len(),
            blocks.width(),
            blocks.height()
        );

        app.insert_resource(blocks)
            .add_systems(Startup, spawn_level_visuals);
    }
}

fn spawn_level_visuals(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
    blocks: Res<LevelBlocks>,
) {
    // Backdrop is drawn under the block quads; a missing image just leaves
    // the clear color.
    let backdrop_center = blocks.size * 0.5;
    commands.spawn((
        LevelVisual,
        Sprite {
            image: asset_server.load(config.paths.background.clone()),
            custom_size: Some(blocks.size),
            ..default()
        },
        Transform::from_translation(level_to_world(backdrop_center, -10.0)),
    ));

    for block in blocks.iter() {
        let color = match block.kind {
            BlockKind::Solid => SOLID_COLOR,
            BlockKind::Platform => PLATFORM_COLOR,
        };
        commands.spawn((
            LevelVisual,
            Sprite {
                color,
                custom_size: Some(block.bounds.size()),
                ..default()
            },
            Transform::from_translation(level_to_world(block.bounds.center(), 0.0)),
        ));
    }
}
