//! Camera domain: a dead-zone follow camera driven by the player's camera box.

mod rig;


pub use rig::{CameraRig, Viewport};

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::core::{FlowSet, GameplaySet, RunReset};
use crate::geometry::level_to_world;
use crate::level::LevelBlocks;
use crate::movement::{Physical, Player};

const CAMERA_Z: f32 = 100.0;

/// Marker for the single game camera
#[derive(Component, Debug)]
pub struct GameCamera;

/// Needs `ContentPlugin` and `LevelPlugin` added first.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let world = app.world();
        let view_size = world
            .get_resource::<GameConfig>()
            .map(|config| config.window.viewport_size())
            .unwrap_or_else(|| GameConfig::default().window.viewport_size());
        let level_size = world
            .get_resource::<LevelBlocks>()
            .map(|blocks| blocks.size)
            .unwrap_or(view_size);
        let viewport = Viewport::new(view_size, level_size);

        app.insert_resource(viewport)
            .insert_resource(CameraRig::new(&viewport))
            .add_systems(Startup, spawn_camera)
            .add_systems(FixedUpdate, follow_player.in_set(GameplaySet::Camera))
            .add_systems(
                Update,
                (reset_camera, sync_camera_transform)
                    .chain()
                    .after(FlowSet::Apply),
            );
    }
}

fn spawn_camera(mut commands: Commands, config: Res<GameConfig>) {
    let scale = if config.window.scale > 0.0 {
        1.0 / config.window.scale
    } else {
        1.0
    };
    commands.spawn((
        GameCamera,
        Camera2d,
        Transform::from_xyz(0.0, 0.0, CAMERA_Z).with_scale(Vec3::new(scale, scale, 1.0)),
    ));
}

fn follow_player(
    viewport: Res<Viewport>,
    mut rig: ResMut<CameraRig>,
    query: Query<&Player>,
) {
    for player in &query {
        rig.follow(&player.camera_box(), player.velocity(), &viewport);
    }
}

fn reset_camera(
    mut resets: MessageReader<RunReset>,
    viewport: Res<Viewport>,
    mut rig: ResMut<CameraRig>,
) {
    if resets.read().count() > 0 {
        rig.reset(&viewport);
    }
}

fn sync_camera_transform(
    viewport: Res<Viewport>,
    rig: Res<CameraRig>,
    mut query: Query<&mut Transform, With<GameCamera>>,
) {
    let center = level_to_world(rig.view_center(&viewport), CAMERA_Z);
    for mut transform in &mut query {
        transform.translation = center;
    }
}
