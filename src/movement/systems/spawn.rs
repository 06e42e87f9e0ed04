//! Movement domain: player spawning and run cleanup.

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::core::RunReset;
use crate::geometry::level_to_world;
use crate::movement::{MovementTuning, Player, RunEntity};
use crate::sprites::{ClipKey, PlayerSprite, SpriteAnimator};

/// Spawn a fresh player at the configured spawn point. Resuming from pause
/// re-enters `Playing` too, so an existing player is kept.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    tuning: Res<MovementTuning>,
    existing: Query<(), With<Player>>,
) {
    if !existing.is_empty() {
        return;
    }

    let spawn: Vec2 = config.player.spawn.into();
    let animator = SpriteAnimator::from_defs(&config.clips(), ClipKey::Idle);
    let player = Player::new(spawn, &tuning, animator);

    info!("Spawning player at ({:.0}, {:.0})", spawn.x, spawn.y);
    commands.spawn((
        RunEntity,
        player,
        PlayerSprite,
        Sprite::default(),
        Transform::from_translation(level_to_world(spawn, 10.0)),
    ));
}

/// Despawn everything tagged as part of the finished run.
pub(crate) fn despawn_run_entities(
    mut commands: Commands,
    mut resets: MessageReader<RunReset>,
    query: Query<Entity, With<RunEntity>>,
) {
    if resets.read().count() == 0 {
        return;
    }

    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Despawned {} run entities", count);
}
