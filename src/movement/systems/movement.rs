//! Movement domain: fixed-tick systems that drive `Player`.
//!
//! Chained in this order: jump intent, level edges, physics step, move
//! intent. Each runs exactly once per fixed tick while playing.

use bevy::prelude::*;

use crate::level::LevelBlocks;
use crate::movement::{
    MovementInput, MovementTuning, Player, PlayerJumped, RunningChanged,
};

pub(crate) fn apply_jump_intent(
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut jumped: MessageWriter<PlayerJumped>,
    mut query: Query<&mut Player>,
) {
    if !input.jump_requested {
        return;
    }
    input.jump_requested = false;

    for mut player in &mut query {
        if player.jump(&tuning) {
            debug!("Jump from y={:.1}", player.body.position.y);
            jumped.write(PlayerJumped);
        }
    }
}

pub(crate) fn stop_at_level_edges(level: Res<LevelBlocks>, mut query: Query<&mut Player>) {
    for mut player in &mut query {
        player.stop_at_level_edges(level.width());
    }
}

pub(crate) fn step_player(
    tuning: Res<MovementTuning>,
    level: Res<LevelBlocks>,
    mut running: MessageWriter<RunningChanged>,
    mut query: Query<&mut Player>,
) {
    for mut player in &mut query {
        let events = player.update(&tuning, &level);
        if events.running_started {
            running.write(RunningChanged { running: true });
        }
        if events.running_stopped {
            running.write(RunningChanged { running: false });
        }
    }
}

pub(crate) fn apply_move_intent(
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut query: Query<&mut Player>,
) {
    for mut player in &mut query {
        player.apply_move_intent(&input, &tuning);
    }
}
