//! Movement domain: player physics, collision resolution and scoring.
//!
//! Everything that decides where the player ends up lives in plain structs
//! (`Player`, `PhysicsBody`, `FallTracker`) so it can be stepped in tests
//! without an `App`. The systems here only feed input in and messages out.

mod collisions;
mod components;
mod events;
mod physics;
mod player;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, FallTracker, RunEntity};
pub use events::{PlayerJumped, RunningChanged};
pub use physics::{Physical, PhysicsBody};
pub use player::{FrameEvents, Player};
pub use resources::{
    COLLISION_EPSILON, MOVING_EPSILON, MovementInput, MovementTuning, TouchControls,
};

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::core::{FlowSet, GameState, GameplaySet};
use systems::{
    apply_jump_intent, apply_move_intent, clear_input, despawn_run_entities, read_input,
    spawn_player, step_player, stop_at_level_edges,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        let tuning = app
            .world()
            .get_resource::<GameConfig>()
            .map(MovementTuning::from_config)
            .unwrap_or_default();
        debug!(
            "Movement tuning: gravity={}, jump_force={}, single jump reaches {:.1} px",
            tuning.gravity,
            tuning.jump_force,
            tuning.single_jump_height()
        );

        app.insert_resource(tuning)
            .init_resource::<MovementInput>()
            .init_resource::<TouchControls>()
            .add_message::<PlayerJumped>()
            .add_message::<RunningChanged>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                read_input.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (despawn_run_entities, clear_input).after(FlowSet::Apply),
            )
            .add_systems(
                FixedUpdate,
                (
                    apply_jump_intent,
                    stop_at_level_edges,
                    step_player,
                    apply_move_intent,
                )
                    .chain()
                    .in_set(GameplaySet::Physics),
            );
    }
}
