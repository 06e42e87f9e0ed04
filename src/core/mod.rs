//! Core domain: game states, run flow, scoring outcome and the high-score
//! file.

mod events;
mod resources;
mod state;
mod storage;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{GameOverEvent, RequestTransition, RunReset};
pub use resources::{HighScore, RunOutcome, RunSummary, run_in_progress};
pub use state::{FlowSet, GameCommand, GameState, GameplaySet};
pub use storage::{HighScoreError, HighScoreStore};

use bevy::prelude::*;

use crate::content::GameConfig;
use systems::{
    apply_transitions, check_game_over, finish_loading, load_high_score, pause_on_focus_loss,
    read_flow_keys, record_high_score,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        let tick_hz = if config.physics.tick_hz > 0.0 {
            config.physics.tick_hz
        } else {
            60.0
        };

        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .insert_resource(HighScoreStore::new(config.paths.high_score.clone()))
            .init_resource::<HighScore>()
            .init_resource::<RunOutcome>()
            .add_message::<RequestTransition>()
            .add_message::<GameOverEvent>()
            .add_message::<RunReset>()
            .configure_sets(Update, (FlowSet::Input, FlowSet::Apply).chain())
            .configure_sets(
                FixedUpdate,
                (
                    GameplaySet::Physics,
                    GameplaySet::Camera,
                    GameplaySet::Outcome,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(run_in_progress),
            )
            .add_systems(Startup, load_high_score)
            .add_systems(
                Update,
                (
                    finish_loading.run_if(in_state(GameState::Loading)),
                    read_flow_keys,
                    pause_on_focus_loss,
                )
                    .in_set(FlowSet::Input),
            )
            .add_systems(
                Update,
                (apply_transitions, record_high_score).in_set(FlowSet::Apply),
            )
            .add_systems(FixedUpdate, check_game_over.in_set(GameplaySet::Outcome));
    }
}
