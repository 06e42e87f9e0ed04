//! Audio domain: synthesized cues for jumps, footsteps, game over and a
//! sparse background melody.
//!
//! Nothing here is loaded from disk. Cues expand into sine tones (`Pitch`
//! assets) that despawn when finished.

mod cues;
mod scheduler;
mod settings;
mod systems;

#[cfg(test)]
mod tests;

pub use cues::{AudioCommand, PlaySound, SoundCue, Tone, ToneQueue};
pub use scheduler::{
    AMBIENT_NOTES, CueScheduler, FOOTSTEP_PITCH_MAX, FOOTSTEP_PITCH_MIN, NotePicker, RepeatingCue,
};
pub use settings::AudioSettings;

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::core::{FlowSet, GameState};
use systems::{
    apply_audio_commands, audio_keys, play_due_tones, play_intro, queue_cues, react_to_gameplay,
    stop_all_cues, sync_cues_with_state, tick_repeating_cues,
};

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        let def = app
            .world()
            .get_resource::<GameConfig>()
            .map(|config| config.audio.clone())
            .unwrap_or_default();

        app.insert_resource(AudioSettings::from_config(&def))
            .insert_resource(CueScheduler::new(
                def.ambient_interval_secs,
                def.footstep_interval_secs,
                def.seed,
            ))
            .init_resource::<ToneQueue>()
            .add_message::<PlaySound>()
            .add_message::<AudioCommand>()
            .add_systems(OnExit(GameState::Loading), play_intro)
            .add_systems(OnEnter(GameState::Playing), sync_cues_with_state)
            .add_systems(OnEnter(GameState::Paused), sync_cues_with_state)
            .add_systems(OnEnter(GameState::GameOver), stop_all_cues)
            .add_systems(OnEnter(GameState::Menu), stop_all_cues)
            .add_systems(
                Update,
                audio_keys.in_set(FlowSet::Input),
            )
            .add_systems(
                Update,
                (
                    apply_audio_commands,
                    react_to_gameplay,
                    tick_repeating_cues,
                    queue_cues,
                    play_due_tones,
                )
                    .chain()
                    .after(FlowSet::Apply),
            );
    }
}
