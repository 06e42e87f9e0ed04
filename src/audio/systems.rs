//! Audio domain: turning gameplay messages into cues and cues into sound.

use bevy::audio::{Pitch, Volume};
use bevy::prelude::*;
use std::time::Duration;

use crate::audio::{AudioCommand, AudioSettings, CueScheduler, PlaySound, SoundCue, ToneQueue};
use crate::core::{GameCommand, GameOverEvent, GameState, RequestTransition};
use crate::movement::{PlayerJumped, RunningChanged};

pub(crate) fn play_intro(mut sounds: MessageWriter<PlaySound>) {
    sounds.write(PlaySound(SoundCue::Intro));
}

/// Bring the repeating cues in line with the state just entered.
pub(crate) fn sync_cues_with_state(
    state: Res<State<GameState>>,
    settings: Res<AudioSettings>,
    mut scheduler: ResMut<CueScheduler>,
) {
    scheduler.sync(&settings, *state.get());
}

pub(crate) fn stop_all_cues(mut scheduler: ResMut<CueScheduler>) {
    scheduler.stop_all();
}

/// Map gameplay and flow messages onto cues.
pub(crate) fn react_to_gameplay(
    mut jumps: MessageReader<PlayerJumped>,
    mut running: MessageReader<RunningChanged>,
    mut game_over: MessageReader<GameOverEvent>,
    mut requests: MessageReader<RequestTransition>,
    state: Res<State<GameState>>,
    settings: Res<AudioSettings>,
    mut scheduler: ResMut<CueScheduler>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for _ in jumps.read() {
        sounds.write(PlaySound(SoundCue::Jump));
    }

    // Only the latest edge this frame matters.
    if let Some(change) = running.read().last() {
        scheduler.player_running = change.running;
        scheduler.sync(&settings, *state.get());
    }

    for _ in game_over.read() {
        scheduler.stop_all();
        sounds.write(PlaySound(SoundCue::GameOver));
    }

    for RequestTransition(command) in requests.read() {
        match command {
            GameCommand::Start => {
                sounds.write(PlaySound(SoundCue::GameStart));
            }
            GameCommand::Restart => {
                scheduler.player_running = false;
                sounds.write(PlaySound(SoundCue::Replay));
            }
            _ => {}
        }
    }
}

pub(crate) fn audio_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: MessageWriter<AudioCommand>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let bindings = [
        (KeyCode::KeyM, AudioCommand::ToggleAll),
        (KeyCode::KeyB, AudioCommand::ToggleMusic),
        (KeyCode::KeyN, AudioCommand::ToggleSfx),
        (KeyCode::Equal, AudioCommand::VolumeUp),
        (KeyCode::Minus, AudioCommand::VolumeDown),
    ];
    for (key, command) in bindings {
        if keyboard.just_pressed(key) {
            commands.write(command);
            if command != AudioCommand::VolumeUp && command != AudioCommand::VolumeDown {
                sounds.write(PlaySound(SoundCue::Click));
            }
        }
    }
}

/// Apply settings changes, then silence whatever channel went off.
pub(crate) fn apply_audio_commands(
    mut commands: MessageReader<AudioCommand>,
    state: Res<State<GameState>>,
    mut settings: ResMut<AudioSettings>,
    mut scheduler: ResMut<CueScheduler>,
    mut queue: ResMut<ToneQueue>,
) {
    let mut changed = false;
    for command in commands.read().copied() {
        settings.apply(command);
        debug!("{:?}: {:?}", command, *settings);
        changed = true;
    }
    if !changed {
        return;
    }

    info!(
        "Music {}, effects {}, master volume {:.1}",
        if settings.music_enabled { "on" } else { "off" },
        if settings.sfx_enabled { "on" } else { "off" },
        settings.master_volume()
    );
    if !settings.music_enabled {
        queue.clear_channel(true);
    }
    if !settings.sfx_enabled {
        queue.clear_channel(false);
    }
    scheduler.sync(&settings, *state.get());
}

/// Fire the repeating cues that came due this frame.
pub(crate) fn tick_repeating_cues(
    time: Res<Time>,
    mut scheduler: ResMut<CueScheduler>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let delta = time.delta();
    for _ in 0..scheduler.ambient.tick(delta) {
        let note = scheduler.notes.ambient_note();
        sounds.write(PlaySound(SoundCue::Ambient(note)));
    }
    for _ in 0..scheduler.footsteps.tick(delta) {
        let pitch = scheduler.notes.footstep_pitch();
        sounds.write(PlaySound(SoundCue::Footstep(pitch)));
    }
}

pub(crate) fn queue_cues(
    mut sounds: MessageReader<PlaySound>,
    settings: Res<AudioSettings>,
    mut queue: ResMut<ToneQueue>,
) {
    for PlaySound(cue) in sounds.read() {
        let music = cue.is_music();
        queue.push(&cue.tones(), settings.gain(1.0, music), music);
    }
}

pub(crate) fn play_due_tones(
    mut commands: Commands,
    time: Res<Time>,
    mut queue: ResMut<ToneQueue>,
    mut pitches: ResMut<Assets<Pitch>>,
) {
    for tone in queue.tick(time.delta_secs()) {
        let pitch = Pitch::new(tone.frequency, Duration::from_secs_f32(tone.duration_secs));
        commands.spawn((
            AudioPlayer(pitches.add(pitch)),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(tone.gain)),
        ));
    }
}
