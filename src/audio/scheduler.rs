//! Audio domain: repeating cues (background notes, footsteps) and the seeded
//! pitch picker that feeds them.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use crate::audio::AudioSettings;
use crate::core::GameState;

/// C4, D4, E4 and G4.
pub const AMBIENT_NOTES: [f32; 4] = [261.63, 293.66, 329.63, 392.0];
pub const FOOTSTEP_PITCH_MIN: f32 = 100.0;
pub const FOOTSTEP_PITCH_MAX: f32 = 150.0;

/// A cue that fires every `interval` while running. Starting a running cue or
/// stopping a stopped one does nothing.
#[derive(Debug, Clone)]
pub struct RepeatingCue {
    timer: Timer,
    running: bool,
}

impl RepeatingCue {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs.max(0.001), TimerMode::Repeating),
            running: false,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.timer.reset();
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of times the cue fired during `delta`.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }
}

#[derive(Debug, Clone)]
pub struct NotePicker {
    rng: ChaCha8Rng,
}

impl NotePicker {
    /// Deterministic with a seed, OS-random otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn ambient_note(&mut self) -> f32 {
        AMBIENT_NOTES[self.rng.random_range(0..AMBIENT_NOTES.len())]
    }

    pub fn footstep_pitch(&mut self) -> f32 {
        self.rng.random_range(FOOTSTEP_PITCH_MIN..FOOTSTEP_PITCH_MAX)
    }
}

/// The two repeating cues and their pitch source.
#[derive(Resource, Debug, Clone)]
pub struct CueScheduler {
    pub ambient: RepeatingCue,
    pub footsteps: RepeatingCue,
    pub notes: NotePicker,
    /// Last running edge reported by the player.
    pub player_running: bool,
}

impl CueScheduler {
    pub fn new(ambient_secs: f32, footstep_secs: f32, seed: Option<u64>) -> Self {
        Self {
            ambient: RepeatingCue::new(ambient_secs),
            footsteps: RepeatingCue::new(footstep_secs),
            notes: NotePicker::new(seed),
            player_running: false,
        }
    }

    pub fn stop_all(&mut self) {
        self.ambient.stop();
        self.footsteps.stop();
        self.player_running = false;
    }

    /// Start or stop each cue to match its channel toggle and the game state.
    /// The melody plays through a run, pauses included; footsteps only while
    /// playing and the player is running.
    pub fn sync(&mut self, settings: &AudioSettings, state: GameState) {
        let in_run = matches!(state, GameState::Playing | GameState::Paused);
        if settings.music_enabled && in_run {
            self.ambient.start();
        } else {
            self.ambient.stop();
        }

        if settings.sfx_enabled && state == GameState::Playing && self.player_running {
            self.footsteps.start();
        } else {
            self.footsteps.stop();
        }
    }
}
