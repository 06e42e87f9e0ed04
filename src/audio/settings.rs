//! Audio domain: runtime-adjustable volume and channel toggles.

use bevy::prelude::*;

use crate::audio::AudioCommand;
use crate::content::AudioDef;

const VOLUME_STEP: f32 = 0.1;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AudioSettings {
    master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub music_enabled: bool,
    pub sfx_enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::from_config(&AudioDef::default())
    }
}

impl AudioSettings {
    pub fn from_config(def: &AudioDef) -> Self {
        Self {
            master_volume: def.master_volume.clamp(0.0, 1.0),
            music_volume: def.music_volume.clamp(0.0, 1.0),
            sfx_volume: def.sfx_volume.clamp(0.0, 1.0),
            music_enabled: true,
            sfx_enabled: true,
        }
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Clamped to [0, 1].
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume_up(&mut self) {
        self.set_master_volume(self.master_volume + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_master_volume(self.master_volume - VOLUME_STEP);
    }

    /// Flip the background melody on or off. Returns the new state.
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    /// Flip sound effects (jumps, footsteps, clicks) on or off.
    pub fn toggle_sfx(&mut self) -> bool {
        self.sfx_enabled = !self.sfx_enabled;
        self.sfx_enabled
    }

    /// Whether any channel is audible.
    pub fn any_enabled(&self) -> bool {
        self.music_enabled || self.sfx_enabled
    }

    /// Mute everything, or unmute everything if music was off.
    pub fn toggle_all(&mut self) {
        let enabled = !self.music_enabled;
        self.music_enabled = enabled;
        self.sfx_enabled = enabled;
    }

    pub fn apply(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::ToggleAll => self.toggle_all(),
            AudioCommand::ToggleMusic => {
                self.toggle_music();
            }
            AudioCommand::ToggleSfx => {
                self.toggle_sfx();
            }
            AudioCommand::VolumeUp => self.volume_up(),
            AudioCommand::VolumeDown => self.volume_down(),
        }
    }

    /// Linear gain for a tone of `base` gain on the given channel; zero when
    /// the channel is off.
    pub fn gain(&self, base: f32, music: bool) -> f32 {
        let (enabled, channel) = if music {
            (self.music_enabled, self.music_volume)
        } else {
            (self.sfx_enabled, self.sfx_volume)
        };
        if enabled {
            base * channel * self.master_volume
        } else {
            0.0
        }
    }
}
