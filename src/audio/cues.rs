//! Audio domain: named cues and the tones they expand into.
//!
//! Every sound is synthesized: a cue is a short list of sine tones, each with
//! its own start delay, so arpeggios and pitch sweeps are just several tones.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundCue {
    Intro,
    GameStart,
    Replay,
    Jump,
    GameOver,
    Click,
    /// One running step at the given pitch.
    Footstep(f32),
    /// One background note at the given pitch.
    Ambient(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    /// Base gain before volume settings.
    pub gain: f32,
}

impl Tone {
    const fn new(frequency: f32, duration_secs: f32, delay_secs: f32, gain: f32) -> Self {
        Self {
            frequency,
            duration_secs,
            delay_secs,
            gain,
        }
    }
}

impl SoundCue {
    /// Music cues follow the music toggle; everything else is an effect.
    pub fn is_music(&self) -> bool {
        matches!(self, SoundCue::Ambient(_))
    }

    pub fn tones(&self) -> Vec<Tone> {
        match *self {
            SoundCue::Intro => vec![
                Tone::new(440.0, 0.1, 0.0, 0.3),
                Tone::new(554.0, 0.1, 0.1, 0.3),
                Tone::new(659.0, 0.2, 0.2, 0.3),
            ],
            SoundCue::GameStart => vec![
                Tone::new(523.0, 0.15, 0.0, 0.2),
                Tone::new(659.0, 0.15, 0.1, 0.2),
                Tone::new(784.0, 0.15, 0.2, 0.2),
            ],
            SoundCue::Replay => vec![Tone::new(659.0, 0.15, 0.0, 0.3)],
            // Rising sweep, 200 Hz to 600 Hz over 0.15 s.
            SoundCue::Jump => vec![
                Tone::new(200.0, 0.05, 0.0, 0.2),
                Tone::new(350.0, 0.05, 0.05, 0.2),
                Tone::new(600.0, 0.05, 0.1, 0.2),
            ],
            // Falling sweep, 400 Hz to 100 Hz over 0.5 s.
            SoundCue::GameOver => vec![
                Tone::new(400.0, 0.125, 0.0, 0.3),
                Tone::new(280.0, 0.125, 0.125, 0.3),
                Tone::new(180.0, 0.125, 0.25, 0.3),
                Tone::new(100.0, 0.125, 0.375, 0.3),
            ],
            SoundCue::Click => vec![Tone::new(800.0, 0.05, 0.0, 0.15)],
            SoundCue::Footstep(pitch) => vec![Tone::new(pitch, 0.05, 0.0, 0.05)],
            SoundCue::Ambient(pitch) => vec![Tone::new(pitch, 1.5, 0.0, 0.05)],
        }
    }
}

/// Ask for a cue to be played
#[derive(Debug, Clone, Copy)]
pub struct PlaySound(pub SoundCue);

impl Message for PlaySound {}

/// Runtime sound settings changes, from keys or the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    ToggleAll,
    ToggleMusic,
    ToggleSfx,
    VolumeUp,
    VolumeDown,
}

impl Message for AudioCommand {}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTone {
    tone: Tone,
    remaining_secs: f32,
    music: bool,
}

/// Tones waiting for their start delay, with gain already resolved.
#[derive(Resource, Debug, Default)]
pub struct ToneQueue {
    pending: Vec<PendingTone>,
}

impl ToneQueue {
    /// Queue `tones` on the music or effects channel, scaling each gain by
    /// `gain_scale`. Silent cues are dropped here.
    pub fn push(&mut self, tones: &[Tone], gain_scale: f32, music: bool) {
        if gain_scale <= 0.0 {
            return;
        }
        for tone in tones {
            self.pending.push(PendingTone {
                tone: Tone {
                    gain: tone.gain * gain_scale,
                    ..*tone
                },
                remaining_secs: tone.delay_secs,
                music,
            });
        }
    }

    /// Advance by `delta_secs` and return the tones due now, earliest first.
    pub fn tick(&mut self, delta_secs: f32) -> Vec<Tone> {
        let mut due = Vec::new();
        self.pending.retain_mut(|pending| {
            pending.remaining_secs -= delta_secs;
            if pending.remaining_secs <= 0.0 {
                due.push(*pending);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.remaining_secs.total_cmp(&b.remaining_secs));
        due.into_iter().map(|pending| pending.tone).collect()
    }

    /// Forget tones still waiting on one channel.
    pub fn clear_channel(&mut self, music: bool) {
        self.pending.retain(|pending| pending.music != music);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
