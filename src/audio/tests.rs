//! Audio domain: tests for cue timing, pitch picking and volume settings.

use std::time::Duration;

use super::{
    AMBIENT_NOTES, AudioCommand, AudioSettings, CueScheduler, FOOTSTEP_PITCH_MAX,
    FOOTSTEP_PITCH_MIN, NotePicker, RepeatingCue, SoundCue, Tone, ToneQueue,
};
use crate::core::GameState;

fn secs(value: f32) -> Duration {
    Duration::from_secs_f32(value)
}

#[test]
fn test_stopped_cue_never_fires() {
    let mut cue = RepeatingCue::new(0.25);
    assert!(!cue.is_running());
    assert_eq!(cue.tick(secs(5.0)), 0);

    cue.start();
    cue.stop();
    cue.stop();
    assert_eq!(cue.tick(secs(5.0)), 0);
}

#[test]
fn test_repeated_start_does_not_restart_the_interval() {
    let mut cue = RepeatingCue::new(2.0);
    cue.start();
    assert_eq!(cue.tick(secs(1.5)), 0);

    cue.start();
    assert_eq!(cue.tick(secs(0.6)), 1);
}

#[test]
fn test_restart_after_stop_waits_a_full_interval() {
    let mut cue = RepeatingCue::new(2.0);
    cue.start();
    assert_eq!(cue.tick(secs(1.5)), 0);
    cue.stop();

    cue.start();
    assert_eq!(cue.tick(secs(1.5)), 0);
    assert_eq!(cue.tick(secs(0.6)), 1);
}

#[test]
fn test_long_frame_fires_several_times() {
    let mut cue = RepeatingCue::new(0.25);
    cue.start();
    assert_eq!(cue.tick(secs(0.8)), 3);
}

#[test]
fn test_seeded_picker_is_deterministic() {
    let mut a = NotePicker::new(Some(9));
    let mut b = NotePicker::new(Some(9));

    for _ in 0..50 {
        let note = a.ambient_note();
        assert_eq!(note, b.ambient_note());
        assert!(AMBIENT_NOTES.contains(&note));

        let pitch = a.footstep_pitch();
        assert_eq!(pitch, b.footstep_pitch());
        assert!((FOOTSTEP_PITCH_MIN..FOOTSTEP_PITCH_MAX).contains(&pitch));
    }
}

#[test]
fn test_tone_queue_releases_in_start_order() {
    let mut queue = ToneQueue::default();
    queue.push(&SoundCue::Intro.tones(), 1.0, false);
    assert_eq!(queue.len(), 3);

    let first = queue.tick(0.0);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].frequency, 440.0);

    // One long frame releases the rest, earliest first.
    let rest = queue.tick(0.5);
    let frequencies: Vec<f32> = rest.iter().map(|tone| tone.frequency).collect();
    assert_eq!(frequencies, vec![554.0, 659.0]);
    assert!(queue.is_empty());
}

#[test]
fn test_tone_queue_scales_gain_and_drops_silence() {
    let tone = Tone {
        frequency: 800.0,
        duration_secs: 0.05,
        delay_secs: 0.0,
        gain: 0.5,
    };
    let mut queue = ToneQueue::default();

    queue.push(&[tone], 0.0, false);
    assert!(queue.is_empty());

    queue.push(&[tone], 0.5, false);
    let due = queue.tick(0.016);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].gain, 0.25);
}

#[test]
fn test_every_cue_has_audible_tones() {
    let cues = [
        SoundCue::Intro,
        SoundCue::GameStart,
        SoundCue::Replay,
        SoundCue::Jump,
        SoundCue::GameOver,
        SoundCue::Click,
        SoundCue::Footstep(120.0),
        SoundCue::Ambient(AMBIENT_NOTES[0]),
    ];
    for cue in cues {
        let tones = cue.tones();
        assert!(!tones.is_empty(), "{cue:?} has no tones");
        for tone in tones {
            assert!(tone.frequency > 0.0 && tone.duration_secs > 0.0 && tone.gain > 0.0);
        }
    }
    assert!(SoundCue::Ambient(261.63).is_music());
    assert!(!SoundCue::Jump.is_music());
}

#[test]
fn test_master_volume_is_clamped() {
    let mut settings = AudioSettings::default();
    assert_eq!(settings.master_volume(), 0.7);

    settings.set_master_volume(3.0);
    assert_eq!(settings.master_volume(), 1.0);
    settings.volume_up();
    assert_eq!(settings.master_volume(), 1.0);

    settings.set_master_volume(-1.0);
    assert_eq!(settings.master_volume(), 0.0);
    settings.volume_down();
    assert_eq!(settings.master_volume(), 0.0);
}

#[test]
fn test_toggle_silences_both_channels() {
    let mut settings = AudioSettings::default();
    settings.set_master_volume(1.0);
    settings.music_volume = 0.5;
    settings.sfx_volume = 1.0;

    assert_eq!(settings.gain(0.2, false), 0.2);
    assert_eq!(settings.gain(0.2, true), 0.1);

    settings.toggle_all();
    assert_eq!(settings.gain(0.2, false), 0.0);
    assert_eq!(settings.gain(0.2, true), 0.0);

    settings.toggle_all();
    assert!(settings.music_enabled && settings.sfx_enabled);
}

#[test]
fn test_music_toggle_silences_only_music() {
    let mut settings = AudioSettings::default();

    assert!(!settings.toggle_music());
    assert_eq!(settings.gain(0.05, true), 0.0);
    assert!(settings.gain(0.2, false) > 0.0);
    assert!(settings.any_enabled());

    assert!(settings.toggle_music());
    assert!(settings.gain(0.05, true) > 0.0);
}

#[test]
fn test_sfx_toggle_silences_only_effects() {
    let mut settings = AudioSettings::default();

    settings.apply(AudioCommand::ToggleSfx);
    assert_eq!(settings.gain(0.2, false), 0.0);
    assert!(settings.gain(0.05, true) > 0.0);

    settings.apply(AudioCommand::ToggleMusic);
    assert!(!settings.any_enabled());
}

#[test]
fn test_default_gain_is_master_times_base() {
    let settings = AudioSettings::default();
    let ambient = SoundCue::Ambient(AMBIENT_NOTES[0]).tones()[0].gain;

    assert!((settings.gain(ambient, true) - 0.7 * 0.05).abs() < 1e-6);
    assert!((settings.gain(0.3, false) - 0.7 * 0.3).abs() < 1e-6);
}

#[test]
fn test_clearing_a_channel_keeps_the_other() {
    let mut queue = ToneQueue::default();
    queue.push(&SoundCue::Ambient(AMBIENT_NOTES[1]).tones(), 1.0, true);
    queue.push(&SoundCue::GameOver.tones(), 1.0, false);
    assert_eq!(queue.len(), 5);

    queue.clear_channel(false);
    let due = queue.tick(0.0);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].frequency, AMBIENT_NOTES[1]);
    assert!(queue.is_empty());
}

fn scheduler() -> CueScheduler {
    CueScheduler::new(2.0, 0.25, Some(3))
}

#[test]
fn test_muting_music_stops_only_the_melody() {
    let mut settings = AudioSettings::default();
    let mut cues = scheduler();
    cues.player_running = true;
    cues.sync(&settings, GameState::Playing);
    assert!(cues.ambient.is_running() && cues.footsteps.is_running());

    settings.toggle_music();
    cues.sync(&settings, GameState::Playing);
    assert!(!cues.ambient.is_running());
    assert!(cues.footsteps.is_running());
}

#[test]
fn test_muting_effects_stops_only_footsteps() {
    let mut settings = AudioSettings::default();
    let mut cues = scheduler();
    cues.player_running = true;
    cues.sync(&settings, GameState::Playing);

    settings.toggle_sfx();
    cues.sync(&settings, GameState::Playing);
    assert!(cues.ambient.is_running());
    assert!(!cues.footsteps.is_running());

    // Footsteps come back while the player is still running.
    settings.toggle_sfx();
    cues.sync(&settings, GameState::Playing);
    assert!(cues.footsteps.is_running());
}

#[test]
fn test_unmuting_outside_a_run_stays_quiet() {
    let mut settings = AudioSettings::default();
    settings.toggle_all();
    let mut cues = scheduler();

    settings.toggle_all();
    for state in [GameState::Menu, GameState::GameOver, GameState::Loading] {
        cues.sync(&settings, state);
        assert!(!cues.ambient.is_running(), "melody started in {state:?}");
        assert!(!cues.footsteps.is_running());
    }
}

#[test]
fn test_pause_keeps_melody_and_stops_footsteps() {
    let settings = AudioSettings::default();
    let mut cues = scheduler();
    cues.player_running = true;
    cues.sync(&settings, GameState::Playing);

    cues.sync(&settings, GameState::Paused);
    assert!(cues.ambient.is_running());
    assert!(!cues.footsteps.is_running());

    cues.stop_all();
    assert!(!cues.player_running);
    cues.sync(&settings, GameState::Playing);
    assert!(!cues.footsteps.is_running());
}
