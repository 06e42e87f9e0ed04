//! Core domain: run flow systems.

use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::core::events::{GameOverEvent, RequestTransition, RunReset};
use crate::core::resources::{HighScore, RunOutcome, RunSummary};
use crate::core::state::{GameCommand, GameState};
use crate::core::storage::HighScoreStore;
use crate::movement::{MovementTuning, Player};
use crate::sprites::ClipImages;

pub(crate) fn load_high_score(store: Res<HighScoreStore>, mut high_score: ResMut<HighScore>) {
    match store.load() {
        Ok(best) => {
            high_score.best = best;
            info!("High score {} loaded from {}", best, store.path().display());
        }
        Err(err) => {
            warn!("{}; starting from 0", err);
            high_score.best = 0;
        }
    }
}

/// Leave the loading screen once every animation strip has settled.
pub(crate) fn finish_loading(
    images: Res<ClipImages>,
    mut requests: MessageWriter<RequestTransition>,
) {
    if images.settled {
        requests.write(RequestTransition(GameCommand::AssetsReady));
    }
}

pub(crate) fn read_flow_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut requests: MessageWriter<RequestTransition>,
) {
    let command = match state.get() {
        GameState::Playing if keyboard.just_pressed(KeyCode::Escape) => Some(GameCommand::Pause),
        GameState::Paused if keyboard.just_pressed(KeyCode::Escape) => Some(GameCommand::Resume),
        GameState::Paused if keyboard.just_pressed(KeyCode::KeyQ) => {
            Some(GameCommand::ReturnToMenu)
        }
        GameState::Menu if keyboard.just_pressed(KeyCode::Enter) => Some(GameCommand::Start),
        GameState::GameOver if keyboard.just_pressed(KeyCode::Enter) => {
            Some(GameCommand::Restart)
        }
        _ => None,
    };

    if let Some(command) = command {
        requests.write(RequestTransition(command));
    }
}

pub(crate) fn pause_on_focus_loss(
    mut focus: MessageReader<WindowFocused>,
    state: Res<State<GameState>>,
    mut requests: MessageWriter<RequestTransition>,
) {
    let lost_focus = focus.read().any(|event| !event.focused);
    if lost_focus && *state.get() == GameState::Playing {
        info!("Window lost focus, pausing");
        requests.write(RequestTransition(GameCommand::Pause));
    }
}

/// Apply queued commands in order against the transition table. Commands
/// that end the run also clear its outcome and announce `RunReset`.
pub(crate) fn apply_transitions(
    mut requests: MessageReader<RequestTransition>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut outcome: ResMut<RunOutcome>,
    mut resets: MessageWriter<RunReset>,
) {
    let mut current = *state.get();
    let mut changed = false;

    for RequestTransition(command) in requests.read().copied() {
        let Some(next) = current.apply(command) else {
            debug!("Ignoring {:?} in {:?}", command, current);
            continue;
        };

        info!("{:?} --{:?}--> {:?}", current, command, next);
        if command.ends_run() {
            outcome.summary = None;
            resets.write(RunReset);
        }
        current = next;
        changed = true;
    }

    if changed {
        next_state.set(current);
    }
}

/// End the run on a hard landing or a terminal fall.
pub(crate) fn check_game_over(
    tuning: Res<MovementTuning>,
    high_score: Res<HighScore>,
    mut outcome: ResMut<RunOutcome>,
    mut game_over: MessageWriter<GameOverEvent>,
    mut requests: MessageWriter<RequestTransition>,
    mut query: Query<&mut Player>,
) {
    for mut player in &mut query {
        if !player.check_fall_damage(&tuning) {
            continue;
        }

        let summary = RunSummary {
            score: player.score,
            height: player.height(&tuning),
            new_record: player.score > high_score.best,
        };
        info!(
            "Game over: score {}, height {}m (best {})",
            summary.score, summary.height, high_score.best
        );

        outcome.summary = Some(summary);
        game_over.write(GameOverEvent {
            score: summary.score,
            height: summary.height,
            new_record: summary.new_record,
        });
        requests.write(RequestTransition(GameCommand::GameOver));
        return;
    }
}

/// Persist a beaten high score. A failed write keeps the in-memory value.
pub(crate) fn record_high_score(
    mut events: MessageReader<GameOverEvent>,
    store: Res<HighScoreStore>,
    mut high_score: ResMut<HighScore>,
) {
    for event in events.read() {
        if !high_score.submit(event.score) {
            continue;
        }
        match store.save(high_score.best) {
            Ok(()) => info!("New high score {} saved", high_score.best),
            Err(err) => error!("Could not save high score: {}", err),
        }
    }
}
