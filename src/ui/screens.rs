//! UI domain: loading, menu, pause and game-over screens.

use bevy::prelude::*;

use crate::core::{GameCommand, HighScore, RunOutcome};
use crate::ui::widgets::{
    MUTED_TEXT, TEXT_COLOR, TITLE_COLOR, label, overlay_node, spawn_menu_button,
};

#[derive(Component)]
pub struct LoadingScreen;

#[derive(Component)]
pub struct MenuScreen;

#[derive(Component)]
pub struct PauseScreen;

#[derive(Component)]
pub struct GameOverScreen;

pub(crate) fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((LoadingScreen, overlay_node()))
        .with_child(label("Loading...", 32.0, TEXT_COLOR));
}

pub(crate) fn spawn_menu_screen(mut commands: Commands, high_score: Res<HighScore>) {
    let best = high_score.best;
    commands
        .spawn((MenuScreen, overlay_node()))
        .with_children(|parent| {
            parent.spawn(label("JUMP QUEST", 64.0, TITLE_COLOR));
            parent.spawn(label(format!("High score: {}", best), 22.0, TEXT_COLOR));
            spawn_menu_button(parent, "START", GameCommand::Start);
            parent.spawn(label(
                "A/D or arrows to move, Space to jump, Esc to pause, M to mute",
                14.0,
                MUTED_TEXT,
            ));
        });
}

pub(crate) fn spawn_pause_screen(mut commands: Commands) {
    commands
        .spawn((PauseScreen, overlay_node()))
        .with_children(|parent| {
            parent.spawn(label("PAUSED", 56.0, TITLE_COLOR));
            spawn_menu_button(parent, "RESUME", GameCommand::Resume);
            spawn_menu_button(parent, "RESTART", GameCommand::Restart);
            spawn_menu_button(parent, "MENU", GameCommand::ReturnToMenu);
        });
}

pub(crate) fn spawn_game_over_screen(
    mut commands: Commands,
    outcome: Res<RunOutcome>,
    high_score: Res<HighScore>,
) {
    let summary = outcome.summary.unwrap_or_default();

    commands
        .spawn((GameOverScreen, overlay_node()))
        .with_children(|parent| {
            parent.spawn(label("GAME OVER", 64.0, Color::srgb(0.8, 0.15, 0.15)));
            parent.spawn(label(format!("Score: {}", summary.score), 28.0, TEXT_COLOR));
            parent.spawn(label(
                format!("Height: {}m", summary.height),
                28.0,
                TEXT_COLOR,
            ));
            if summary.new_record {
                parent.spawn(label("New record!", 24.0, TITLE_COLOR));
            } else {
                parent.spawn(label(
                    format!("Best: {}", high_score.best),
                    20.0,
                    MUTED_TEXT,
                ));
            }
            spawn_menu_button(parent, "PLAY AGAIN", GameCommand::Restart);
            spawn_menu_button(parent, "MENU", GameCommand::ReturnToMenu);
            parent.spawn(label("Press [Enter] to play again", 14.0, MUTED_TEXT));
        });
}
