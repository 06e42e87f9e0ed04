//! UI domain: screens for each game state, the in-run HUD and on-screen
//! controls.

mod hud;
mod screens;
mod widgets;

pub use hud::{
    HeightText, HudAction, HudButton, HudRoot, ScoreText, SoundLabel, TouchButton, TouchControl,
};
pub use screens::{GameOverScreen, LoadingScreen, MenuScreen, PauseScreen};
pub use widgets::MenuButton;

use bevy::prelude::*;

use crate::core::{FlowSet, GameState};
use hud::{
    handle_hud_buttons, read_touch_buttons, read_touch_jump, spawn_hud, update_hud,
    update_sound_label,
};
use screens::{spawn_game_over_screen, spawn_loading_screen, spawn_menu_screen, spawn_pause_screen};
use widgets::{despawn_with, handle_menu_buttons, highlight_buttons};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), spawn_loading_screen)
            .add_systems(OnExit(GameState::Loading), despawn_with::<LoadingScreen>)
            .add_systems(
                OnEnter(GameState::Menu),
                (spawn_menu_screen, despawn_with::<HudRoot>),
            )
            .add_systems(OnExit(GameState::Menu), despawn_with::<MenuScreen>)
            .add_systems(OnEnter(GameState::Playing), spawn_hud)
            .add_systems(OnEnter(GameState::Paused), spawn_pause_screen)
            .add_systems(OnExit(GameState::Paused), despawn_with::<PauseScreen>)
            .add_systems(
                OnEnter(GameState::GameOver),
                (spawn_game_over_screen, despawn_with::<HudRoot>),
            )
            .add_systems(OnExit(GameState::GameOver), despawn_with::<GameOverScreen>)
            .add_systems(
                Update,
                (handle_menu_buttons, highlight_buttons).in_set(FlowSet::Input),
            )
            .add_systems(
                Update,
                handle_hud_buttons
                    .in_set(FlowSet::Input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (read_touch_buttons, read_touch_jump, update_hud, update_sound_label)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
