//! UI domain: in-run score readout and on-screen movement buttons.

use bevy::prelude::*;

use crate::audio::{AudioCommand, AudioSettings, PlaySound, SoundCue};
use crate::core::{GameCommand, RequestTransition};
use crate::movement::{MovementInput, MovementTuning, Player, TouchControls};
use crate::ui::widgets::TEXT_COLOR;

const HUD_PADDING: f32 = 16.0;

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct HeightText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchControl {
    Left,
    Right,
    Jump,
}

/// On-screen button mirroring a movement key
#[derive(Component, Debug)]
pub struct TouchButton {
    pub control: TouchControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAction {
    Pause,
    ToggleSound,
}

/// Corner button for pausing or muting without a keyboard.
#[derive(Component, Debug)]
pub struct HudButton {
    pub action: HudAction,
}

#[derive(Component)]
pub struct SoundLabel;

fn sound_label(settings: &AudioSettings) -> &'static str {
    if settings.any_enabled() {
        "Sound: on"
    } else {
        "Sound: off"
    }
}

pub(crate) fn spawn_hud(
    mut commands: Commands,
    settings: Res<AudioSettings>,
    existing: Query<(), With<HudRoot>>,
) {
    // Resuming from pause re-enters Playing with the HUD still up.
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(HUD_PADDING),
                        top: Val::Px(HUD_PADDING),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
                ))
                .with_children(|panel| {
                    panel.spawn((ScoreText, hud_text("Score: 0")));
                    panel.spawn((HeightText, hud_text("Height: 0m")));
                });

            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(HUD_PADDING),
                    top: Val::Px(HUD_PADDING),
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|corner| {
                    spawn_hud_button(corner, HudAction::Pause, "Pause");
                    spawn_hud_button(corner, HudAction::ToggleSound, sound_label(&settings));
                });

            spawn_touch_button(parent, "<", TouchControl::Left, Val::Px(HUD_PADDING), None);
            spawn_touch_button(parent, ">", TouchControl::Right, Val::Px(96.0), None);
            spawn_touch_button(
                parent,
                "^",
                TouchControl::Jump,
                Val::Auto,
                Some(Val::Px(HUD_PADDING)),
            );
        });
}

fn hud_text(text: &str) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
    )
}

fn spawn_hud_button(parent: &mut ChildSpawnerCommands, action: HudAction, text: &str) {
    let mut button = parent.spawn((
        HudButton { action },
        Button,
        Node {
            padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.2, 0.2, 0.25, 0.6)),
        BorderColor::all(Color::srgba(0.6, 0.6, 0.7, 0.6)),
    ));
    button.with_children(|inner| {
        let mut label = inner.spawn(hud_text(text));
        if action == HudAction::ToggleSound {
            label.insert(SoundLabel);
        }
    });
}

fn spawn_touch_button(
    parent: &mut ChildSpawnerCommands,
    text: &str,
    control: TouchControl,
    left: Val,
    right: Option<Val>,
) {
    parent
        .spawn((
            TouchButton { control },
            Button,
            Node {
                position_type: PositionType::Absolute,
                left,
                right: right.unwrap_or(Val::Auto),
                bottom: Val::Px(HUD_PADDING),
                width: Val::Px(64.0),
                height: Val::Px(64.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.2, 0.2, 0.25, 0.6)),
            BorderColor::all(Color::srgba(0.6, 0.6, 0.7, 0.6)),
        ))
        .with_child((
            Text::new(text),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(TEXT_COLOR),
        ));
}

pub(crate) fn update_hud(
    tuning: Res<MovementTuning>,
    player_query: Query<&Player>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<HeightText>)>,
    mut height_query: Query<&mut Text, (With<HeightText>, Without<ScoreText>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for mut text in &mut score_query {
        **text = format!("Score: {}", player.score);
    }
    for mut text in &mut height_query {
        **text = format!("Height: {}m", player.height(&tuning));
    }
}

/// Held left/right buttons steer; pressing jump latches a jump like the key.
pub(crate) fn read_touch_buttons(
    query: Query<(&TouchButton, &Interaction)>,
    mut touch: ResMut<TouchControls>,
) {
    touch.left = false;
    touch.right = false;

    for (button, interaction) in &query {
        let pressed = *interaction == Interaction::Pressed;
        match button.control {
            TouchControl::Left => touch.left |= pressed,
            TouchControl::Right => touch.right |= pressed,
            TouchControl::Jump => {}
        }
    }
}

pub(crate) fn read_touch_jump(
    query: Query<(&TouchButton, &Interaction), Changed<Interaction>>,
    mut input: ResMut<MovementInput>,
) {
    for (button, interaction) in &query {
        if button.control == TouchControl::Jump && *interaction == Interaction::Pressed {
            input.jump_requested = true;
        }
    }
}

pub(crate) fn handle_hud_buttons(
    query: Query<(&HudButton, &Interaction), Changed<Interaction>>,
    mut requests: MessageWriter<RequestTransition>,
    mut audio: MessageWriter<AudioCommand>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for (button, interaction) in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.action {
            HudAction::Pause => {
                requests.write(RequestTransition(GameCommand::Pause));
            }
            HudAction::ToggleSound => {
                audio.write(AudioCommand::ToggleAll);
            }
        }
        sounds.write(PlaySound(SoundCue::Click));
    }
}

pub(crate) fn update_sound_label(
    settings: Res<AudioSettings>,
    mut query: Query<&mut Text, With<SoundLabel>>,
) {
    if !settings.is_changed() {
        return;
    }
    for mut text in &mut query {
        **text = sound_label(&settings).to_string();
    }
}
