//! UI domain: shared full-screen overlay and button helpers.

use bevy::prelude::*;

use crate::audio::{PlaySound, SoundCue};
use crate::core::{GameCommand, RequestTransition};

pub(crate) const TITLE_COLOR: Color = Color::srgb(0.95, 0.8, 0.35);
pub(crate) const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub(crate) const MUTED_TEXT: Color = Color::srgb(0.55, 0.55, 0.6);
const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.25);
const BUTTON_HOVER: Color = Color::srgb(0.28, 0.28, 0.36);
const BUTTON_PRESSED: Color = Color::srgb(0.35, 0.3, 0.2);

/// Button that requests a state change when clicked
#[derive(Component, Debug)]
pub struct MenuButton {
    pub action: GameCommand,
}

/// Full-screen, centred column with a dark backdrop.
pub(crate) fn overlay_node() -> (Node, BackgroundColor, ZIndex) {
    (
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
        ZIndex(100),
    )
}

pub(crate) fn label(text: impl Into<String>, font_size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(16.0)),
            ..default()
        },
    )
}

pub(crate) fn spawn_menu_button(parent: &mut ChildSpawnerCommands, text: &str, action: GameCommand) {
    parent
        .spawn((
            MenuButton { action },
            Button,
            Node {
                width: Val::Px(220.0),
                padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                margin: UiRect::top(Val::Px(12.0)),
                justify_content: JustifyContent::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        ))
        .with_child((
            Text::new(text),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(TEXT_COLOR),
        ));
}

pub(crate) fn handle_menu_buttons(
    query: Query<(&MenuButton, &Interaction), Changed<Interaction>>,
    mut requests: MessageWriter<RequestTransition>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for (button, interaction) in &query {
        if *interaction == Interaction::Pressed {
            sounds.write(PlaySound(SoundCue::Click));
            requests.write(RequestTransition(button.action));
        }
    }
}

pub(crate) fn highlight_buttons(
    mut query: Query<(&Interaction, &mut BackgroundColor), (With<Button>, Changed<Interaction>)>,
) {
    for (interaction, mut background) in &mut query {
        background.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVER,
            Interaction::None => BUTTON_COLOR,
        };
    }
}

pub(crate) fn despawn_with<T: Component>(
    mut commands: Commands,
    query: Query<Entity, With<T>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
