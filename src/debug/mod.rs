//! Debug overlay for tuning levels and physics.
//!
//! Features:
//! - F1: draw every collision block, the player hitbox and the camera box
//! - F2: text readout of position, velocity, fall tracking and state

use bevy::prelude::*;

use crate::camera::{CameraRig, Viewport};
use crate::core::GameState;
use crate::geometry::{Bounds, level_to_world};
use crate::level::{BlockKind, LevelBlocks};
use crate::movement::{MovementTuning, Physical, Player};
use crate::sprites::Animatable;

const SOLID_GIZMO: Color = Color::srgb(0.3, 0.6, 1.0);
const PLATFORM_GIZMO: Color = Color::srgb(1.0, 0.7, 0.2);
const HITBOX_GIZMO: Color = Color::srgb(1.0, 0.2, 0.2);
const CAMERA_BOX_GIZMO: Color = Color::srgb(0.3, 1.0, 0.4);

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_collision: bool,
    pub show_info: bool,
    /// Message shown in the info overlay for a few seconds
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, update_status_message).chain(),
            )
            .add_systems(
                Update,
                draw_collision_gizmos.run_if(|state: Res<DebugState>| state.show_collision),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}

fn handle_debug_hotkeys(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_collision = !debug_state.show_collision;
        let msg = if debug_state.show_collision {
            "Collision gizmos ON"
        } else {
            "Collision gizmos OFF"
        };
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_info = !debug_state.show_info;
    }
}

fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

fn draw_bounds(gizmos: &mut Gizmos, bounds: &Bounds, color: Color) {
    let center = level_to_world(bounds.center(), 0.0).truncate();
    gizmos.rect_2d(Isometry2d::from_translation(center), bounds.size(), color);
}

fn draw_collision_gizmos(
    mut gizmos: Gizmos,
    blocks: Res<LevelBlocks>,
    player_query: Query<&Player>,
) {
    for block in blocks.iter() {
        let color = match block.kind {
            BlockKind::Solid => SOLID_GIZMO,
            BlockKind::Platform => PLATFORM_GIZMO,
        };
        draw_bounds(&mut gizmos, &block.bounds, color);
    }

    for player in &player_query {
        draw_bounds(&mut gizmos, &player.hitbox(), HITBOX_GIZMO);
        draw_bounds(&mut gizmos, &player.camera_box(), CAMERA_BOX_GIZMO);
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    tuning: Res<MovementTuning>,
    state: Res<State<GameState>>,
    rig: Res<CameraRig>,
    viewport: Res<Viewport>,
    player_query: Query<&Player>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut lines = vec![format!("State: {:?}", state.get())];
    if let Some(player) = player_query.iter().next() {
        let pos = player.position();
        let vel = player.velocity();
        lines.push(format!("Pos: ({:.1}, {:.1})", pos.x, pos.y));
        lines.push(format!("Vel: ({:.2}, {:.2})", vel.x, vel.y));
        lines.push(format!(
            "Grounded: {}  Can jump: {}",
            player.is_grounded(),
            player.body.can_jump
        ));
        lines.push(format!("Fall origin: {:?}", player.fall.origin()));
        lines.push(format!(
            "Max height: {:.1}  Score: {}",
            player.max_height, player.score
        ));
        lines.push(format!("Clip: {:?}", player.animator.active_clip()));
    }
    lines.push(format!(
        "Camera: ({:.1}, {:.1})  view {}x{}",
        rig.offset.x, rig.offset.y, viewport.width, viewport.height
    ));
    lines.push(format!("Jump reach: {:.1}px", tuning.single_jump_height()));
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }

    **text = lines.join("\n");
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
