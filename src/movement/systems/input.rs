//! Movement domain: input sampling for the next fixed tick.

use bevy::prelude::*;

use crate::core::RunReset;
use crate::movement::{MovementInput, TouchControls};

/// Sample keys every frame. Jump is latched so a press between two fixed
/// ticks is not lost; the tick that consumes it clears the latch.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    touch: Res<TouchControls>,
    mut input: ResMut<MovementInput>,
) {
    input.move_left = keyboard.pressed(KeyCode::KeyA)
        || keyboard.pressed(KeyCode::ArrowLeft)
        || touch.left;
    input.move_right = keyboard.pressed(KeyCode::KeyD)
        || keyboard.pressed(KeyCode::ArrowRight)
        || touch.right;

    if keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp)
    {
        input.jump_requested = true;
    }
}

/// Drop held and latched intent so nothing carries over into the next run.
pub(crate) fn clear_input(
    mut resets: MessageReader<RunReset>,
    mut input: ResMut<MovementInput>,
    mut touch: ResMut<TouchControls>,
) {
    if resets.read().count() == 0 {
        return;
    }
    *input = MovementInput::default();
    *touch = TouchControls::default();
}
