//! Core domain: messages for run flow.

use bevy::ecs::message::Message;

use crate::core::state::GameCommand;

/// Ask for a state change. Ignored when the command does not apply to the
/// current state.
#[derive(Debug, Clone, Copy)]
pub struct RequestTransition(pub GameCommand);

impl Message for RequestTransition {}

/// Message fired once when a run ends
#[derive(Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub score: u32,
    pub height: u32,
    pub new_record: bool,
}

impl Message for GameOverEvent {}

/// The current run was thrown away (restart or back to menu).
#[derive(Debug, Clone, Copy)]
pub struct RunReset;

impl Message for RunReset {}
