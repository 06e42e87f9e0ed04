//! Movement domain: messages emitted by the fixed-tick player systems.

use bevy::ecs::message::Message;

/// The player left the ground under their own power this tick.
#[derive(Debug)]
pub struct PlayerJumped;

impl Message for PlayerJumped {}

/// Grounded running started (`true`) or stopped (`false`).
#[derive(Debug)]
pub struct RunningChanged {
    pub running: bool,
}

impl Message for RunningChanged {}
