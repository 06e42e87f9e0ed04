//! Movement domain: system modules for input, stepping and spawning.

pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod spawn;

pub(crate) use input::{clear_input, read_input};
pub(crate) use movement::{apply_jump_intent, apply_move_intent, step_player, stop_at_level_edges};
pub(crate) use spawn::{despawn_run_entities, spawn_player};
