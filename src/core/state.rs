//! Core domain: game states, the commands that move between them and the
//! system sets that order each frame.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Loading,
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Requests to change `GameState`, from keys, buttons or gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    AssetsReady,
    Start,
    Pause,
    Resume,
    GameOver,
    Restart,
    ReturnToMenu,
}

impl GameState {
    /// The state `command` leads to, or `None` when it does not apply here.
    pub fn apply(self, command: GameCommand) -> Option<GameState> {
        use GameCommand as C;
        use GameState as S;

        match (self, command) {
            (S::Loading, C::AssetsReady) => Some(S::Menu),
            (S::Menu, C::Start) => Some(S::Playing),
            (S::Playing, C::Pause) => Some(S::Paused),
            (S::Paused, C::Resume) => Some(S::Playing),
            (S::Playing, C::GameOver) => Some(S::GameOver),
            (S::GameOver | S::Paused, C::Restart) => Some(S::Playing),
            (S::Playing | S::Paused | S::GameOver, C::ReturnToMenu) => Some(S::Menu),
            _ => None,
        }
    }
}

impl GameCommand {
    /// Whether following this command throws the current run away.
    pub fn ends_run(self) -> bool {
        matches!(self, GameCommand::Restart | GameCommand::ReturnToMenu)
    }
}

/// Fixed-tick gameplay, in order. Runs only while a run is in progress.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Physics,
    Camera,
    Outcome,
}

/// Per-frame flow control: gather commands, then apply them.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowSet {
    Input,
    Apply,
}
