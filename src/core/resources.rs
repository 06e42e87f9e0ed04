//! Core domain: shared resources for scores and the current run's outcome.

use bevy::prelude::*;

/// Best score seen so far, mirrored from the high-score file.
#[derive(Resource, Debug, Default)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Raise the best score if `score` beats it. Returns whether it did.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub score: u32,
    pub height: u32,
    pub new_record: bool,
}

/// Result of the current run. While `summary` is set the fixed-tick loop is
/// frozen.
#[derive(Resource, Debug, Default)]
pub struct RunOutcome {
    pub summary: Option<RunSummary>,
}

/// Run condition: true until the current run has ended
pub fn run_in_progress(outcome: Res<RunOutcome>) -> bool {
    outcome.summary.is_none()
}
