//! Core domain: the single persisted value, the best score.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum HighScoreError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl std::fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighScoreError::Io { path, source } => {
                write!(f, "High score file {}: IO error: {}", path.display(), source)
            }
            HighScoreError::Parse { path, source } => {
                write!(f, "High score file {}: parse error: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for HighScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighScoreError::Io { source, .. } => Some(source),
            HighScoreError::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// JSON file holding `{"high_score": N}`.
#[derive(Resource, Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored best score. A missing file means nothing was stored yet.
    pub fn load(&self) -> Result<u32, HighScoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(self.io_error(source)),
        };

        let file: HighScoreFile =
            serde_json::from_str(&contents).map_err(|source| HighScoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.high_score)
    }

    pub fn save(&self, high_score: u32) -> Result<(), HighScoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(&HighScoreFile { high_score }).map_err(
            |source| HighScoreError::Parse {
                path: self.path.clone(),
                source,
            },
        )?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> HighScoreError {
        HighScoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
