//! Content domain: config and level files loaded once at startup.

mod data;
mod loader;
mod validation;


pub use data::*;
pub use loader::{ContentLoadError, load_config, load_level, parse_ron};
pub use validation::{ValidationError, validate_config, validate_level};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/data/config.ron";

/// Reads config.ron and the level it points at, inserting `GameConfig` and
/// `LevelDef` before any other plugin's startup systems run. Broken files are
/// reported and replaced by built-in defaults.
pub struct ContentPlugin {
    pub config_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = load_config_or_default(&self.config_path);
        let level = load_level_or_fallback(Path::new(&config.paths.level));

        app.insert_resource(config).insert_resource(level);
    }
}

pub fn load_config_or_default(path: &Path) -> GameConfig {
    let config = match load_config(path) {
        Ok(config) => {
            info!("Loaded game config from {}", path.display());
            config
        }
        Err(e) => {
            error!("{}; using built-in defaults", e);
            return GameConfig::default();
        }
    };

    let errors = validate_config(&config);
    if errors.is_empty() {
        return config;
    }
    for e in &errors {
        error!("Invalid config: {}", e);
    }
    warn!("Config has {} problem(s); using built-in defaults", errors.len());
    GameConfig::default()
}

pub fn load_level_or_fallback(path: &Path) -> LevelDef {
    let level = match load_level(path) {
        Ok(level) => level,
        Err(e) => {
            error!("{}; using the built-in fallback level", e);
            return LevelDef::fallback();
        }
    };

    let errors = validate_level(&level);
    if errors.is_empty() {
        info!(
            "Loaded level from {}: {} x {} tiles",
            path.display(),
            level.stride,
            level.rows()
        );
        return level;
    }
    for e in &errors {
        error!("Invalid level: {}", e);
    }
    warn!("Level has {} problem(s); using the built-in fallback level", errors.len());
    LevelDef::fallback()
}
