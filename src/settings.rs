use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use moveit_data::EncodeOptions;
use moveit_data::autotile::{DEFAULT_WALL, MAX_HEIGHT, MAX_WIDTH};
use serde::Deserialize;

/// Looked up as `moveit.toml` in the working directory.
const DEFAULT_CONFIG_NAME: &str = "moveit";
const ENV_PREFIX: &str = "MOVEIT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub levels: LevelSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelSettings {
    /// Grid character that gets autotiled.
    pub wall: char,
    pub max_width: usize,
    pub max_height: usize,
}

impl LevelSettings {
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            wall: self.wall,
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }
}

impl Settings {
    /// Built-in defaults, then the settings file, then `MOVEIT_*` variables
    /// (`MOVEIT_LEVELS__MAX_WIDTH=24`).
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::with_file(path)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("levels.wall", DEFAULT_WALL.to_string())?
            .set_default("levels.max_width", MAX_WIDTH as i64)?
            .set_default("levels.max_height", MAX_HEIGHT as i64)
    }

    fn with_file(path: Option<&Path>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        Ok(Self::defaults()?.add_source(file))
    }
}
