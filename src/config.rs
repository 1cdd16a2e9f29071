//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/spatialdom/spatialdom.toml`
//! 3. Environment variables: `SPATIALDOM_*` prefix (`__` separates nesting,
//!    e.g. `SPATIALDOM_LAYOUT__CHILD_GAP=0.1`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::layout::LayoutParams;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spaces per indent level in markup output.
    pub indent_width: usize,
    /// Scene constants for the spatial layout engine.
    pub layout: LayoutParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: 2,
            layout: LayoutParams::default(),
        }
    }
}

impl Settings {
    /// Load settings through the full precedence ladder. A missing config
    /// file is fine; a malformed one is not.
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        let merged = builder
            .add_source(Environment::with_prefix("SPATIALDOM").separator("__"))
            .build()?;
        Ok(merged.try_deserialize()?)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spatialdom")
            .map(|dirs| dirs.config_dir().join("spatialdom.toml"))
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}
