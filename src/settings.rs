//! Game settings
//!
//! Read from an optional JSON file in the working directory. Every field has
//! a default, so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CAPACITY, DEFAULT_SCORE_FILE, SETTINGS_FILE};
use crate::error::{Error, Result};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the scoreboard is persisted
    pub score_file: PathBuf,
    /// Maximum number of records kept on the scoreboard
    pub capacity: usize,
    /// Clear the terminal before each round
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            capacity: DEFAULT_CAPACITY,
            clear_screen: true,
        }
    }
}

impl Settings {
    /// Load settings from the default settings file
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unusable
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_not_found() => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        if settings.capacity == 0 {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "capacity must be at least 1",
            )));
        }
        Ok(settings)
    }
}
