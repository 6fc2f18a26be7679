//! Persisted run configuration
//!
//! Read once at run start; changing either field externally restarts the
//! run (`Simulation::apply_settings`). Stored as a small JSON file next to
//! the executable's working directory.

use serde::{Deserialize, Serialize};

use crate::problems::Category;

/// Settings file name
const STORAGE_FILE: &str = "numfall_settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base difficulty tier for standard enemy problems
    pub difficulty_tier: usize,
    /// Optional operation-category filter; `None` draws from every category
    pub category: Option<Category>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty_tier: 0,
            category: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(STORAGE_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {STORAGE_FILE}");
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {STORAGE_FILE}: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(STORAGE_FILE, json) {
                    log::warn!("could not save {STORAGE_FILE}: {err}");
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}
