//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file; a missing or corrupt file
//! silently falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default settings file
pub const DEFAULT_PATH: &str = "settings.json";

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio (applied by the frontend) ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Headless demo ===
    /// Simulated seconds the demo mode runs before exiting
    pub demo_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            demo_secs: 45,
        }
    }
}

impl Settings {
    /// Load from a JSON file, defaulting silently when absent or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {:?}", path.as_ref());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file: {}", err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write back as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path.as_ref(), json) {
                    log::error!("Failed to save settings: {}", err);
                }
            }
            Err(err) => log::error!("Failed to serialize settings: {}", err),
        }
    }
}
