use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::phases::default_labels;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Author shown on the page header and in exports.
    #[serde(default = "default_author_name")]
    pub author_name: String,

    /// Where exports are saved. `None` means the user's download folder.
    #[serde(default)]
    pub export_directory: Option<String>,

    #[serde(default = "default_phase_interval_ms")]
    pub phase_interval_ms: u64,

    #[serde(default = "default_labels")]
    pub phase_labels: Vec<String>,

    #[serde(default)]
    pub live_on_start: bool,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_size() -> u32 {
    16
}

fn default_author_name() -> String {
    "Author".to_string()
}

fn default_phase_interval_ms() -> u64 {
    3000
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            author_name: default_author_name(),
            export_directory: None,
            phase_interval_ms: default_phase_interval_ms(),
            phase_labels: default_labels(),
            live_on_start: false,
        }
    }
}

impl AppSettings {
    /// Phase timer period. Zero is bumped to one millisecond.
    pub fn phase_interval(&self) -> Duration {
        Duration::from_millis(self.phase_interval_ms.max(1))
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    warn!(error = %e, "Could not write default settings");
                }
                default
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read settings, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Settings(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("kitab");
        path.push("settings.json");
        path
    }
}
