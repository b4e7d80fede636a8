//! Configuration management module.
//!
//! Settings live in `clicker_config.json` next to the executable. Every field
//! is optional; anything missing falls back to the built-in defaults.

use crate::utils::file_helper;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "clicker_config.json";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
    #[serde(default = "default_image_paths")]
    pub image_paths: [PathBuf; 2],
    #[serde(default = "default_button_size")]
    pub button_size: f32,
    #[serde(default = "default_hint_text")]
    pub hint_text: String,
    #[serde(default = "default_exit_prompt")]
    pub exit_prompt: String,
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
    #[serde(default = "default_welcome_duration_ms")]
    pub welcome_duration_ms: u64,
}

fn default_window_title() -> String {
    "Juego Clicker".to_string()
}

fn default_window_size() -> [f32; 2] {
    [300.0, 200.0]
}

fn default_state_file() -> PathBuf {
    PathBuf::from("clicker_state.txt")
}

fn default_image_paths() -> [PathBuf; 2] {
    [
        PathBuf::from("images/click_a.png"),
        PathBuf::from("images/click_b.png"),
    ]
}

fn default_button_size() -> f32 {
    100.0
}

fn default_hint_text() -> String {
    "Click here!".to_string()
}

fn default_exit_prompt() -> String {
    "Are you sure you want to exit?".to_string()
}

fn default_welcome_message() -> String {
    "You're back!".to_string()
}

fn default_welcome_duration_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            window_size: default_window_size(),
            state_file: default_state_file(),
            image_paths: default_image_paths(),
            button_size: default_button_size(),
            hint_text: default_hint_text(),
            exit_prompt: default_exit_prompt(),
            welcome_message: default_welcome_message(),
            welcome_duration_ms: default_welcome_duration_ms(),
        }
    }
}

/// Configuration manager for loading config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(file_helper::exe_directory().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the config file path.
    pub fn config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load(&self) -> Config {
        match self.try_load() {
            Ok(Some(config)) => {
                log::info!("Loaded configuration from {}", self.config_file_path().display());
                config
            }
            Ok(None) => Config::default(),
            Err(e) => {
                log::warn!("Ignoring configuration: {e:#}");
                Config::default()
            }
        }
    }

    fn try_load(&self) -> anyhow::Result<Option<Config>> {
        if !file_helper::file_exists(&self.config_path) {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("reading {}", self.config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.config_path.display()))?;

        Ok(Some(config))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
