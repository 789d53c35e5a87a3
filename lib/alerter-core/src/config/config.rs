use crate::paths;
use log::{trace, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine default config directory")]
    NoConfigDir,
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// How long an alert stays on screen before hiding itself, in milliseconds
    pub default_duration_ms: u64,
    /// The duration of the fade used when an alert is replaced or hidden externally
    pub removal_fade_ms: u32,
    /// The duration of the enter animation in milliseconds
    pub enter_animation_ms: u32,
    /// The duration of the exit animation in milliseconds
    pub exit_animation_ms: u32,
    /// Whether new alerts vibrate when shown
    pub vibration: bool,
    /// Whether new alerts can be dismissed by the user
    pub dismissible: bool,
    /// Whether the icon pulses while the alert is visible
    pub icon_pulse: bool,
    /// Whether the icon is shown at all
    pub show_icon: bool,
    /// Text size of alert buttons, in scaled pixels
    pub button_text_size: f32,
}

static CURRENT_CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

impl Config {
    pub fn default_config_path() -> Option<PathBuf> {
        paths::default_config_path()
    }

    pub fn load(config_path: Option<&Path>, save: bool) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path().ok_or(ConfigError::NoConfigDir)?,
        };

        if !path.exists() {
            Self::create_default_config_file(&path)?;
            trace!("Created default config file at: {}", path.display());
        }

        let contents = fs::read_to_string(&path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;
        config.config_path = Some(path.clone());

        // Fills in any fields missing from an older file
        if save {
            if let Err(e) = config.save_to_file(&path) {
                warn!("Failed to update config file with missing fields: {e}");
            }
        }

        Ok(config)
    }

    fn create_default_config_file(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        Config::default().save_to_file(path)
    }

    pub fn set_config(config: Config) {
        let mut global_config = CURRENT_CONFIG
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *global_config = config;
    }

    pub fn current() -> RwLockReadGuard<'static, Config> {
        CURRENT_CONFIG
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn update<F>(f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut config = CURRENT_CONFIG
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut config);
    }

    pub fn reset() {
        Self::set_config(Config::default());
    }

    pub fn default_duration() -> Duration {
        Duration::from_millis(Self::current().default_duration_ms)
    }

    pub fn removal_fade() -> Duration {
        Duration::from_millis(Self::current().removal_fade_ms as u64)
    }

    pub fn enter_animation() -> Duration {
        Duration::from_millis(Self::current().enter_animation_ms as u64)
    }

    pub fn exit_animation() -> Duration {
        Duration::from_millis(Self::current().exit_animation_ms as u64)
    }

    pub fn vibration() -> bool {
        Self::current().vibration
    }

    pub fn dismissible() -> bool {
        Self::current().dismissible
    }

    pub fn icon_pulse() -> bool {
        Self::current().icon_pulse
    }

    pub fn show_icon() -> bool {
        Self::current().show_icon
    }

    pub fn button_text_size() -> f32 {
        Self::current().button_text_size
    }

    /// Save the current config to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let header = "# Alerter Configuration File\n# Defaults applied to every new alert.\n\n";
        let serialized_config = serde_yaml::to_string(self)?;
        fs::write(path, format!("{}{}", header, serialized_config))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            default_duration_ms: 3000,
            removal_fade_ms: 300,
            enter_animation_ms: 400,
            exit_animation_ms: 400,
            vibration: true,
            dismissible: true,
            icon_pulse: true,
            show_icon: true,
            button_text_size: 14.0,
        }
    }
}
