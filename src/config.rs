use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_lesson")]
    pub default_lesson: String,
    #[serde(default = "default_lesson_dir")]
    pub lesson_dir: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_show_typed_words")]
    pub show_typed_words: bool,
}

fn default_lesson() -> String {
    "home-row".to_string()
}
fn default_lesson_dir() -> String {
    data_dir()
        .join("lessons")
        .to_string_lossy()
        .to_string()
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_show_typed_words() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_lesson: default_lesson(),
            lesson_dir: default_lesson_dir(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            show_typed_words: default_show_typed_words(),
        }
    }
}

/// Base directory for user lessons and the log file.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("levelup")
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("invalid config {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Rewrite the config file with every field filled in. A file that does
    /// not parse is left as it is.
    pub fn init_file(path: &Path) -> Result<()> {
        let config = Self::load_from(path)?;
        config.save_to(path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("levelup")
            .join("config.toml")
    }

    pub fn lesson_dir(&self) -> PathBuf {
        PathBuf::from(&self.lesson_dir)
    }

    /// Keep the event loop from spinning or stalling on a bad value.
    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.clamp(10, 1000)
    }
}
