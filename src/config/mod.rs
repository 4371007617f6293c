//! Configuration management for wordquiz

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language the quizzed words are written in
    pub source_language: String,

    /// Language the user answers in
    pub target_language: String,

    /// Synonym lookup endpoint (Datamuse-compatible)
    pub synonym_endpoint: String,

    /// Translation endpoint (MyMemory-compatible)
    pub translation_endpoint: String,

    /// Upper bound on synonyms requested per word
    pub max_synonyms: usize,

    /// Pause after a judged answer before the next word, in milliseconds
    pub advance_delay_ms: u64,

    /// Per-request HTTP timeout, in seconds
    pub request_timeout_secs: u64,

    /// Alphabetical mode reorders and persists the list itself.
    /// When false the first word is picked without touching list order.
    pub alphabetical_sorts_in_place: bool,

    /// Selected theme name
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_language: "hy".to_string(),
            synonym_endpoint: "https://api.datamuse.com/words".to_string(),
            translation_endpoint: "https://api.mymemory.translated.net/get".to_string(),
            max_synonyms: 5,
            advance_delay_ms: 2000,
            request_timeout_secs: 15,
            alphabetical_sorts_in_place: true,
            theme: "Tokyo Night".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, writing defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "wordquiz").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "wordquiz").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Language pair in the `src|dst` form the translation service expects
    pub fn language_pair(&self) -> String {
        format!("{}|{}", self.source_language, self.target_language)
    }

    /// Delay before auto-advancing after a judgment
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    /// HTTP timeout for upstream lookups
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the active theme, falling back to the default for unknown names
    pub fn active_theme(&self) -> Theme {
        Theme::named(&self.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, using default", self.theme);
            Theme::default()
        })
    }
}
