//! Durable storage for the word list and the selected iteration mode

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::IterationMode;

/// Where the word list and mode live between runs.
///
/// Calls are synchronous and last-write-wins; there is no transaction
/// spanning `save` and `save_mode`.
pub trait WordStore: Send {
    /// Load the stored words in their stored order
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored words
    fn save(&mut self, words: &[String]) -> Result<()>;

    /// Load the stored mode, falling back to the default
    fn load_mode(&self) -> Result<IterationMode>;

    /// Replace the stored mode
    fn save_mode(&mut self, mode: IterationMode) -> Result<()>;
}

/// On-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WordFile {
    #[serde(default)]
    words: Vec<String>,
    /// Kept as text so an unknown value does not make the whole file unreadable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
}

/// Word store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonWordStore {
    path: PathBuf,
}

impl JsonWordStore {
    /// File name inside the data directory
    pub const FILE_NAME: &'static str = "words.json";

    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store inside the given data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    fn read(&self) -> Result<WordFile> {
        if !self.path.exists() {
            return Ok(WordFile::default());
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read word list from {:?}", self.path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {:?}", self.path))
    }

    fn write(&self, file: &WordFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(file).with_context(|| "Failed to serialize word list")?;

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write word list to {:?}", self.path))?;

        Ok(())
    }
}

impl WordStore for JsonWordStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.read()?.words)
    }

    fn save(&mut self, words: &[String]) -> Result<()> {
        let mut file = self.read()?;
        file.words = words.to_vec();
        self.write(&file)
    }

    fn load_mode(&self) -> Result<IterationMode> {
        let file = self.read()?;
        let Some(raw) = file.mode else {
            return Ok(IterationMode::default());
        };

        Ok(IterationMode::parse(&raw).unwrap_or_else(|| {
            tracing::warn!("Unknown stored mode {:?}, using {}", raw, IterationMode::default());
            IterationMode::default()
        }))
    }

    fn save_mode(&mut self, mode: IterationMode) -> Result<()> {
        let mut file = self.read()?;
        file.mode = Some(mode.as_str().to_string());
        self.write(&file)
    }
}

/// Volatile store, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryWordStore {
    pub words: Vec<String>,
    pub mode: IterationMode,
    /// Number of `save` calls seen
    pub saves: usize,
}

impl MemoryWordStore {
    /// Seed the store with words
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect(), ..Default::default() }
    }
}

impl WordStore for MemoryWordStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }

    fn save(&mut self, words: &[String]) -> Result<()> {
        self.words = words.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_mode(&self) -> Result<IterationMode> {
        Ok(self.mode)
    }

    fn save_mode(&mut self, mode: IterationMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }
}
