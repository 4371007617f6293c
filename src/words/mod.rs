//! The vocabulary list and how it is iterated

pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::{JsonWordStore, MemoryWordStore, WordStore};

/// Reasons a word is refused at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Nothing left after trimming
    #[error("A word cannot be empty")]
    Empty,
}

/// Validate user-entered text as a word: trimmed, non-empty.
///
/// Duplicates are not checked here; the list deliberately allows them.
pub fn parse_word(raw: &str) -> Result<String, WordError> {
    let word = raw.trim();
    if word.is_empty() { Err(WordError::Empty) } else { Ok(word.to_string()) }
}

/// How the next word is chosen from the list
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IterationMode {
    /// Uniformly random pick
    #[default]
    Random,
    /// Walk the list in insertion order, wrapping at the end
    Sequential,
    /// Sort the list and always take the first entry
    Alphabetical,
}

impl IterationMode {
    /// Every mode, in the order they are cycled through
    pub fn all() -> &'static [IterationMode] {
        &[Self::Random, Self::Sequential, Self::Alphabetical]
    }

    /// Identifier used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
            Self::Alphabetical => "alphabetical",
        }
    }

    /// Human-readable name for the header
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Sequential => "Sequential",
            Self::Alphabetical => "Alphabetical",
        }
    }

    /// The mode after this one when cycling
    pub fn next(&self) -> Self {
        match self {
            Self::Random => Self::Sequential,
            Self::Sequential => Self::Alphabetical,
            Self::Alphabetical => Self::Random,
        }
    }

    /// Parse a mode name (case-insensitive, with short aliases)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" | "rand" | "r" => Some(Self::Random),
            "sequential" | "seq" | "s" => Some(Self::Sequential),
            "alphabetical" | "alpha" | "abc" | "a" => Some(Self::Alphabetical),
            _ => None,
        }
    }
}

impl fmt::Display for IterationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IterationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("Unknown mode: {}. Options: random, sequential, alphabetical", s)
        })
    }
}
