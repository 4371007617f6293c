//! A single quiz round

use std::fmt;

use super::judge::{Feedback, Verdict};
use crate::translate::Translations;

/// Identifies a round; every asynchronous result is tagged with one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(u64);

impl RoundId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the quiz is in its cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No words, nothing to ask
    #[default]
    Idle,
    /// Word picked, lookup in flight
    Fetching,
    /// Lookup done (or failed), waiting for an answer
    AwaitingAnswer,
    /// Answer judged, waiting to move on
    Judged,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "loading",
            Self::AwaitingAnswer => "your turn",
            Self::Judged => "judged",
        }
    }
}

/// State of the word currently being asked
#[derive(Debug, Clone)]
pub struct QuizRound {
    pub id: RoundId,
    pub word: String,
    pub phase: Phase,
    /// Present once the lookup succeeded
    pub translations: Option<Translations>,
    /// Set when the lookup failed; the round can then only be answered wrong
    pub fetch_error: Option<String>,
    /// The answer as submitted
    pub answer: Option<String>,
    pub verdict: Option<Verdict>,
    pub feedback: Option<Feedback>,
    /// The translation is shown without ending the round
    pub revealed: bool,
}

impl QuizRound {
    pub fn new(id: RoundId, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            phase: Phase::Fetching,
            translations: None,
            fetch_error: None,
            answer: None,
            verdict: None,
            feedback: None,
            revealed: false,
        }
    }

    /// Lookup failed, there is nothing to compare answers against
    pub fn is_degraded(&self) -> bool {
        self.phase != Phase::Fetching && self.translations.is_none()
    }

    /// Authoritative translation, if it was fetched
    pub fn authoritative(&self) -> Option<&str> {
        self.translations.as_ref().map(|t| t.authoritative.as_str())
    }
}
