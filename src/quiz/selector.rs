//! Picking the next word to ask

use rand::Rng;

use crate::words::IterationMode;

/// A chosen word and the cursor to use for the following pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub word: String,
    pub cursor: usize,
    /// The list itself was reordered and needs saving
    pub reordered: bool,
}

/// Word selection policy
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    /// Alphabetical mode sorts the caller's list instead of just finding its minimum
    pub sort_in_place: bool,
}

impl Default for Selector {
    fn default() -> Self {
        Self { sort_in_place: true }
    }
}

impl Selector {
    pub fn new(sort_in_place: bool) -> Self {
        Self { sort_in_place }
    }

    /// Pick the next word, or `None` for an empty list.
    ///
    /// Alphabetical mode with `sort_in_place` sorts `words` itself; the
    /// new order is visible to the caller and reported via `reordered`.
    /// The sequential cursor is only read and advanced in sequential mode;
    /// a cursor left past the end by a deletion restarts at the front.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        words: &mut [String],
        mode: IterationMode,
        cursor: usize,
        rng: &mut R,
    ) -> Option<Pick> {
        if words.is_empty() {
            return None;
        }

        let pick = match mode {
            IterationMode::Random => {
                let index = rng.gen_range(0..words.len());
                Pick { word: words[index].clone(), cursor, reordered: false }
            }
            IterationMode::Alphabetical if self.sort_in_place => {
                let reordered = !words.is_sorted();
                if reordered {
                    words.sort();
                }
                Pick { word: words[0].clone(), cursor, reordered }
            }
            IterationMode::Alphabetical => {
                let first = words.iter().min()?;
                Pick { word: first.clone(), cursor, reordered: false }
            }
            IterationMode::Sequential => {
                let index = if cursor < words.len() { cursor } else { 0 };
                let next = if index + 1 < words.len() { index + 1 } else { 0 };
                Pick { word: words[index].clone(), cursor: next, reordered: false }
            }
        };

        Some(pick)
    }
}
