//! Answer checking
//!
//! An answer is accepted when, after trimming and lower-casing, it equals
//! the word's translation or the translation of one of its synonyms.
//! There is no fuzzy matching and punctuation is compared as-is.

use serde::Serialize;

/// Outcome of judging one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// How a feedback line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    /// Answer accepted
    Correct,
    /// Answer rejected
    Incorrect,
    /// Neutral information, e.g. a word was added
    Notice,
    /// Something failed (lookup, persistence)
    Error,
}

impl From<Verdict> for Tone {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Tone::Correct,
            Verdict::Incorrect => Tone::Incorrect,
        }
    }
}

/// A message for the user together with its tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub tone: Tone,
    pub message: String,
}

impl Feedback {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self { tone, message: message.into() }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(Tone::Notice, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Tone::Error, message)
    }
}

/// Result of [`judge`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub verdict: Verdict,
    pub message: String,
}

impl Judgment {
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    /// Feedback line for this judgment
    pub fn feedback(&self) -> Feedback {
        Feedback::new(self.verdict.into(), self.message.clone())
    }
}

/// Message shown for an accepted answer
pub const CORRECT_MESSAGE: &str = "Your translation is correct!";

/// Trim surrounding whitespace and fold case
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Judge a raw answer against the authoritative translation and synonym translations.
///
/// A rejection discloses the authoritative translation, never the synonyms.
pub fn judge<S: AsRef<str>>(
    raw_input: &str,
    authoritative: &str,
    synonym_translations: &[S],
) -> Judgment {
    let answer = normalize(raw_input);
    let accepted = answer == normalize(authoritative)
        || synonym_translations.iter().any(|candidate| answer == normalize(candidate.as_ref()));

    if accepted {
        Judgment { verdict: Verdict::Correct, message: CORRECT_MESSAGE.to_string() }
    } else {
        Judgment {
            verdict: Verdict::Incorrect,
            message: format!("Incorrect. The correct translation is: {}", authoritative),
        }
    }
}

/// Judgment for a round whose lookup failed: nothing can be accepted
pub fn judge_without_translation(word: &str) -> Judgment {
    Judgment {
        verdict: Verdict::Incorrect,
        message: format!("Incorrect. No translation is available for \"{}\".", word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SYNONYMS: [&str; 2] = ["patsy", "fallguy"];

    #[test]
    fn accepts_authoritative_with_case_and_whitespace() {
        let judgment = judge("Scapegoat ", "scapegoat", &SYNONYMS);
        assert!(judgment.accepted());
        assert_eq!(judgment.message, CORRECT_MESSAGE);
    }

    #[test]
    fn accepts_synonym_translation() {
        assert!(judge("patsy", "scapegoat", &SYNONYMS).accepted());
        assert!(judge("  FALLGUY", "scapegoat", &SYNONYMS).accepted());
    }

    #[test]
    fn rejection_discloses_authoritative_only() {
        let judgment = judge("nonsense", "scapegoat", &SYNONYMS);
        assert_eq!(judgment.verdict, Verdict::Incorrect);
        assert!(judgment.message.contains("scapegoat"));
        assert!(!judgment.message.contains("patsy"));
    }

    #[test]
    fn candidates_are_normalized_too() {
        assert!(judge("cat", "  Cat\n", &[] as &[&str]).accepted());
        assert!(judge("dog", "cat", &[" DOG "]).accepted());
    }

    #[test]
    fn no_partial_matching() {
        assert!(!judge("scape", "scapegoat", &SYNONYMS).accepted());
        assert!(!judge("fall guy", "scapegoat", &SYNONYMS).accepted());
        assert!(!judge("patsy!", "scapegoat", &SYNONYMS).accepted());
    }

    #[test]
    fn empty_answer_is_rejected() {
        assert!(!judge("   ", "scapegoat", &SYNONYMS).accepted());
    }

    #[test]
    fn non_latin_case_folding() {
        assert!(judge("ԲԱՐԵՎ", "բարեվ", &[] as &[&str]).accepted());
    }

    #[test]
    fn unavailable_translation_is_incorrect() {
        let judgment = judge_without_translation("foo");
        assert!(!judgment.accepted());
        assert!(judgment.message.contains("foo"));
        assert_eq!(judgment.feedback().tone, Tone::Incorrect);
    }

    proptest! {
        #[test]
        fn judging_is_idempotent(input in ".{0,20}", auth in "[a-z]{1,10}", syn in "[a-z]{1,10}") {
            let first = judge(&input, &auth, &[syn.as_str()]);
            let second = judge(&input, &auth, &[syn.as_str()]);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn padding_and_case_never_matter(auth in "[a-z]{1,12}", pad in "[ \t]{0,3}") {
            let input = format!("{}{}{}", pad, auth.to_uppercase(), pad);
            prop_assert!(judge(&input, &auth, &[] as &[&str]).accepted());
        }
    }
}
