//! The quiz state machine
//!
//! `QuizSession` owns the word list, the iteration mode, the sequential
//! cursor and the current round. It never touches the network or timers
//! itself: every operation returns the [`Effect`]s the driver must carry
//! out, and asynchronous results come back as [`SessionEvent`]s tagged
//! with the round they belong to.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::judge::{Feedback, Tone, judge, judge_without_translation};
use super::round::{Phase, QuizRound, RoundId};
use super::selector::Selector;
use crate::translate::{FetchError, Translations};
use crate::words::{IterationMode, WordError, WordStore, parse_word};

/// Message shown when a lookup fails
pub const FETCH_ERROR_MESSAGE: &str = "Error while fetching translation or synonyms.";

/// Work the driver must perform on behalf of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Look up translations for the round's word
    Fetch { round: RoundId, word: String },
    /// Abandon any lookup still in flight
    CancelFetch,
    /// Deliver `AdvanceDue` for this round after the configured delay
    ScheduleAdvance { round: RoundId },
    /// Drop a pending auto-advance
    CancelAdvance,
}

/// Asynchronous results fed back into the session
#[derive(Debug)]
pub enum SessionEvent {
    Fetched { round: RoundId, result: Result<Translations, FetchError> },
    AdvanceDue { round: RoundId },
}

impl SessionEvent {
    pub fn round(&self) -> RoundId {
        match self {
            Self::Fetched { round, .. } | Self::AdvanceDue { round } => *round,
        }
    }
}

/// Quiz state for one user
pub struct QuizSession {
    store: Box<dyn WordStore>,
    words: Vec<String>,
    mode: IterationMode,
    cursor: usize,
    selector: Selector,
    rng: StdRng,
    last_round: RoundId,
    round: Option<QuizRound>,
    notice: Option<Feedback>,
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("words", &self.words)
            .field("mode", &self.mode)
            .field("cursor", &self.cursor)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}

impl QuizSession {
    /// Load the word list and mode from `store`
    pub fn open(store: Box<dyn WordStore>, selector: Selector) -> Result<Self> {
        let words = store.load()?;
        let mode = store.load_mode()?;
        tracing::info!("Loaded {} words, mode {}", words.len(), mode);

        Ok(Self {
            store,
            words,
            mode,
            cursor: 0,
            selector,
            rng: StdRng::from_entropy(),
            last_round: RoundId::new(0),
            round: None,
            notice: None,
        })
    }

    /// Replace the random source (deterministic tests)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn mode(&self) -> IterationMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    pub fn current_word(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.word.as_str())
    }

    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Idle, |r| r.phase)
    }

    /// A lookup is in flight
    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Fetching
    }

    /// Session-level message (word added, save failed, ...)
    pub fn notice(&self) -> Option<&Feedback> {
        self.notice.as_ref()
    }

    /// The line to show under the quiz: round feedback wins over notices
    pub fn feedback(&self) -> Option<&Feedback> {
        self.round.as_ref().and_then(|r| r.feedback.as_ref()).or(self.notice.as_ref())
    }

    /// Pick the first word
    pub fn start(&mut self) -> Vec<Effect> {
        self.pick_next()
    }

    /// Append a word. Starts a round only when none exists yet.
    pub fn add_word(&mut self, raw: &str) -> Result<Vec<Effect>, WordError> {
        let word = parse_word(raw)?;
        self.words.push(word.clone());
        tracing::info!("Added {:?} ({} words)", word, self.words.len());
        self.persist_words();

        let effects = if self.round.is_none() { self.pick_next() } else { Vec::new() };
        if !self.notice.as_ref().is_some_and(|n| n.tone == Tone::Error) {
            self.notice =
                Some(Feedback::notice(format!("The word \"{}\" has been added to the list.", word)));
        }
        Ok(effects)
    }

    /// Remove every entry equal to `word`. Re-picks only if it was being asked.
    pub fn delete_word(&mut self, word: &str) -> Vec<Effect> {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        let removed = before - self.words.len();

        if removed == 0 {
            tracing::debug!("Delete of {:?} matched nothing", word);
            self.notice = Some(Feedback::error(format!("\"{}\" is not in the list.", word)));
            return Vec::new();
        }

        tracing::info!("Removed {} entr(ies) of {:?}", removed, word);
        self.persist_words();

        if self.current_word() == Some(word) {
            self.pick_next()
        } else {
            Vec::new()
        }
    }

    /// Remove the word currently being asked
    pub fn delete_current(&mut self) -> Vec<Effect> {
        match self.current_word().map(str::to_string) {
            Some(word) => self.delete_word(&word),
            None => Vec::new(),
        }
    }

    /// Switch iteration mode and immediately pick with it.
    ///
    /// The sequential cursor is kept, so switching back into sequential
    /// mode resumes wherever it last stopped.
    pub fn set_mode(&mut self, mode: IterationMode) -> Vec<Effect> {
        if mode == self.mode {
            return Vec::new();
        }

        tracing::info!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
        if let Err(e) = self.store.save_mode(mode) {
            tracing::warn!("Failed to save mode: {:#}", e);
            self.notice = Some(Feedback::error(format!("Could not save mode: {}", e)));
        }

        self.pick_next()
    }

    /// Judge an answer for the current round.
    ///
    /// Ignored unless the round is waiting for an answer.
    pub fn submit(&mut self, raw_answer: &str) -> Vec<Effect> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };
        if round.phase != Phase::AwaitingAnswer {
            tracing::debug!("Ignoring answer in phase {:?}", round.phase);
            return Vec::new();
        }

        let judgment = match &round.translations {
            Some(t) => judge(raw_answer, &t.authoritative, &t.synonym_translations),
            None => judge_without_translation(&round.word),
        };
        tracing::debug!("Round {} judged {:?}", round.id, judgment.verdict);

        round.answer = Some(raw_answer.to_string());
        round.verdict = Some(judgment.verdict);
        round.feedback = Some(judgment.feedback());
        round.phase = Phase::Judged;

        vec![Effect::ScheduleAdvance { round: round.id }]
    }

    /// Show the translation without ending the round
    pub fn reveal(&mut self) -> bool {
        match self.round.as_mut() {
            // Nothing to show when the lookup failed
            Some(round)
                if round.phase == Phase::AwaitingAnswer && round.translations.is_some() =>
            {
                round.revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Apply an asynchronous result. Results for any round but the current one are dropped.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        let current = self.round.as_ref().map(|r| (r.id, r.phase));
        if current.map(|(id, _)| id) != Some(event.round()) {
            tracing::debug!("Dropping stale event for round {}", event.round());
            return Vec::new();
        }

        match (event, current) {
            (SessionEvent::Fetched { result, .. }, Some((_, Phase::Fetching))) => {
                if let Some(round) = self.round.as_mut() {
                    match result {
                        Ok(translations) => {
                            tracing::debug!(
                                "Round {} ready with {} accepted answers",
                                round.id,
                                1 + translations.synonym_translations.len()
                            );
                            round.translations = Some(translations);
                        }
                        Err(e) => {
                            tracing::warn!("Lookup for {:?} failed: {}", round.word, e);
                            round.fetch_error = Some(e.to_string());
                            round.feedback = Some(Feedback::error(FETCH_ERROR_MESSAGE));
                        }
                    }
                    round.phase = Phase::AwaitingAnswer;
                }
                Vec::new()
            }
            (SessionEvent::AdvanceDue { .. }, Some((_, Phase::Judged))) => self.pick_next(),
            (event, _) => {
                tracing::debug!("Ignoring {:?} in phase {:?}", event, self.phase());
                Vec::new()
            }
        }
    }

    /// Start a new round (or go idle), superseding whatever was in progress
    fn pick_next(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::CancelAdvance, Effect::CancelFetch];
        self.notice = None;

        let Some(pick) = self.selector.pick(&mut self.words, self.mode, self.cursor, &mut self.rng)
        else {
            tracing::debug!("Word list empty, going idle");
            self.round = None;
            return effects;
        };

        self.cursor = pick.cursor;
        if pick.reordered {
            self.persist_words();
        }

        self.last_round = self.last_round.next();
        tracing::debug!("Round {}: {:?} ({})", self.last_round, pick.word, self.mode);
        self.round = Some(QuizRound::new(self.last_round, pick.word.clone()));
        effects.push(Effect::Fetch { round: self.last_round, word: pick.word });
        effects
    }

    fn persist_words(&mut self) {
        if let Err(e) = self.store.save(&self.words) {
            tracing::warn!("Failed to save word list: {:#}", e);
            self.notice = Some(Feedback::error(format!("Could not save word list: {}", e)));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::quiz::judge::Verdict;
    use crate::words::MemoryWordStore;
    use pretty_assertions::assert_eq;

    /// Store whose contents stay observable after the session takes ownership
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<MemoryWordStore>>);

    impl WordStore for SharedStore {
        fn load(&self) -> Result<Vec<String>> {
            self.0.lock().unwrap().load()
        }
        fn save(&mut self, words: &[String]) -> Result<()> {
            self.0.lock().unwrap().save(words)
        }
        fn load_mode(&self) -> Result<IterationMode> {
            self.0.lock().unwrap().load_mode()
        }
        fn save_mode(&mut self, mode: IterationMode) -> Result<()> {
            self.0.lock().unwrap().save_mode(mode)
        }
    }

    struct BrokenStore;

    impl WordStore for BrokenStore {
        fn load(&self) -> Result<Vec<String>> {
            Ok(vec!["a".into()])
        }
        fn save(&mut self, _words: &[String]) -> Result<()> {
            anyhow::bail!("disk full")
        }
        fn load_mode(&self) -> Result<IterationMode> {
            Ok(IterationMode::Sequential)
        }
        fn save_mode(&mut self, _mode: IterationMode) -> Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn session(words: &[&str], mode: IterationMode) -> (QuizSession, SharedStore) {
        let mut inner = MemoryWordStore::with_words(words.iter().copied());
        inner.mode = mode;
        let store = SharedStore(Arc::new(Mutex::new(inner)));
        let session = QuizSession::open(Box::new(store.clone()), Selector::default())
            .unwrap()
            .with_rng(StdRng::seed_from_u64(1));
        (session, store)
    }

    fn translations(auth: &str, synonyms: &[&str]) -> Translations {
        Translations {
            authoritative: auth.to_string(),
            synonyms: synonyms.iter().map(|s| format!("src-{}", s)).collect(),
            synonym_translations: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn fetched_ok(session: &mut QuizSession, auth: &str, synonyms: &[&str]) {
        let round = session.round().unwrap().id;
        session.handle(SessionEvent::Fetched { round, result: Ok(translations(auth, synonyms)) });
    }

    fn fetch_targets(effects: &[Effect]) -> Vec<String> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Fetch { word, .. } => Some(word.clone()),
                _ => None,
            })
            .collect()
    }

    fn upstream_error() -> FetchError {
        FetchError::Api { service: "mymemory", status: 500, message: "down".into() }
    }

    #[test]
    fn empty_session_stays_idle() {
        let (mut session, _) = session(&[], IterationMode::Random);
        let effects = session.start();

        assert_eq!(session.phase(), Phase::Idle);
        assert!(fetch_targets(&effects).is_empty());
    }

    #[test]
    fn first_word_leaves_idle_with_one_fetch() {
        let (mut session, store) = session(&[], IterationMode::Random);
        session.start();

        let effects = session.add_word("hello").unwrap();

        assert_eq!(fetch_targets(&effects), vec!["hello".to_string()]);
        assert_eq!(session.phase(), Phase::Fetching);
        assert_eq!(store.0.lock().unwrap().words, vec!["hello".to_string()]);
        assert_eq!(
            session.notice().map(|n| n.message.as_str()),
            Some("The word \"hello\" has been added to the list.")
        );
    }

    #[test]
    fn adding_during_a_round_does_not_repick() {
        let (mut session, _) = session(&["a"], IterationMode::Sequential);
        session.start();
        let round = session.round().unwrap().id;

        let effects = session.add_word("b").unwrap();

        assert!(effects.is_empty());
        assert_eq!(session.round().unwrap().id, round);
        assert_eq!(session.words(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn blank_word_is_rejected_without_side_effects() {
        let (mut session, store) = session(&[], IterationMode::Random);
        session.start();

        assert_eq!(session.add_word("   "), Err(WordError::Empty));
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(store.0.lock().unwrap().saves, 0);
    }

    #[test]
    fn duplicates_are_allowed() {
        let (mut session, _) = session(&["echo"], IterationMode::Random);
        session.add_word("echo").unwrap();
        assert_eq!(session.words().len(), 2);
    }

    #[test]
    fn fetch_success_awaits_answer() {
        let (mut session, _) = session(&["scapegoat"], IterationMode::Random);
        session.start();
        fetched_ok(&mut session, "scapegoat", &["patsy"]);

        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.round().unwrap().authoritative(), Some("scapegoat"));
    }

    #[test]
    fn correct_answer_is_judged_and_schedules_advance() {
        let (mut session, _) = session(&["scapegoat"], IterationMode::Random);
        session.start();
        fetched_ok(&mut session, "scapegoat", &["patsy", "fallguy"]);
        let round = session.round().unwrap().id;

        let effects = session.submit("Patsy ");

        assert_eq!(effects, vec![Effect::ScheduleAdvance { round }]);
        assert_eq!(session.phase(), Phase::Judged);
        assert_eq!(session.round().unwrap().verdict, Some(Verdict::Correct));
        assert_eq!(session.feedback().unwrap().tone, Tone::Correct);
    }

    #[test]
    fn wrong_answer_discloses_translation() {
        let (mut session, _) = session(&["scapegoat"], IterationMode::Random);
        session.start();
        fetched_ok(&mut session, "scapegoat", &["patsy"]);

        session.submit("nonsense");

        let feedback = session.feedback().unwrap();
        assert_eq!(feedback.tone, Tone::Incorrect);
        assert!(feedback.message.contains("scapegoat"));
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();

        assert!(session.submit("x").is_empty());
        assert_eq!(session.phase(), Phase::Fetching);
    }

    #[test]
    fn second_submit_after_judgment_is_ignored() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();
        fetched_ok(&mut session, "a", &[]);
        session.submit("a");

        assert!(session.submit("b").is_empty());
        assert_eq!(session.round().unwrap().answer.as_deref(), Some("a"));
    }

    #[test]
    fn failed_fetch_degrades_the_round() {
        let (mut session, _) = session(&["foo"], IterationMode::Random);
        session.start();
        let round = session.round().unwrap().id;

        session.handle(SessionEvent::Fetched { round, result: Err(upstream_error()) });

        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert!(session.round().unwrap().is_degraded());
        assert_eq!(session.feedback().unwrap().message, FETCH_ERROR_MESSAGE);
        assert_eq!(session.feedback().unwrap().tone, Tone::Error);

        // Whatever is typed, it cannot be right
        session.submit("foo");
        assert_eq!(session.round().unwrap().verdict, Some(Verdict::Incorrect));
    }

    #[test]
    fn reveal_only_while_awaiting_answer() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();
        assert!(!session.reveal());

        fetched_ok(&mut session, "a", &[]);
        assert!(session.reveal());
        assert!(session.round().unwrap().revealed);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn nothing_to_reveal_after_failed_fetch() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();
        let round = session.round().unwrap().id;
        session.handle(SessionEvent::Fetched { round, result: Err(upstream_error()) });

        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert!(!session.reveal());
        assert!(!session.round().unwrap().revealed);
    }

    #[test]
    fn advance_after_judgment_picks_next_word() {
        let (mut session, _) = session(&["a", "b"], IterationMode::Sequential);
        session.start();
        fetched_ok(&mut session, "x", &[]);
        session.submit("x");
        let round = session.round().unwrap().id;

        let effects = session.handle(SessionEvent::AdvanceDue { round });

        assert_eq!(fetch_targets(&effects), vec!["b".to_string()]);
        let next = session.round().unwrap();
        assert!(next.id > round);
        assert!(!next.revealed);
        assert!(next.feedback.is_none());
    }

    #[test]
    fn advance_before_judgment_is_ignored() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();
        let round = session.round().unwrap().id;

        assert!(session.handle(SessionEvent::AdvanceDue { round }).is_empty());
        assert_eq!(session.round().unwrap().id, round);
    }

    #[test]
    fn sequential_rounds_cycle_through_the_list() {
        let (mut session, _) = session(&["a", "b", "c"], IterationMode::Sequential);
        let mut asked = Vec::new();
        session.start();

        for _ in 0..6 {
            asked.push(session.current_word().unwrap().to_string());
            fetched_ok(&mut session, "t", &[]);
            session.submit("t");
            let round = session.round().unwrap().id;
            session.handle(SessionEvent::AdvanceDue { round });
        }

        assert_eq!(asked, ["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn deleting_current_word_repicks() {
        let (mut session, store) = session(&["a", "b"], IterationMode::Sequential);
        session.start();
        assert_eq!(session.current_word(), Some("a"));

        let effects = session.delete_word("a");

        assert!(effects.contains(&Effect::CancelAdvance));
        assert!(effects.contains(&Effect::CancelFetch));
        assert_eq!(fetch_targets(&effects), vec!["b".to_string()]);
        assert_eq!(store.0.lock().unwrap().words, vec!["b".to_string()]);
    }

    #[test]
    fn deleting_other_word_leaves_round_alone() {
        let (mut session, _) = session(&["a", "b"], IterationMode::Sequential);
        session.start();
        fetched_ok(&mut session, "x", &[]);
        let round = session.round().unwrap().id;

        let effects = session.delete_word("b");

        assert!(effects.is_empty());
        assert_eq!(session.round().unwrap().id, round);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn deleting_current_during_judgment_interrupts_advance() {
        let (mut session, _) = session(&["a", "b"], IterationMode::Sequential);
        session.start();
        fetched_ok(&mut session, "x", &[]);
        session.submit("x");
        let judged = session.round().unwrap().id;

        let effects = session.delete_current();
        assert_eq!(effects[0], Effect::CancelAdvance);

        // The old timer firing late must not skip the new round
        assert!(session.handle(SessionEvent::AdvanceDue { round: judged }).is_empty());
        assert_eq!(session.current_word(), Some("b"));
        assert_eq!(session.phase(), Phase::Fetching);
    }

    #[test]
    fn deleting_last_word_goes_idle() {
        let (mut session, _) = session(&["solo"], IterationMode::Random);
        session.start();

        let effects = session.delete_current();

        assert!(fetch_targets(&effects).is_empty());
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.current_word().is_none());
    }

    #[test]
    fn deleting_removes_every_duplicate() {
        let (mut session, _) = session(&["a", "b", "a"], IterationMode::Sequential);
        session.start();
        session.delete_word("a");
        assert_eq!(session.words(), ["b".to_string()]);
    }

    #[test]
    fn deleting_unknown_word_reports_it() {
        let (mut session, store) = session(&["a"], IterationMode::Random);
        session.start();

        assert!(session.delete_word("zzz").is_empty());
        assert_eq!(session.notice().unwrap().tone, Tone::Error);
        assert_eq!(store.0.lock().unwrap().saves, 0);
    }

    #[test]
    fn shrinking_list_clamps_cursor() {
        let (mut session, _) = session(&["a", "b", "c"], IterationMode::Sequential);
        session.start(); // a, cursor -> 1
        fetched_ok(&mut session, "x", &[]);
        session.submit("x");
        let round = session.round().unwrap().id;
        session.handle(SessionEvent::AdvanceDue { round }); // b, cursor -> 2
        fetched_ok(&mut session, "x", &[]);

        session.delete_word("c");
        session.delete_current(); // removes b, cursor 2 is past the end

        assert_eq!(session.current_word(), Some("a"));
    }

    #[test]
    fn mode_change_persists_and_repicks() {
        let (mut session, store) = session(&["banana", "apple"], IterationMode::Random);
        session.start();

        let effects = session.set_mode(IterationMode::Alphabetical);

        assert_eq!(fetch_targets(&effects), vec!["apple".to_string()]);
        let stored = store.0.lock().unwrap();
        assert_eq!(stored.mode, IterationMode::Alphabetical);
        assert_eq!(stored.words, vec!["apple".to_string(), "banana".to_string()]);
    }

    #[test]
    fn same_mode_is_a_no_op() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();
        assert!(session.set_mode(IterationMode::Random).is_empty());
    }

    #[test]
    fn cursor_survives_mode_switches() {
        let (mut session, _) = session(&["a", "b", "c"], IterationMode::Sequential);
        session.start(); // a, cursor -> 1

        session.set_mode(IterationMode::Random);
        session.set_mode(IterationMode::Sequential);

        assert_eq!(session.current_word(), Some("b"));
    }

    #[test]
    fn stale_fetch_cannot_touch_the_new_round() {
        let (mut session, _) = session(&["foo", "bar"], IterationMode::Sequential);
        session.start();
        let foo_round = session.round().unwrap().id;
        assert_eq!(session.current_word(), Some("foo"));

        session.set_mode(IterationMode::Random);
        session.set_mode(IterationMode::Sequential);
        assert_eq!(session.current_word(), Some("bar"));

        session.handle(SessionEvent::Fetched { round: foo_round, result: Err(upstream_error()) });

        let round = session.round().unwrap();
        assert_eq!(round.word, "bar");
        assert_eq!(round.phase, Phase::Fetching);
        assert!(round.fetch_error.is_none());
        assert!(round.feedback.is_none());
    }

    #[test]
    fn duplicate_fetch_result_is_ignored() {
        let (mut session, _) = session(&["a"], IterationMode::Random);
        session.start();
        fetched_ok(&mut session, "first", &[]);
        fetched_ok(&mut session, "second", &[]);
        assert_eq!(session.round().unwrap().authoritative(), Some("first"));
    }

    #[test]
    fn storage_failures_are_not_fatal() {
        let mut session = QuizSession::open(Box::new(BrokenStore), Selector::default()).unwrap();
        session.start();

        session.add_word("b").unwrap();
        assert_eq!(session.words().len(), 2);
        assert_eq!(session.notice().unwrap().tone, Tone::Error);

        session.set_mode(IterationMode::Random);
        assert_eq!(session.mode(), IterationMode::Random);
    }
}
