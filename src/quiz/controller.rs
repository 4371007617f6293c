//! Async driver for [`QuizSession`]
//!
//! Runs lookups as tokio tasks and the post-judgment pause as a
//! cancellable timer. Both report back through one channel; the session
//! decides whether a result still applies.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::round::RoundId;
use super::session::{Effect, QuizSession, SessionEvent};
use crate::translate::Fetch;
use crate::words::{IterationMode, WordError};

/// Owns a session and performs its effects. Must be used inside a tokio runtime.
pub struct QuizController {
    session: QuizSession,
    fetcher: Arc<dyn Fetch>,
    advance_delay: Duration,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    fetch_task: Option<JoinHandle<()>>,
    advance_token: Option<CancellationToken>,
}

impl QuizController {
    pub fn new(session: QuizSession, fetcher: Arc<dyn Fetch>, advance_delay: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session,
            fetcher,
            advance_delay,
            events_tx,
            events_rx,
            fetch_task: None,
            advance_token: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Pick the first word
    pub fn start(&mut self) {
        let effects = self.session.start();
        self.apply(effects);
    }

    pub fn add_word(&mut self, raw: &str) -> Result<(), WordError> {
        let effects = self.session.add_word(raw)?;
        self.apply(effects);
        Ok(())
    }

    pub fn delete_word(&mut self, word: &str) {
        let effects = self.session.delete_word(word);
        self.apply(effects);
    }

    pub fn delete_current(&mut self) {
        let effects = self.session.delete_current();
        self.apply(effects);
    }

    pub fn set_mode(&mut self, mode: IterationMode) {
        let effects = self.session.set_mode(mode);
        self.apply(effects);
    }

    pub fn submit(&mut self, answer: &str) {
        let effects = self.session.submit(answer);
        self.apply(effects);
    }

    pub fn reveal(&mut self) -> bool {
        self.session.reveal()
    }

    /// Apply every event that has already arrived. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next event and apply it
    pub async fn next_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let effects = self.session.handle(event);
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { round, word } => self.spawn_fetch(round, word),
                Effect::CancelFetch => {
                    if let Some(task) = self.fetch_task.take() {
                        task.abort();
                    }
                }
                Effect::ScheduleAdvance { round } => self.schedule_advance(round),
                Effect::CancelAdvance => {
                    if let Some(token) = self.advance_token.take() {
                        token.cancel();
                    }
                }
            }
        }
    }

    fn spawn_fetch(&mut self, round: RoundId, word: String) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.events_tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let result = fetcher.fetch(&word).await;
            // Receiver gone means the controller was dropped
            let _ = tx.send(SessionEvent::Fetched { round, result });
        }));
    }

    fn schedule_advance(&mut self, round: RoundId) {
        if let Some(token) = self.advance_token.take() {
            token.cancel();
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.events_tx.clone();
        let delay = self.advance_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::debug!("Advance for round {} cancelled", round);
                }
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(SessionEvent::AdvanceDue { round });
                }
            }
        });
        self.advance_token = Some(token);
    }
}

impl Drop for QuizController {
    fn drop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        if let Some(token) = self.advance_token.take() {
            token.cancel();
        }
    }
}
