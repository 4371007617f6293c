//! wordquiz - a terminal vocabulary quiz
//!
//! Keep a list of words, and get asked to translate them one at a time.
//! Answers are checked against a live translation of the word and of its
//! synonyms, so any reasonable translation is accepted.

pub mod app;
pub mod config;
pub mod quiz;
pub mod theme;
pub mod translate;
pub mod ui;
pub mod words;

pub use app::App;
pub use config::Config;
pub use quiz::{QuizController, QuizSession};
pub use theme::Theme;
pub use words::{IterationMode, JsonWordStore, WordStore};
